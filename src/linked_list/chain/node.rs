use core::fmt;

use chain_list_derive::Node;

use super::{
    iter::Iter,
    link::{Next, OwnedLink},
    traits::{Link, Node, NodeWithData},
};

/// The head reference of a chain. `None` is the empty list.
pub type Chain = Next<ListNode>;

/// A node in a singly linked chain of `i32` values.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct ListNode {
    link: OwnedLink<ListNode>,
    data: i32,
}

impl ListNode {
    /// Creates a node holding `value` with no successor.
    pub const fn new(value: i32) -> Self {
        Self {
            link: OwnedLink::new(),
            data: value,
        }
    }

    #[inline]
    pub fn value(&self) -> i32 {
        *self.data()
    }

    #[inline]
    pub fn set_value(&mut self, value: i32) {
        *self.data_mut() = value;
    }

    /// Borrows the value and the successor at the same time.
    pub(crate) fn split_mut(&mut self) -> (&mut i32, Option<&mut ListNode>) {
        (&mut self.data, self.link.next_mut())
    }
}

impl Drop for ListNode {
    // Unlink successors one at a time so a long chain is not dropped recursively.
    fn drop(&mut self) {
        let mut next = self.take_next();
        while let Some(mut node) = next {
            next = node.take_next();
        }
    }
}

impl fmt::Debug for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter::new(Some(self)).map(ListNode::value))
            .finish()
    }
}
