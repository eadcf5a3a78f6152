use alloc::boxed::Box;

use super::link::{Next, OwnedLink};

/// A trait for a link in a chain.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next node in the chain
    fn next(&self) -> Option<&Self::Target>;

    /// Get the next node in the chain mutably
    fn next_mut(&mut self) -> Option<&mut Self::Target>;
}

/// A trait for a node that owns its successor.
///
/// Only the two accessors are required. They are usually generated with
/// `#[derive(Node)]` on a struct that has a `link: OwnedLink<Self>` field.
pub trait Node: Link<Target = Self> {
    /// Get the successor slot of this node
    fn link(&self) -> &OwnedLink<Self>;

    /// Get the successor slot of this node mutably
    fn link_mut(&mut self) -> &mut OwnedLink<Self>;

    /// Detach and return everything after this node
    fn take_next(&mut self) -> Next<Self> {
        self.link_mut().take()
    }

    /// Replace everything after this node, releasing the old successors
    fn set_next(&mut self, next: Next<Self>) {
        self.link_mut().set(next);
    }

    /// Make `node` the successor and return it
    fn link_next(&mut self, node: Box<Self>) -> &mut Self {
        self.link_mut().insert(node)
    }

    /// Check if this node is the last one of its chain
    fn is_tail(&self) -> bool {
        self.link().is_end()
    }
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
