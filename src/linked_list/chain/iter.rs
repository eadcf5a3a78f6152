use super::{
    node::{Chain, ListNode},
    traits::{Link, Node},
};

/// An iterator over the nodes of a chain, head to tail.
#[derive(Clone)]
pub struct Iter<'a> {
    current: Option<&'a ListNode>,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator starting at `head`.
    pub fn new(head: Option<&'a ListNode>) -> Self {
        Self { current: head }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.next();
        Some(current)
    }
}

/// An iterator over mutable references to the values of a chain.
pub struct IterMut<'a> {
    current: Option<&'a mut ListNode>,
}

impl<'a> IterMut<'a> {
    /// Creates a new iterator starting at `head`.
    pub fn new(head: Option<&'a mut ListNode>) -> Self {
        Self { current: head }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut i32;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let (value, next) = current.split_mut();
        self.current = next;
        Some(value)
    }
}

/// A consuming iterator that releases each node as its value is yielded.
pub struct IntoIter {
    head: Chain,
}

impl IntoIter {
    /// Takes ownership of the chain starting at `head`.
    pub fn new(head: Chain) -> Self {
        Self { head }
    }
}

impl Iterator for IntoIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let mut node = self.head.take()?;
        self.head = node.take_next();
        Some(node.value())
    }
}
