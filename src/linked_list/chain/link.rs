use alloc::boxed::Box;

use super::traits::Link;

/// The owned remainder of a chain: the next node and everything after it.
pub type Next<T> = Option<Box<T>>;

/// An owned successor slot in a singly linked chain.
#[derive(Debug)]
pub struct OwnedLink<T> {
    next: Next<T>,
}

impl<T> OwnedLink<T> {
    /// Creates an empty slot, marking the end of a chain.
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Detaches and returns the rest of the chain.
    #[inline]
    pub fn take(&mut self) -> Next<T> {
        self.next.take()
    }

    /// Replaces the rest of the chain, releasing what was there.
    #[inline]
    pub fn set(&mut self, next: Next<T>) {
        self.next = next;
    }

    /// Stores `node` as the successor and returns it.
    #[inline]
    pub fn insert(&mut self, node: Box<T>) -> &mut T {
        self.next.insert(node)
    }

    /// Whether the slot is empty, i.e. its owner is a tail.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.next.is_none()
    }
}

impl<T> Default for OwnedLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Link for OwnedLink<T> {
    type Target = T;

    #[inline]
    fn next(&self) -> Option<&T> {
        self.next.as_deref()
    }

    #[inline]
    fn next_mut(&mut self) -> Option<&mut T> {
        self.next.as_deref_mut()
    }
}
