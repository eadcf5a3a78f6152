use alloc::{alloc::Layout, boxed::Box};
use core::{cell::Cell, ptr::NonNull};

use log::trace;

use super::{error::AllocError, node::ListNode};

/// A source of node storage that may run out.
///
/// Every node the crate builds goes through this trait, so a failing
/// allocation is reported as [`AllocError`] instead of aborting. The boxes
/// handed out must come from the global allocator, since dropping a node
/// returns its storage there.
pub trait NodeAlloc {
    /// Allocate a node holding `value` with no successor.
    fn allocate(&self, value: i32) -> Result<Box<ListNode>, AllocError>;
}

impl<A: NodeAlloc + ?Sized> NodeAlloc for &A {
    fn allocate(&self, value: i32) -> Result<Box<ListNode>, AllocError> {
        (**self).allocate(value)
    }
}

/// The process-wide allocator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl NodeAlloc for Global {
    fn allocate(&self, value: i32) -> Result<Box<ListNode>, AllocError> {
        let layout = Layout::new::<ListNode>();
        // `ListNode` is never zero-sized, which `alloc` requires.
        let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<ListNode>();
        let Some(ptr) = NonNull::new(raw) else {
            trace!("global allocator refused {} bytes for a node", layout.size());
            return Err(AllocError);
        };

        unsafe {
            ptr.as_ptr().write(ListNode::new(value));
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }
}

/// An allocator that succeeds a fixed number of times and then fails.
///
/// Useful for exercising out-of-memory paths.
#[derive(Debug)]
pub struct FailAfter {
    remaining: Cell<usize>,
}

impl FailAfter {
    /// Allows `successes` allocations before failing.
    pub const fn new(successes: usize) -> Self {
        Self {
            remaining: Cell::new(successes),
        }
    }

    /// Number of allocations left before every request fails.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }
}

impl NodeAlloc for FailAfter {
    fn allocate(&self, value: i32) -> Result<Box<ListNode>, AllocError> {
        let remaining = self.remaining.get();
        if remaining == 0 {
            trace!("allocation budget exhausted, refusing node for {value}");
            return Err(AllocError);
        }
        let node = Global.allocate(value)?;
        self.remaining.set(remaining - 1);
        Ok(node)
    }
}
