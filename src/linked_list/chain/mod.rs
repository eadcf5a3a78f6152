//! # Owned Chain
//!
//! This module provides a singly linked chain whose nodes own their successors.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits for the chain, `Link`, `Node` and `NodeWithData`.
//! - [`link::OwnedLink`]: The owned successor slot embedded in every node.
//! - [`node::ListNode`]: The `i32` node, and [`node::Chain`], the head reference type.
//! - [`ops`]: Head/tail access, search, conversion, append and removal.
//! - [`iter`]: Borrowing, mutable and consuming iterators.
//! - [`allocator`]: Fallible node allocation through the [`allocator::NodeAlloc`] trait.
//!
//! ## Ownership
//!
//! Each node exclusively owns the next one, so a chain cannot contain a cycle
//! and a removed node is released as soon as it is unlinked. Callers that
//! receive a new head from an operation must rebind their reference to it.

pub mod allocator;
pub mod error;
pub mod iter;
pub mod link;
pub mod node;
pub mod ops;
pub mod traits;

pub use chain_list_derive::Node;

#[cfg(test)]
mod tests;
