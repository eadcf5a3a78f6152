//! Operations over a chain, addressed by its head.
//!
//! Read-only operations take `Option<&ListNode>` (`chain.as_deref()`), the
//! in-place ones take `Option<&mut ListNode>`, and the ones that may change
//! the head take the [`Chain`] by value and hand back the new head.

use alloc::{boxed::Box, vec::Vec};

use log::debug;

use super::{
    allocator::{Global, NodeAlloc},
    error::{AllocError, AppendError},
    iter::{IntoIter, Iter, IterMut},
    node::{Chain, ListNode},
    traits::{Link, Node},
};

/// Returns the head unchanged. The head reference is the list.
#[inline]
pub fn head(head: Option<&ListNode>) -> Option<&ListNode> {
    head
}

/// Returns the last node, or `None` for an empty list.
pub fn tail(head: Option<&ListNode>) -> Option<&ListNode> {
    let mut current = head?;
    while let Some(next) = current.next() {
        current = next;
    }
    Some(current)
}

/// Returns the last node mutably, or `None` for an empty list.
pub fn tail_mut(head: Option<&mut ListNode>) -> Option<&mut ListNode> {
    let mut current = head?;
    while !current.is_tail() {
        current = current.next_mut()?;
    }
    Some(current)
}

/// Number of nodes reachable from `head`.
pub fn size(head: Option<&ListNode>) -> usize {
    iter(head).count()
}

/// First node holding `value`, head to tail.
pub fn find(head: Option<&ListNode>, value: i32) -> Option<&ListNode> {
    iter(head).find(|node| node.value() == value)
}

/// First node holding `value`, borrowed mutably.
pub fn find_mut(head: Option<&mut ListNode>, value: i32) -> Option<&mut ListNode> {
    let mut current = head;
    while let Some(node) = current {
        if node.value() == value {
            return Some(node);
        }
        current = node.next_mut();
    }
    None
}

/// Zero-based index of the first node holding `value`.
pub fn position(head: Option<&ListNode>, value: i32) -> Option<usize> {
    iter(head).position(|node| node.value() == value)
}

/// Copies every value into a vector sized exactly to the list.
///
/// An empty list gives an empty vector without allocating. If the buffer
/// cannot be reserved nothing is returned.
pub fn to_array(head: Option<&ListNode>) -> Result<Vec<i32>, AllocError> {
    let Some(head) = head else {
        return Ok(Vec::new());
    };

    let len = size(Some(head));
    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|_| AllocError)?;
    values.extend(iter(Some(head)).map(ListNode::value));
    Ok(values)
}

/// Allocates a single node holding `value`.
pub fn create(value: i32) -> Result<Box<ListNode>, AllocError> {
    create_in(value, &Global)
}

/// Like [`create`], drawing the node from `alloc`.
pub fn create_in<A: NodeAlloc + ?Sized>(
    value: i32,
    alloc: &A,
) -> Result<Box<ListNode>, AllocError> {
    alloc.allocate(value)
}

/// Releases every node of the chain, head first.
///
/// Each successor is detached before its predecessor is released.
pub fn destroy(head: Chain) {
    let mut current = head;
    while let Some(mut node) = current {
        current = node.take_next();
    }
}

/// Appends `value` after the current tail.
///
/// Does nothing when the list is empty, since there is no way to hand a new
/// head back. An allocation failure leaves the list unchanged and is not
/// reported. Use [`try_append`] to get both cases handled.
pub fn append(head: Option<&mut ListNode>, value: i32) {
    append_in(head, value, &Global);
}

/// Like [`append`], drawing the node from `alloc`.
pub fn append_in<A: NodeAlloc + ?Sized>(head: Option<&mut ListNode>, value: i32, alloc: &A) {
    let Some(tail) = tail_mut(head) else {
        debug!("append of {value} skipped: list is empty");
        return;
    };

    match alloc.allocate(value) {
        Ok(node) => tail.set_next(Some(node)),
        Err(err) => debug!("append of {value} dropped: {err}"),
    }
}

/// Appends `value` and returns the head, creating the list if it was empty.
///
/// On allocation failure the untouched chain comes back inside the error.
pub fn try_append(head: Chain, value: i32) -> Result<Chain, AppendError> {
    try_append_in(head, value, &Global)
}

/// Like [`try_append`], drawing the node from `alloc`.
pub fn try_append_in<A: NodeAlloc + ?Sized>(
    mut head: Chain,
    value: i32,
    alloc: &A,
) -> Result<Chain, AppendError> {
    let node = match alloc.allocate(value) {
        Ok(node) => node,
        Err(err) => return Err(AppendError::new(head, value, err)),
    };

    match tail_mut(head.as_deref_mut()) {
        Some(tail) => tail.set_next(Some(node)),
        None => head = Some(node),
    }
    Ok(head)
}

/// Builds a chain holding `data` in order.
///
/// Returns `None` for an empty slice or when any allocation fails. Nodes
/// built before a failure are released first.
pub fn from_array(data: &[i32]) -> Chain {
    from_array_in(data, &Global)
}

/// Like [`from_array`], drawing every node from `alloc`.
pub fn from_array_in<A: NodeAlloc + ?Sized>(data: &[i32], alloc: &A) -> Chain {
    try_from_array_in(data, alloc).ok().flatten()
}

/// Like [`from_array`], but tells an allocation failure apart from empty input.
pub fn try_from_array(data: &[i32]) -> Result<Chain, AllocError> {
    try_from_array_in(data, &Global)
}

/// Like [`try_from_array`], drawing every node from `alloc`.
pub fn try_from_array_in<A: NodeAlloc + ?Sized>(
    data: &[i32],
    alloc: &A,
) -> Result<Chain, AllocError> {
    let Some((&first, rest)) = data.split_first() else {
        return Ok(None);
    };

    let mut head = alloc.allocate(first)?;
    let mut tail: &mut ListNode = &mut head;

    for (built, &value) in (1usize..).zip(rest) {
        match alloc.allocate(value) {
            Ok(node) => tail = tail.link_next(node),
            Err(err) => {
                debug!(
                    "building from {} values failed after {built} nodes, releasing them",
                    data.len()
                );
                destroy(Some(head));
                return Err(err);
            }
        }
    }

    Ok(Some(head))
}

/// Removes the first node holding `value` and returns the new head.
///
/// The head only changes when the removed node was the head. At most one
/// node is removed per call.
pub fn remove(head: Chain, value: i32) -> Chain {
    let mut head = head?;
    if head.value() == value {
        return head.take_next();
    }

    let mut prev: &mut ListNode = &mut head;
    while let Some(next) = prev.next() {
        if next.value() == value {
            if let Some(mut matched) = prev.take_next() {
                prev.set_next(matched.take_next());
            }
            break;
        }
        match prev.next_mut() {
            Some(next) => prev = next,
            None => break,
        }
    }

    Some(head)
}

/// Iterates over the nodes, head to tail.
pub fn iter(head: Option<&ListNode>) -> Iter<'_> {
    Iter::new(head)
}

/// Iterates over mutable references to the values.
pub fn iter_mut(head: Option<&mut ListNode>) -> IterMut<'_> {
    IterMut::new(head)
}

/// Consumes the chain, yielding its values and releasing each node.
pub fn into_iter(head: Chain) -> IntoIter {
    IntoIter::new(head)
}

/// Copies of the values, head to tail.
pub fn values(head: Option<&ListNode>) -> impl Iterator<Item = i32> + '_ {
    iter(head).map(ListNode::value)
}
