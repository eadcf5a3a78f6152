//! A singly linked list of `i32` values built from owned nodes.
//!
//! The list has no container object. It is the chain of nodes reachable
//! from a head reference, `Option<Box<ListNode>>`, and every node owns its
//! successor. Dropping the head releases the whole chain. Size, tail and
//! membership are computed by walking the chain.
//!
//! # Examples
//!
//! ```
//! use chain_list::linked_list::chain::{
//!     ops::{find, from_array, position, remove, size, to_array},
//!     traits::Link,
//! };
//!
//! let list = from_array(&[5, 3, 3, 7]);
//! assert_eq!(size(list.as_deref()), 4);
//! assert_eq!(position(list.as_deref(), 3), Some(1));
//!
//! let first_three = find(list.as_deref(), 3).unwrap();
//! assert!(core::ptr::eq(first_three, list.as_deref().unwrap().next().unwrap()));
//!
//! let list = remove(list, 3);
//! assert_eq!(to_array(list.as_deref()).unwrap(), vec![5, 3, 7]);
//!
//! let list = remove(list, 5);
//! assert_eq!(to_array(list.as_deref()).unwrap(), vec![3, 7]);
//! ```
pub mod chain;
