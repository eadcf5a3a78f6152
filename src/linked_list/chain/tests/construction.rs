extern crate std;

use std::vec;

use crate::linked_list::chain::{
    node::Chain,
    ops::{append, create, destroy, from_array, size, to_array, try_append, try_from_array},
    traits::{Link, Node},
};

#[test]
fn test_create_single_node() {
    let node = create(11).unwrap();
    assert_eq!(node.value(), 11);
    assert!(node.next().is_none());
    assert!(node.is_tail());
}

#[test]
fn test_from_array_keeps_order() {
    let list = from_array(&[1, 2, 3]);
    assert_eq!(to_array(list.as_deref()).unwrap(), vec![1, 2, 3]);
    assert_eq!(size(list.as_deref()), 3);
}

#[test]
fn test_from_array_empty() {
    assert!(from_array(&[]).is_none());
    assert!(try_from_array(&[]).unwrap().is_none());
}

#[test]
fn test_linked_by_hand_matches_from_array() {
    let mut head = create(1).unwrap();
    head.link_next(create(2).unwrap()).link_next(create(3).unwrap());

    let built = from_array(&[1, 2, 3]);
    assert_eq!(
        to_array(Some(&*head)).unwrap(),
        to_array(built.as_deref()).unwrap()
    );
}

#[test]
fn test_append_to_tail() {
    let mut list = from_array(&[1]);
    append(list.as_deref_mut(), 2);
    append(list.as_deref_mut(), 3);
    assert_eq!(to_array(list.as_deref()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_append_to_empty_is_noop() {
    let mut list: Chain = None;
    append(list.as_deref_mut(), 5);
    assert!(list.is_none());
}

#[test]
fn test_try_append_creates_list() {
    let list = try_append(None, 5).unwrap();
    assert_eq!(to_array(list.as_deref()).unwrap(), vec![5]);

    let list = try_append(list, 6).unwrap();
    assert_eq!(to_array(list.as_deref()).unwrap(), vec![5, 6]);
}

#[test]
fn test_destroy() {
    destroy(None);
    destroy(from_array(&[1, 2, 3]));
    destroy(Some(create(4).unwrap()));
}

#[test]
fn test_set_next_replaces_rest() {
    let mut list = from_array(&[1, 2, 3]).unwrap();
    list.set_next(from_array(&[9]));
    assert_eq!(to_array(Some(&*list)).unwrap(), vec![1, 9]);

    let rest = list.take_next();
    assert!(list.is_tail());
    assert_eq!(to_array(rest.as_deref()).unwrap(), vec![9]);
}

#[test]
fn test_debug_lists_values() {
    let list = from_array(&[1, 2, 3]).unwrap();
    assert_eq!(std::format!("{:?}", list), "[1, 2, 3]");
}

#[test]
fn test_drop_long_chain() {
    let data: std::vec::Vec<i32> = (0..1_000_000).collect();
    let list = from_array(&data);
    assert_eq!(size(list.as_deref()), 1_000_000);
    drop(list);
}
