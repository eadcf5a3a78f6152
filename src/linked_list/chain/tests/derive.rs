extern crate std;

use std::{boxed::Box, vec::Vec};

use crate::linked_list::chain::{
    Node,
    link::OwnedLink,
    traits::{Link, Node as _, NodeWithData},
};

#[derive(Node)]
#[node(crate_path = "crate")]
struct Tagged {
    link: OwnedLink<Tagged>,
    data: &'static str,
}

impl Tagged {
    fn boxed(data: &'static str) -> Box<Self> {
        Box::new(Self {
            link: OwnedLink::new(),
            data,
        })
    }
}

#[derive(Node)]
#[node(crate_path = "crate")]
struct Generic<T> {
    link: OwnedLink<Generic<T>>,
    data: T,
}

#[test]
fn test_derived_node_links() {
    let mut head = Tagged::boxed("a");
    head.link_next(Tagged::boxed("b"))
        .link_next(Tagged::boxed("c"));

    let mut seen = Vec::new();
    let mut current: Option<&Tagged> = Some(&head);
    while let Some(node) = current {
        seen.push(*node.data());
        current = node.next();
    }
    assert_eq!(seen, ["a", "b", "c"]);
}

#[test]
fn test_derived_node_detach() {
    let mut head = Tagged::boxed("a");
    head.link_next(Tagged::boxed("b"));
    assert!(!head.is_tail());

    let rest = head.take_next().unwrap();
    assert!(head.is_tail());
    assert_eq!(*rest.data(), "b");

    *head.data_mut() = "z";
    assert_eq!(head.data, "z");
}

#[test]
fn test_derived_generic_node() {
    let mut node = Generic {
        link: OwnedLink::new(),
        data: 1u64,
    };
    node.link_next(Box::new(Generic {
        link: OwnedLink::new(),
        data: 2u64,
    }));
    assert_eq!(node.next_mut().map(|next| *next.data()), Some(2));
}
