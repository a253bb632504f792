//! Shared helpers for the integration matrices.
#![allow(dead_code)]

pub mod fuzzer;

use std::fmt::Debug;

use weight_balanced_tree::{balancing_parameters, iterate, Tree};

/// Panics on the first violated size, order, or weight-balance invariant.
pub fn assert_valid_tree<T: PartialOrd + Debug>(tree: &Tree<T>) {
    check_subtree(tree);
    let values: Vec<&T> = iterate(tree).collect();
    for pair in values.windows(2) {
        assert!(
            pair[0] < pair[1],
            "values out of order: {:?} !< {:?}",
            pair[0],
            pair[1]
        );
    }
}

fn check_subtree<T: PartialOrd + Debug>(tree: &Tree<T>) -> usize {
    let node = match tree {
        Tree::Empty => return 0,
        Tree::Node(node) => node,
    };
    let left = check_subtree(&node.left);
    let right = check_subtree(&node.right);
    assert_eq!(
        node.size,
        left + right + 1,
        "size field does not match subtree sizes"
    );
    let (delta, _) = balancing_parameters();
    if left + right > 1 {
        assert!(
            left <= delta * right && right <= delta * left,
            "weight balance violated: left={left} right={right} delta={delta}"
        );
    }
    node.size
}
