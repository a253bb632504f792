//! Mirrors upstream `splitIndex.mjs`: [`crate::split`] keyed by rank instead
//! of by comparator, the primitive behind `slice` and `splice`.

use crate::join::join;
use crate::types::{branch, Tree};

/// Partitions `tree` into `(smaller, equal, larger)` around the value at
/// rank `index`: `smaller` holds ranks below it, `equal` the detached node
/// at `index` (or [`Tree::Empty`] when `index >= size`), `larger` the rest.
pub fn split_index<T: Clone>(tree: &Tree<T>, index: usize) -> (Tree<T>, Tree<T>, Tree<T>) {
    let node = match tree {
        Tree::Empty => return (Tree::Empty, Tree::Empty, Tree::Empty),
        Tree::Node(node) => node,
    };
    let left_size = node.left.size();
    if index == left_size {
        (
            node.left.clone(),
            branch(node.value.clone(), Tree::Empty, Tree::Empty),
            node.right.clone(),
        )
    } else if index < left_size {
        let (smaller, equal, larger) = split_index(&node.left, index);
        (
            smaller,
            equal,
            join(larger, node.value.clone(), node.right.clone()),
        )
    } else {
        let (smaller, equal, larger) = split_index(&node.right, index - left_size - 1);
        (
            join(node.left.clone(), node.value.clone(), smaller),
            equal,
            larger,
        )
    }
}

#[allow(non_snake_case)]
pub fn splitIndex<T: Clone>(tree: &Tree<T>, index: usize) -> (Tree<T>, Tree<T>, Tree<T>) {
    split_index(tree, index)
}

/// Splits off the first `count` values: `(first count, rest)`.
pub(crate) fn split_at<T: Clone>(tree: &Tree<T>, count: usize) -> (Tree<T>, Tree<T>) {
    if count == 0 {
        return (Tree::Empty, tree.clone());
    }
    if count >= tree.size() {
        return (tree.clone(), Tree::Empty);
    }
    let (smaller, equal, larger) = split_index(tree, count);
    // The value at rank `count` belongs to the rest.
    match equal {
        Tree::Empty => (smaller, larger),
        Tree::Node(node) => (smaller, join(Tree::Empty, node.value.clone(), larger)),
    }
}
