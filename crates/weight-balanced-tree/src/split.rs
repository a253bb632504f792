//! Mirrors upstream `split.mjs`, `splitFirst.mjs`, and `splitLast.mjs`.

use crate::join::join;
use crate::types::{branch, Tree};

/// Partitions `tree` into `(smaller, equal, larger)` relative to `key`.
///
/// `equal` is the matching node detached from its children (size 1), or
/// [`Tree::Empty`] when no value compares equal to `key`.
pub fn split<T, K, C>(tree: &Tree<T>, key: &K, cmp: C) -> (Tree<T>, Tree<T>, Tree<T>)
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    split_rec(tree, key, &cmp)
}

fn split_rec<T, K, C>(tree: &Tree<T>, key: &K, cmp: &C) -> (Tree<T>, Tree<T>, Tree<T>)
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    let node = match tree {
        Tree::Empty => return (Tree::Empty, Tree::Empty, Tree::Empty),
        Tree::Node(node) => node,
    };
    let order = cmp(key, &node.value);
    if order == 0 {
        (
            node.left.clone(),
            branch(node.value.clone(), Tree::Empty, Tree::Empty),
            node.right.clone(),
        )
    } else if order < 0 {
        let (smaller, equal, larger) = split_rec(&node.left, key, cmp);
        (
            smaller,
            equal,
            join(larger, node.value.clone(), node.right.clone()),
        )
    } else {
        let (smaller, equal, larger) = split_rec(&node.right, key, cmp);
        (
            join(node.left.clone(), node.value.clone(), smaller),
            equal,
            larger,
        )
    }
}

/// Detaches the minimum value, returning it with the remainder of the tree.
/// `None` on an empty tree.
pub fn split_first<T: Clone>(tree: &Tree<T>) -> Option<(T, Tree<T>)> {
    let node = match tree {
        Tree::Empty => return None,
        Tree::Node(node) => node,
    };
    match split_first(&node.left) {
        None => Some((node.value.clone(), node.right.clone())),
        Some((min, rest)) => Some((
            min,
            join(rest, node.value.clone(), node.right.clone()),
        )),
    }
}

/// Detaches the maximum value, returning the remainder of the tree with it.
/// `None` on an empty tree.
pub fn split_last<T: Clone>(tree: &Tree<T>) -> Option<(Tree<T>, T)> {
    let node = match tree {
        Tree::Empty => return None,
        Tree::Node(node) => node,
    };
    match split_last(&node.right) {
        None => Some((node.left.clone(), node.value.clone())),
        Some((rest, max)) => Some((
            join(node.left.clone(), node.value.clone(), rest),
            max,
        )),
    }
}
