//! Mirrors upstream `join.mjs` and `join2.mjs`.
//!
//! `join` concatenates two trees around a pivot value known to sort between
//! them. When the two sides are close in size it builds a node directly;
//! otherwise it descends the near spine of the heavy side and rebalances on
//! the way back, so the cost is proportional to the difference of the
//! subtree heights rather than the height of the result. That bound is what
//! makes the set combinators sub-logarithmic-amortized.
//!
//! Both functions consume their operands; callers that keep the originals
//! clone them first (a reference-count bump).

use std::sync::Arc;

use crate::balance::{balance_left, balance_right, is_heavy};
use crate::split::split_last;
use crate::types::{branch, Tree};

/// Combines `left`, `value`, and `right` into one balanced tree.
///
/// Every value in `left` must sort before `value`, and every value in
/// `right` after it, under the comparator the operands were built with. The
/// ordering is trusted, not checked.
pub fn join<T: Clone>(left: Tree<T>, value: T, right: Tree<T>) -> Tree<T> {
    let l = match &left {
        Tree::Node(node) => Arc::clone(node),
        Tree::Empty => return insert_min(value, right),
    };
    let r = match &right {
        Tree::Node(node) => Arc::clone(node),
        Tree::Empty => return insert_max(left, value),
    };
    if is_heavy(r.size, l.size) {
        balance_left(
            r.value.clone(),
            join(left, value, r.left.clone()),
            r.right.clone(),
        )
    } else if is_heavy(l.size, r.size) {
        balance_right(
            l.value.clone(),
            l.left.clone(),
            join(l.right.clone(), value, right),
        )
    } else {
        branch(value, left, right)
    }
}

/// Merges two ordered trees with no pivot by extracting the maximum of
/// `left` and joining around it.
///
/// When either side is empty the other is returned unchanged, preserving
/// reference identity.
pub fn join2<T: Clone>(left: Tree<T>, right: Tree<T>) -> Tree<T> {
    if right.is_empty() {
        return left;
    }
    match split_last(&left) {
        None => right,
        Some((rest, max)) => join(rest, max, right),
    }
}

/// Inserts `value` as the new minimum of `tree`.
fn insert_min<T: Clone>(value: T, tree: Tree<T>) -> Tree<T> {
    match tree {
        Tree::Empty => branch(value, Tree::Empty, Tree::Empty),
        Tree::Node(node) => balance_left(
            node.value.clone(),
            insert_min(value, node.left.clone()),
            node.right.clone(),
        ),
    }
}

/// Inserts `value` as the new maximum of `tree`.
fn insert_max<T: Clone>(tree: Tree<T>, value: T) -> Tree<T> {
    match tree {
        Tree::Empty => branch(value, Tree::Empty, Tree::Empty),
        Tree::Node(node) => balance_right(
            node.value.clone(),
            node.left.clone(),
            insert_max(node.right.clone(), value),
        ),
    }
}
