//! Mirrors upstream `symmetricDifference.mjs`.

use crate::join::{join, join2};
use crate::split::split;
use crate::types::Tree;

/// The values appearing in exactly one of the two trees. Like
/// [`crate::difference`], but the unmatched structure of `t2` is folded in
/// as well. Either input comes back by reference identity when the other is
/// empty.
pub fn symmetric_difference<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    symmetric_difference_rec(t1, t2, &cmp)
}

fn symmetric_difference_rec<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: &C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    let node = match t1 {
        Tree::Empty => return t2.clone(),
        Tree::Node(node) => node,
    };
    if t2.is_empty() {
        return t1.clone();
    }
    let (smaller, equal, larger) = split(t2, &node.value, cmp);
    let left = symmetric_difference_rec(&node.left, &smaller, cmp);
    let right = symmetric_difference_rec(&node.right, &larger, cmp);
    if !equal.is_empty() {
        return join2(left, right);
    }
    if left.ptr_eq(&node.left) && right.ptr_eq(&node.right) {
        return t1.clone();
    }
    join(left, node.value.clone(), right)
}

#[allow(non_snake_case)]
pub fn symmetricDifference<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    symmetric_difference(t1, t2, cmp)
}
