//! Mirrors upstream `difference.mjs`.

use crate::join::{join, join2};
use crate::split::split;
use crate::types::Tree;

/// The values of `t1` with no match in `t2`. Returns `t1` by reference
/// identity when nothing was removed.
pub fn difference<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    difference_rec(t1, t2, &cmp)
}

fn difference_rec<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: &C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    let node = match t1 {
        Tree::Empty => return Tree::Empty,
        Tree::Node(node) => node,
    };
    if t2.is_empty() {
        return t1.clone();
    }
    let (smaller, equal, larger) = split(t2, &node.value, cmp);
    let left = difference_rec(&node.left, &smaller, cmp);
    let right = difference_rec(&node.right, &larger, cmp);
    if !equal.is_empty() {
        return join2(left, right);
    }
    if left.ptr_eq(&node.left) && right.ptr_eq(&node.right) {
        return t1.clone();
    }
    join(left, node.value.clone(), right)
}
