//! Mirrors upstream `findNext.mjs`.

use crate::types::Tree;

/// The smallest value comparing strictly greater than `key`, or `None` when
/// `key` is at or past the maximum.
pub fn find_next<'a, T, K, C>(tree: &'a Tree<T>, key: &K, cmp: C) -> Option<&'a T>
where
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    let mut current = tree;
    let mut result = None;
    while let Tree::Node(node) = current {
        if cmp(key, &node.value) < 0 {
            result = Some(&node.value);
            current = &node.left;
        } else {
            current = &node.right;
        }
    }
    result
}
