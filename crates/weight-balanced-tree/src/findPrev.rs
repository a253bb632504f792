//! Mirrors upstream `findPrev.mjs`.

use crate::types::Tree;

/// The largest value comparing strictly less than `key`, or `None` when
/// `key` is at or before the minimum.
pub fn find_prev<'a, T, K, C>(tree: &'a Tree<T>, key: &K, cmp: C) -> Option<&'a T>
where
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    let mut current = tree;
    let mut result = None;
    while let Tree::Node(node) = current {
        if cmp(key, &node.value) > 0 {
            result = Some(&node.value);
            current = &node.right;
        } else {
            current = &node.left;
        }
    }
    result
}
