//! Mirrors upstream `indexOf.mjs`.

use crate::types::Tree;

/// The rank of the value matching `key` in sorted order.
///
/// Rust divergence: upstream returns `-1` on a miss; the port returns
/// `Option`.
pub fn index_of<T, K, C>(tree: &Tree<T>, key: &K, cmp: C) -> Option<usize>
where
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    let mut offset = 0;
    let mut current = tree;
    while let Tree::Node(node) = current {
        let order = cmp(key, &node.value);
        if order == 0 {
            return Some(offset + node.left.size());
        }
        if order < 0 {
            current = &node.left;
        } else {
            offset += node.left.size() + 1;
            current = &node.right;
        }
    }
    None
}

#[allow(non_snake_case)]
pub fn indexOf<T, K, C>(tree: &Tree<T>, key: &K, cmp: C) -> Option<usize>
where
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    index_of(tree, key, cmp)
}
