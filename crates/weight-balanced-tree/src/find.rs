//! Mirrors upstream `find.mjs`.

use crate::types::Tree;

/// Finds the value comparing equal to `key`.
///
/// Rust divergence: upstream takes a caller-supplied default value; the
/// port returns `Option`.
pub fn find<'a, T, K, C>(tree: &'a Tree<T>, key: &K, cmp: C) -> Option<&'a T>
where
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    let mut current = tree;
    while let Tree::Node(node) = current {
        let order = cmp(key, &node.value);
        if order == 0 {
            return Some(&node.value);
        }
        current = if order < 0 { &node.left } else { &node.right };
    }
    None
}
