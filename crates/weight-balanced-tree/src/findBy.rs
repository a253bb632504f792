//! Mirrors upstream `findBy.mjs`.

use crate::types::Tree;

/// Finds a value with a unary probe consistent with the tree order:
/// negative sends the search left, positive right, zero is a match.
///
/// Useful when the probe is derived from something other than a full value,
/// e.g. searching map entries by key alone.
pub fn find_by<T, C>(tree: &Tree<T>, cmp: C) -> Option<&T>
where
    C: Fn(&T) -> i32,
{
    let mut current = tree;
    while let Tree::Node(node) = current {
        let order = cmp(&node.value);
        if order == 0 {
            return Some(&node.value);
        }
        current = if order < 0 { &node.left } else { &node.right };
    }
    None
}
