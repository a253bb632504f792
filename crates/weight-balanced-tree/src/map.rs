//! Mirrors upstream `map.mjs`.

use std::sync::Arc;

use crate::types::{Tree, TreeNode};

/// Transforms every value, preserving the tree shape (and so every size
/// annotation). The transform runs in ascending value order and must be
/// monotone under the comparator the result will be used with; that
/// contract is the caller's, not checked here.
pub fn map<T, U, F>(tree: &Tree<T>, mut transform: F) -> Tree<U>
where
    F: FnMut(&T) -> U,
{
    map_rec(tree, &mut transform)
}

fn map_rec<T, U, F>(tree: &Tree<T>, transform: &mut F) -> Tree<U>
where
    F: FnMut(&T) -> U,
{
    match tree {
        Tree::Empty => Tree::Empty,
        Tree::Node(node) => {
            let left = map_rec(&node.left, transform);
            let value = transform(&node.value);
            let right = map_rec(&node.right, transform);
            Tree::Node(Arc::new(TreeNode {
                value,
                size: node.size,
                left,
                right,
            }))
        }
    }
}
