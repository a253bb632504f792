//! Mirrors upstream `maxNode.mjs` / `maxValue.mjs`.

use crate::errors::TreeError;
use crate::types::{Tree, TreeNode};

/// The node holding the largest value.
pub fn max_node<T>(tree: &Tree<T>) -> Result<&TreeNode<T>, TreeError> {
    let mut node = match tree {
        Tree::Empty => return Err(TreeError::EmptyTree),
        Tree::Node(node) => node.as_ref(),
    };
    while let Tree::Node(right) = &node.right {
        node = right.as_ref();
    }
    Ok(node)
}

/// The largest value in the tree.
pub fn max_value<T>(tree: &Tree<T>) -> Result<&T, TreeError> {
    max_node(tree).map(|node| &node.value)
}
