//! Mirrors upstream `minNode.mjs` / `minValue.mjs`.

use crate::errors::TreeError;
use crate::types::{Tree, TreeNode};

/// The node holding the smallest value.
pub fn min_node<T>(tree: &Tree<T>) -> Result<&TreeNode<T>, TreeError> {
    let mut node = match tree {
        Tree::Empty => return Err(TreeError::EmptyTree),
        Tree::Node(node) => node.as_ref(),
    };
    while let Tree::Node(left) = &node.left {
        node = left.as_ref();
    }
    Ok(node)
}

/// The smallest value in the tree.
pub fn min_value<T>(tree: &Tree<T>) -> Result<&T, TreeError> {
    min_node(tree).map(|node| &node.value)
}
