//! Mirrors upstream `setIndex.mjs`.

use std::sync::Arc;

use crate::errors::TreeError;
use crate::types::{Tree, TreeNode};

/// Replaces the value at rank `index`, sharing everything off the rebuilt
/// path. Index normalization is the same as [`crate::at`].
///
/// The replacement is positional: keeping it consistent with the tree's
/// comparator is the caller's contract, exactly as for [`crate::splice`].
pub fn set_index<T: Clone>(tree: &Tree<T>, index: isize, value: T) -> Result<Tree<T>, TreeError> {
    let size = tree.size();
    let normalized = if index < 0 {
        index + size as isize
    } else {
        index
    };
    if normalized < 0 || normalized as usize >= size {
        return Err(TreeError::IndexOutOfRange { index, size });
    }
    Ok(set_rec(tree, normalized as usize, value))
}

fn set_rec<T: Clone>(tree: &Tree<T>, index: usize, value: T) -> Tree<T> {
    let node = match tree {
        Tree::Empty => return Tree::Empty,
        Tree::Node(node) => node,
    };
    let left_size = node.left.size();
    if index == left_size {
        Tree::Node(Arc::new(TreeNode {
            value,
            size: node.size,
            left: node.left.clone(),
            right: node.right.clone(),
        }))
    } else if index < left_size {
        Tree::Node(Arc::new(TreeNode {
            value: node.value.clone(),
            size: node.size,
            left: set_rec(&node.left, index, value),
            right: node.right.clone(),
        }))
    } else {
        Tree::Node(Arc::new(TreeNode {
            value: node.value.clone(),
            size: node.size,
            left: node.left.clone(),
            right: set_rec(&node.right, index - left_size - 1, value),
        }))
    }
}

#[allow(non_snake_case)]
pub fn setIndex<T: Clone>(tree: &Tree<T>, index: isize, value: T) -> Result<Tree<T>, TreeError> {
    set_index(tree, index, value)
}
