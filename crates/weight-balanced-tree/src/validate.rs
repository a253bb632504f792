//! Mirrors upstream `validate.mjs` — a diagnostic order-invariant check for
//! tests and debugging, not for production paths. Balance is not checked
//! here; a tree can only lose balance through a bug in this crate, while
//! ordering also breaks under an inconsistent caller comparator.

use crate::max_value::max_node;
use crate::min_value::min_node;
use crate::types::{Tree, TreeNode};

/// Which child subtree of the reported node is out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The first subtree found violating the order invariant.
#[derive(Debug)]
pub struct OrderViolation<'a, T> {
    /// The node whose child subtree is out of order.
    pub node: &'a TreeNode<T>,
    pub side: Side,
}

/// Walks the whole tree checking that every left subtree sorts strictly
/// before its node and every right subtree strictly after it.
pub fn validate<'a, T, C>(tree: &'a Tree<T>, cmp: C) -> Result<(), OrderViolation<'a, T>>
where
    C: Fn(&T, &T) -> i32,
{
    validate_rec(tree, &cmp)
}

fn validate_rec<'a, T, C>(tree: &'a Tree<T>, cmp: &C) -> Result<(), OrderViolation<'a, T>>
where
    C: Fn(&T, &T) -> i32,
{
    let node = match tree {
        Tree::Empty => return Ok(()),
        Tree::Node(node) => node,
    };
    if let Ok(left_max) = max_node(&node.left) {
        if cmp(&left_max.value, &node.value) >= 0 {
            return Err(OrderViolation {
                node: node.as_ref(),
                side: Side::Left,
            });
        }
    }
    if let Ok(right_min) = min_node(&node.right) {
        if cmp(&right_min.value, &node.value) <= 0 {
            return Err(OrderViolation {
                node: node.as_ref(),
                side: Side::Right,
            });
        }
    }
    validate_rec(&node.left, cmp)?;
    validate_rec(&node.right, cmp)
}
