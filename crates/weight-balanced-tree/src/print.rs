//! Debug tree printer.
//!
//! Not part of the upstream surface; an indented dump for troubleshooting
//! and test failure output.

use std::fmt::Debug;

use crate::types::{Tree, TreeNode};

/// An indented multi-line dump of the tree, one node per line with its
/// subtree size. `←` marks a left child, `→` a right child.
pub fn print<T: Debug>(tree: &Tree<T>) -> String {
    match tree {
        Tree::Empty => "Tree ∅".to_string(),
        Tree::Node(node) => format!("Tree{}", print_node(node, "", "└─")),
    }
}

fn print_node<T: Debug>(node: &TreeNode<T>, tab: &str, branch: &str) -> String {
    let mut out = format!("\n{tab}{branch} {:?} [size={}]", node.value, node.size);
    if let Tree::Node(left) = &node.left {
        out.push_str(&print_node(left, &format!("{tab}  "), "←"));
    }
    if let Tree::Node(right) = &node.right {
        out.push_str(&print_node(right, &format!("{tab}  "), "→"));
    }
    out
}
