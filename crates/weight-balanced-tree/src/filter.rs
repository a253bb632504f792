//! Mirrors upstream `filter.mjs`.

use crate::join::{join, join2};
use crate::types::Tree;

/// The values for which `predicate` holds, in a new tree. Returns the input
/// by reference identity when nothing was dropped. The predicate runs in
/// ascending value order.
pub fn filter<T, P>(tree: &Tree<T>, mut predicate: P) -> Tree<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    filter_rec(tree, &mut predicate)
}

fn filter_rec<T, P>(tree: &Tree<T>, predicate: &mut P) -> Tree<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let node = match tree {
        Tree::Empty => return Tree::Empty,
        Tree::Node(node) => node,
    };
    let left = filter_rec(&node.left, predicate);
    let keep = predicate(&node.value);
    let right = filter_rec(&node.right, predicate);
    if !keep {
        return join2(left, right);
    }
    if left.ptr_eq(&node.left) && right.ptr_eq(&node.right) {
        return tree.clone();
    }
    join(left, node.value.clone(), right)
}
