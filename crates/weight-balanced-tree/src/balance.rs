//! Balance primitives.
//!
//! Mirrors upstream `balance.mjs`: the heaviness predicate, the four
//! rotations, and `balanceLeft` / `balanceRight`, which repair a node whose
//! children went out of balance by at most one moved element.
//!
//! The weight-balance invariant is controlled by two process-wide constants.
//! DELTA bounds the size ratio tolerated between sibling subtrees; RATIO
//! picks between a single and a double rotation once a subtree is too heavy.
//! See [`crate::set_balancing_parameters`] for the caveats around changing
//! them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::types::{branch, Tree, TreeNode};

static DELTA: AtomicUsize = AtomicUsize::new(3);
static RATIO: AtomicUsize = AtomicUsize::new(2);

#[inline]
pub(crate) fn delta() -> usize {
    DELTA.load(Ordering::Relaxed)
}

#[inline]
pub(crate) fn ratio() -> usize {
    RATIO.load(Ordering::Relaxed)
}

pub(crate) fn load_parameters() -> (usize, usize) {
    (delta(), ratio())
}

pub(crate) fn store_parameters(delta: usize, ratio: usize) {
    DELTA.store(delta, Ordering::Relaxed);
    RATIO.store(ratio, Ordering::Relaxed);
}

/// `true` when a subtree of weight `w1` is too heavy against a sibling of
/// weight `w2`.
#[inline]
pub(crate) fn is_heavy(w1: usize, w2: usize) -> bool {
    w1 > delta() * w2
}

/// Repairs a node whose left subtree may exceed the balance bound after one
/// element moved into it (or out of its sibling). At most one, possibly
/// double, rotation.
pub(crate) fn balance_left<T: Clone>(value: T, left: Tree<T>, right: Tree<T>) -> Tree<T> {
    if left.size() + right.size() <= 1 || !is_heavy(left.size(), right.size()) {
        return branch(value, left, right);
    }
    let l = match &left {
        Tree::Node(node) => Arc::clone(node),
        Tree::Empty => return branch(value, left, right),
    };
    if l.right.size() < ratio() * l.left.size() {
        rotate_right(value, &l, right)
    } else {
        rotate_left_right(value, &l, right)
    }
}

/// Repairs a node whose right subtree may exceed the balance bound after one
/// element moved into it (or out of its sibling).
pub(crate) fn balance_right<T: Clone>(value: T, left: Tree<T>, right: Tree<T>) -> Tree<T> {
    if left.size() + right.size() <= 1 || !is_heavy(right.size(), left.size()) {
        return branch(value, left, right);
    }
    let r = match &right {
        Tree::Node(node) => Arc::clone(node),
        Tree::Empty => return branch(value, left, right),
    };
    if r.left.size() < ratio() * r.right.size() {
        rotate_left(value, left, &r)
    } else {
        rotate_right_left(value, left, &r)
    }
}

/// Single rotation for a left-heavy node.
fn rotate_right<T: Clone>(value: T, l: &TreeNode<T>, right: Tree<T>) -> Tree<T> {
    branch(
        l.value.clone(),
        l.left.clone(),
        branch(value, l.right.clone(), right),
    )
}

/// Single rotation for a right-heavy node.
fn rotate_left<T: Clone>(value: T, left: Tree<T>, r: &TreeNode<T>) -> Tree<T> {
    branch(
        r.value.clone(),
        branch(value, left, r.left.clone()),
        r.right.clone(),
    )
}

/// Double rotation for a left-heavy node whose inner grandchild dominates.
fn rotate_left_right<T: Clone>(value: T, l: &TreeNode<T>, right: Tree<T>) -> Tree<T> {
    let lr = match &l.right {
        Tree::Node(node) => node,
        Tree::Empty => return rotate_right(value, l, right),
    };
    branch(
        lr.value.clone(),
        branch(l.value.clone(), l.left.clone(), lr.left.clone()),
        branch(value, lr.right.clone(), right),
    )
}

/// Double rotation for a right-heavy node whose inner grandchild dominates.
fn rotate_right_left<T: Clone>(value: T, left: Tree<T>, r: &TreeNode<T>) -> Tree<T> {
    let rl = match &r.left {
        Tree::Node(node) => node,
        Tree::Empty => return rotate_left(value, left, r),
    };
    branch(
        rl.value.clone(),
        branch(value, left, rl.left.clone()),
        branch(r.value.clone(), rl.right.clone(), r.right.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create::create;

    fn root_value(tree: &Tree<i32>) -> i32 {
        match tree {
            Tree::Node(node) => node.value,
            Tree::Empty => panic!("empty tree"),
        }
    }

    #[test]
    fn single_rotation_on_outer_chain() {
        // 3 over (2 over 1): the outer grandchild dominates.
        let left = branch(2, create(1), Tree::Empty);
        let tree = balance_left(3, left, Tree::Empty);
        assert_eq!(root_value(&tree), 2);
        match &tree {
            Tree::Node(node) => {
                assert_eq!(root_value(&node.left), 1);
                assert_eq!(root_value(&node.right), 3);
                assert_eq!(node.size, 3);
            }
            Tree::Empty => unreachable!(),
        }
    }

    #[test]
    fn double_rotation_on_inner_chain() {
        // 3 over (1 over 2): the inner grandchild dominates.
        let left = branch(1, Tree::Empty, create(2));
        let tree = balance_left(3, left, Tree::Empty);
        assert_eq!(root_value(&tree), 2);
        match &tree {
            Tree::Node(node) => {
                assert_eq!(root_value(&node.left), 1);
                assert_eq!(root_value(&node.right), 3);
            }
            Tree::Empty => unreachable!(),
        }
    }

    #[test]
    fn balanced_children_are_left_alone() {
        let tree = balance_right(2, create(1), create(3));
        assert_eq!(root_value(&tree), 2);
    }
}
