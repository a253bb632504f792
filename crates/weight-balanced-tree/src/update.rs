//! Mirrors upstream `update.mjs` — the generic primitive behind the whole
//! insert/remove family.
//!
//! One recursive descent serves insertion, removal, and upsert: the caller
//! supplies a policy for the key-already-present case and one for the
//! key-missing case. Whenever a policy produces a value, the engine checks
//! with the comparator that it still compares equal to the key at that
//! position, which is what lets values carry data beyond the sort key
//! without corrupting the tree.
//!
//! Rust divergence: upstream signals "do nothing" and "remove this value"
//! with sentinel objects thrown through the engine; the port replaces that
//! with the explicit [`ConflictAction`] and [`NotFoundAction`] enums
//! returned from fallible handlers, so ordinary control flow needs no
//! exceptions. Handler errors propagate to the caller unmodified.

use std::sync::Arc;

use crate::balance::{balance_left, balance_right};
use crate::errors::{OrderRelation, TreeError};
use crate::split::split_first;
use crate::types::{branch, Tree, TreeNode};

/// Resolution returned by an `on_conflict` handler when the key matched an
/// existing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictAction<T> {
    /// Use this value in place of the existing one. It must still compare
    /// equal to the key.
    Replace(T),
    /// Leave the tree untouched; the unchanged tree is returned by
    /// reference identity.
    Keep,
    /// Remove the matching value.
    Remove,
}

/// Resolution returned by an `on_not_found` handler when no value matched
/// the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundAction<T> {
    /// Insert this value. It must compare equal to the key it was produced
    /// for.
    Insert(T),
    /// Leave the tree untouched; the unchanged tree is returned by
    /// reference identity.
    DoNothing,
}

/// Inserts, replaces, or removes the value matching `key`, as decided by the
/// caller's policies.
///
/// Returns the input tree by reference identity when the policies decide to
/// change nothing, so callers can detect no-ops with [`Tree::ptr_eq`].
pub fn update<T, K, C, FC, FN>(
    tree: &Tree<T>,
    key: &K,
    cmp: C,
    on_conflict: FC,
    on_not_found: FN,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
    FC: FnOnce(&T, &K) -> Result<ConflictAction<T>, TreeError>,
    FN: FnOnce(&K) -> Result<NotFoundAction<T>, TreeError>,
{
    update_rec(tree, key, &cmp, on_conflict, on_not_found)
}

fn update_rec<T, K, C, FC, FN>(
    tree: &Tree<T>,
    key: &K,
    cmp: &C,
    on_conflict: FC,
    on_not_found: FN,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
    FC: FnOnce(&T, &K) -> Result<ConflictAction<T>, TreeError>,
    FN: FnOnce(&K) -> Result<NotFoundAction<T>, TreeError>,
{
    let node = match tree {
        Tree::Empty => {
            return match on_not_found(key)? {
                NotFoundAction::DoNothing => Ok(Tree::Empty),
                NotFoundAction::Insert(value) => {
                    check_produced_order(key, &value, cmp)?;
                    Ok(branch(value, Tree::Empty, Tree::Empty))
                }
            };
        }
        Tree::Node(node) => node,
    };

    let order = cmp(key, &node.value);
    if order == 0 {
        return match on_conflict(&node.value, key)? {
            ConflictAction::Keep => Ok(tree.clone()),
            ConflictAction::Remove => Ok(remove_root(node)),
            ConflictAction::Replace(value) => {
                check_produced_order(key, &value, cmp)?;
                Ok(Tree::Node(Arc::new(TreeNode {
                    value,
                    size: node.size,
                    left: node.left.clone(),
                    right: node.right.clone(),
                })))
            }
        };
    }

    if order < 0 {
        let left = update_rec(&node.left, key, cmp, on_conflict, on_not_found)?;
        if left.ptr_eq(&node.left) {
            return Ok(tree.clone());
        }
        Ok(if left.size() < node.left.size() {
            balance_right(node.value.clone(), left, node.right.clone())
        } else {
            balance_left(node.value.clone(), left, node.right.clone())
        })
    } else {
        let right = update_rec(&node.right, key, cmp, on_conflict, on_not_found)?;
        if right.ptr_eq(&node.right) {
            return Ok(tree.clone());
        }
        Ok(if right.size() < node.right.size() {
            balance_left(node.value.clone(), node.left.clone(), right)
        } else {
            balance_right(node.value.clone(), node.left.clone(), right)
        })
    }
}

fn check_produced_order<T, K, C>(key: &K, value: &T, cmp: &C) -> Result<(), TreeError>
where
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    let order = cmp(key, value);
    if order == 0 {
        return Ok(());
    }
    // cmp(key, value) < 0 means the produced value sorts after the key.
    let relation = if order < 0 {
        OrderRelation::GreaterThan
    } else {
        OrderRelation::LessThan
    };
    Err(TreeError::ValueOrder { relation })
}

/// Removes the root of `node`, merging its children. A node with one child
/// is replaced by it; with two children, by its in-order successor detached
/// from the right subtree.
fn remove_root<T: Clone>(node: &TreeNode<T>) -> Tree<T> {
    match (&node.left, &node.right) {
        (Tree::Empty, right) => right.clone(),
        (left, Tree::Empty) => left.clone(),
        (left, right) => match split_first(right) {
            // The right side shrank by one, so the left side is the one
            // that can now be too heavy.
            Some((successor, rest)) => balance_left(successor, left.clone(), rest),
            None => left.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_distinct_asc_array::from_distinct_asc_array;
    use crate::to_array::to_array;
    use crate::types::default_comparator;

    #[test]
    fn do_nothing_returns_the_same_tree() {
        let tree = from_distinct_asc_array(&[1, 2, 3]);
        let unchanged = update(
            &tree,
            &4,
            default_comparator,
            |_, _| Ok(ConflictAction::Keep),
            |_| Ok(NotFoundAction::DoNothing),
        )
        .unwrap();
        assert!(unchanged.ptr_eq(&tree));
    }

    #[test]
    fn remove_action_deletes_the_match() {
        let tree = from_distinct_asc_array(&[1, 2, 3]);
        let removed = update(
            &tree,
            &2,
            default_comparator,
            |_, _| Ok(ConflictAction::Remove),
            |_| Ok(NotFoundAction::DoNothing),
        )
        .unwrap();
        assert_eq!(to_array(&removed), vec![1, 3]);
    }

    #[test]
    fn produced_value_must_compare_equal_to_the_key() {
        let tree = from_distinct_asc_array(&[1, 2, 3]);
        let result = update(
            &tree,
            &5,
            default_comparator,
            |_, _| Ok(ConflictAction::Keep),
            |_| Ok(NotFoundAction::Insert(7)),
        );
        assert_eq!(
            result,
            Err(TreeError::ValueOrder {
                relation: OrderRelation::GreaterThan
            })
        );
    }
}
