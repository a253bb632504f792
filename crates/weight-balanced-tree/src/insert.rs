//! Mirrors upstream `insert.mjs`: the named conflict policies bound over
//! [`update`].

use crate::errors::TreeError;
use crate::types::Tree;
use crate::update::{update, ConflictAction, NotFoundAction};

/// Inserts `value`, failing with [`TreeError::ValueExists`] when an equal
/// value is already present.
///
/// # Example
///
/// ```
/// use weight_balanced_tree::{create, insert, to_array};
///
/// let tree = create(2);
/// let tree = insert(&tree, 1, |a: &i32, b: &i32| (*a).cmp(b) as i32).unwrap();
/// assert_eq!(to_array(&tree), vec![1, 2]);
/// ```
pub fn insert<T, C>(tree: &Tree<T>, value: T, cmp: C) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    update(
        tree,
        &value,
        cmp,
        |_, _| Err(TreeError::ValueExists),
        |key: &T| Ok(NotFoundAction::Insert(key.clone())),
    )
}

/// Inserts `value`, keeping the existing value on a conflict. The unchanged
/// tree comes back by reference identity in that case.
pub fn insert_if_not_exists<T, C>(tree: &Tree<T>, value: T, cmp: C) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    update(
        tree,
        &value,
        cmp,
        |_, _| Ok(ConflictAction::Keep),
        |key: &T| Ok(NotFoundAction::Insert(key.clone())),
    )
}

/// Inserts `value`, replacing the existing value on a conflict.
pub fn insert_or_replace_if_exists<T, C>(
    tree: &Tree<T>,
    value: T,
    cmp: C,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    update(
        tree,
        &value,
        cmp,
        |_, key: &T| Ok(ConflictAction::Replace(key.clone())),
        |key: &T| Ok(NotFoundAction::Insert(key.clone())),
    )
}

/// Upstream alias for [`insert`].
pub fn insert_or_throw_if_exists<T, C>(tree: &Tree<T>, value: T, cmp: C) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    insert(tree, value, cmp)
}
