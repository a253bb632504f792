//! Mirrors upstream `remove.mjs`: the named not-found policies bound over
//! [`update`].

use crate::errors::TreeError;
use crate::types::Tree;
use crate::update::{update, ConflictAction, NotFoundAction};

/// Removes the value matching `key`, failing with
/// [`TreeError::ValueNotFound`] when there is none.
pub fn remove<T, K, C>(tree: &Tree<T>, key: &K, cmp: C) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    update(
        tree,
        key,
        cmp,
        |_, _| Ok(ConflictAction::Remove),
        |_| Err(TreeError::ValueNotFound),
    )
}

/// Removes the value matching `key` when present. The unchanged tree comes
/// back by reference identity on a miss.
pub fn remove_if_exists<T, K, C>(tree: &Tree<T>, key: &K, cmp: C) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    update(
        tree,
        key,
        cmp,
        |_, _| Ok(ConflictAction::Remove),
        |_| Ok(NotFoundAction::DoNothing),
    )
}

/// Upstream alias for [`remove`].
pub fn remove_or_throw_if_not_exists<T, K, C>(
    tree: &Tree<T>,
    key: &K,
    cmp: C,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    K: ?Sized,
    C: Fn(&K, &T) -> i32,
{
    remove(tree, key, cmp)
}
