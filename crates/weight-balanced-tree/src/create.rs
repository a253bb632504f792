//! Mirrors upstream `create.mjs`.

use crate::types::{branch, Tree};

/// A tree holding exactly `value`.
pub fn create<T>(value: T) -> Tree<T> {
    branch(value, Tree::Empty, Tree::Empty)
}

/// The empty tree.
///
/// Upstream exports a shared `empty` object; the port's [`Tree::Empty`] is a
/// unit variant, so this is a plain constructor.
pub fn empty<T>() -> Tree<T> {
    Tree::Empty
}
