//! Mirrors upstream `toArray.mjs`.

use crate::iterate::iterate;
use crate::types::Tree;

/// The tree's values in ascending order.
pub fn to_array<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    iterate(tree).cloned().collect()
}

#[allow(non_snake_case)]
pub fn toArray<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    to_array(tree)
}
