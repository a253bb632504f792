//! Mirrors upstream `equals.mjs`.

use crate::types::Tree;
use crate::zip::zip;

/// Value-sequence equality: short-circuits on a size mismatch, otherwise
/// compares every pair of a lockstep traversal. Tree shapes do not matter.
pub fn equals<T, U, F>(a: &Tree<T>, b: &Tree<U>, is_equal: F) -> bool
where
    F: Fn(&T, &U) -> bool,
{
    if a.size() != b.size() {
        return false;
    }
    zip(a, b).all(|pair| match pair {
        (Some(x), Some(y)) => is_equal(x, y),
        _ => false,
    })
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || equals(self, other, |a, b| a == b)
    }
}

impl<T: Eq> Eq for Tree<T> {}
