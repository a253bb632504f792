//! Mirrors upstream `zip.mjs`.

use crate::iterate::{iterate, TreeIter};
use crate::types::Tree;

/// Lockstep traversal of two trees, padding the exhausted side with `None`.
pub struct ZipIter<'a, T, U> {
    left: TreeIter<'a, T>,
    right: TreeIter<'a, U>,
}

/// Pairs both trees' values in sorted order until both are exhausted.
pub fn zip<'a, T, U>(t1: &'a Tree<T>, t2: &'a Tree<U>) -> ZipIter<'a, T, U> {
    ZipIter {
        left: iterate(t1),
        right: iterate(t2),
    }
}

impl<'a, T, U> Iterator for ZipIter<'a, T, U> {
    type Item = (Option<&'a T>, Option<&'a U>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.left.next(), self.right.next()) {
            (None, None) => None,
            pair => Some(pair),
        }
    }
}
