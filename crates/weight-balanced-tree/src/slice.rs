//! Mirrors upstream `slice.mjs`.

use crate::split_index::split_at;
use crate::types::Tree;

/// The values in `[start, end)` as a new tree.
///
/// Indices normalize the way JavaScript `Array.prototype.slice` normalizes
/// them: a negative index counts from the end, then clamps into
/// `[0, size]`. Slicing the full range returns the input tree by reference
/// identity.
pub fn slice<T: Clone>(tree: &Tree<T>, start: isize, end: isize) -> Tree<T> {
    let size = tree.size();
    let start = normalize(start, size);
    let end = normalize(end, size);
    if start == 0 && end == size {
        return tree.clone();
    }
    if start >= end {
        return Tree::Empty;
    }
    let (_, rest) = split_at(tree, start);
    let (taken, _) = split_at(&rest, end - start);
    taken
}

pub(crate) fn normalize(index: isize, size: usize) -> usize {
    if index < 0 {
        (index + size as isize).max(0) as usize
    } else {
        (index as usize).min(size)
    }
}
