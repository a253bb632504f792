//! Mirrors upstream `splice.mjs`.
//!
//! Sequence semantics: `items` are placed positionally in the order given.
//! Keeping the result consistent with the tree's comparator is the caller's
//! contract, exactly as for [`crate::set_index`].

use crate::from_distinct_asc_array::from_distinct_asc_array;
use crate::join::join2;
use crate::slice::normalize;
use crate::split_index::split_at;
use crate::types::Tree;

/// Removes `delete_count` values starting at `start` and inserts `items` in
/// their place. Returns `(new_tree, removed)`.
///
/// `start` normalizes like [`crate::slice`] indices; `delete_count` clamps
/// to the values actually available.
pub fn splice<T: Clone>(
    tree: &Tree<T>,
    start: isize,
    delete_count: usize,
    items: &[T],
) -> (Tree<T>, Tree<T>) {
    let size = tree.size();
    let start = normalize(start, size);
    let delete_count = delete_count.min(size - start);
    if delete_count == 0 && items.is_empty() {
        return (tree.clone(), Tree::Empty);
    }
    let (left, rest) = split_at(tree, start);
    let (removed, right) = split_at(&rest, delete_count);
    let middle = from_distinct_asc_array(items);
    (join2(join2(left, middle), right), removed)
}
