//! Mirrors upstream `fromDistinctAscArray.mjs`.

use crate::types::{branch, Tree};

/// Builds a balanced tree from values that are already distinct and in
/// ascending order under the caller's comparator.
///
/// The input order is trusted, not checked; run [`crate::validate`] in tests
/// when in doubt.
pub fn from_distinct_asc_array<T: Clone>(values: &[T]) -> Tree<T> {
    if values.is_empty() {
        return Tree::Empty;
    }
    let mid = values.len() / 2;
    branch(
        values[mid].clone(),
        from_distinct_asc_array(&values[..mid]),
        from_distinct_asc_array(&values[mid + 1..]),
    )
}

#[allow(non_snake_case)]
pub fn fromDistinctAscArray<T: Clone>(values: &[T]) -> Tree<T> {
    from_distinct_asc_array(values)
}
