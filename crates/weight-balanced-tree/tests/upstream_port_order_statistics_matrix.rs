mod common;

use common::assert_valid_tree;
use weight_balanced_tree::{
    at, from_distinct_asc_array, index_of, set_index, slice, splice, split_index, to_array,
    TreeError,
};

fn cmp(a: &i32, b: &i32) -> i32 {
    (*a).cmp(b) as i32
}

#[test]
fn at_and_index_of_are_inverse_matrix() {
    let values: Vec<i32> = (0..100).map(|i| i * 2).collect();
    let tree = from_distinct_asc_array(&values);

    for (i, value) in values.iter().enumerate() {
        assert_eq!(at(&tree, i as isize), Ok(value));
        assert_eq!(index_of(&tree, value, cmp), Some(i));
    }

    assert_eq!(at(&tree, -1), Ok(&198));
    assert_eq!(at(&tree, -100), Ok(&0));
    assert!(matches!(
        at(&tree, 100),
        Err(TreeError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        at(&tree, -101),
        Err(TreeError::IndexOutOfRange { .. })
    ));
    assert_eq!(index_of(&tree, &1, cmp), None);
}

#[test]
fn set_index_replaces_in_place_matrix() {
    let tree = from_distinct_asc_array(&[10, 20, 30]);

    let updated = set_index(&tree, 1, 25).unwrap();
    assert_eq!(to_array(&updated), vec![10, 25, 30]);
    assert_valid_tree(&updated);
    // The input is untouched.
    assert_eq!(to_array(&tree), vec![10, 20, 30]);

    let last = set_index(&tree, -1, 35).unwrap();
    assert_eq!(to_array(&last), vec![10, 20, 35]);

    assert!(matches!(
        set_index(&tree, 3, 0),
        Err(TreeError::IndexOutOfRange { .. })
    ));
}

#[test]
fn slice_matches_array_slicing_matrix() {
    let values: Vec<i32> = (0..20).collect();
    let tree = from_distinct_asc_array(&values);

    assert_eq!(to_array(&slice(&tree, 3, 7)), vec![3, 4, 5, 6]);
    assert_eq!(to_array(&slice(&tree, -5, 20)), vec![15, 16, 17, 18, 19]);
    assert_eq!(to_array(&slice(&tree, 5, -5)), (5..15).collect::<Vec<_>>());
    assert!(slice(&tree, 7, 3).is_empty());
    assert!(slice(&tree, 25, 30).is_empty());
    assert!(slice(&tree, 0, 20).ptr_eq(&tree));
    assert!(slice(&tree, -25, 99).ptr_eq(&tree));
    assert_valid_tree(&slice(&tree, 3, 17));
}

#[test]
fn splice_matches_vec_splice_matrix() {
    let values: Vec<i32> = (0..16).map(|i| i * 10).collect();
    let tree = from_distinct_asc_array(&values);

    let (updated, removed) = splice(&tree, 4, 3, &[42, 45]);
    let mut model = values.clone();
    let removed_model: Vec<i32> = model.splice(4..7, [42, 45]).collect();
    assert_eq!(to_array(&updated), model);
    assert_eq!(to_array(&removed), removed_model);
    assert_valid_tree(&updated);
    assert_valid_tree(&removed);

    let (unchanged, removed) = splice(&tree, 5, 0, &[]);
    assert!(unchanged.ptr_eq(&tree));
    assert!(removed.is_empty());

    // Negative start counts from the end; the delete count clamps.
    let (trimmed, removed) = splice(&tree, -4, 100, &[]);
    assert_eq!(to_array(&removed), vec![120, 130, 140, 150]);
    assert_eq!(
        to_array(&trimmed),
        (0..12).map(|i| i * 10).collect::<Vec<_>>()
    );
}

#[test]
fn split_index_partitions_by_rank_matrix() {
    let tree = from_distinct_asc_array(&[0, 1, 2, 3, 4, 5, 6, 7]);

    let (smaller, equal, larger) = split_index(&tree, 3);
    assert_eq!(to_array(&smaller), vec![0, 1, 2]);
    assert_eq!(to_array(&equal), vec![3]);
    assert_eq!(to_array(&larger), vec![4, 5, 6, 7]);
    assert_valid_tree(&smaller);
    assert_valid_tree(&larger);

    let (all, none, rest) = split_index(&tree, 8);
    assert_eq!(to_array(&all), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    assert!(none.is_empty());
    assert!(rest.is_empty());
}
