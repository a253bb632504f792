mod common;

use weight_balanced_tree::{
    empty, from_distinct_asc_array, to_array, update, ConflictAction, NotFoundAction, TreeError,
};

fn entry_cmp(a: &(i32, u32), b: &(i32, u32)) -> i32 {
    a.0.cmp(&b.0) as i32
}

#[test]
fn upsert_counts_occurrences_matrix() {
    let mut tree = empty::<(i32, u32)>();
    for key in [1, 2, 1, 3, 1, 2] {
        let probe = (key, 0);
        tree = update(
            &tree,
            &probe,
            entry_cmp,
            |existing, _| Ok(ConflictAction::Replace((existing.0, existing.1 + 1))),
            |probe| Ok(NotFoundAction::Insert((probe.0, 1))),
        )
        .unwrap();
    }
    assert_eq!(to_array(&tree), vec![(1, 3), (2, 2), (3, 1)]);
}

#[test]
fn do_nothing_and_keep_preserve_identity_matrix() {
    let tree = from_distinct_asc_array(&[(1, 0), (2, 0)]);

    let missed = update(
        &tree,
        &(5, 0),
        entry_cmp,
        |_, _| Ok(ConflictAction::Keep),
        |_| Ok(NotFoundAction::DoNothing),
    )
    .unwrap();
    assert!(missed.ptr_eq(&tree));

    let kept = update(
        &tree,
        &(2, 0),
        entry_cmp,
        |_, _| Ok(ConflictAction::Keep),
        |_| Ok(NotFoundAction::DoNothing),
    )
    .unwrap();
    assert!(kept.ptr_eq(&tree));
}

#[test]
fn remove_action_deletes_through_update_matrix() {
    let tree = from_distinct_asc_array(&[(1, 0), (2, 0), (3, 0)]);
    let removed = update(
        &tree,
        &(2, 0),
        entry_cmp,
        |_, _| Ok(ConflictAction::Remove),
        |_| Ok(NotFoundAction::DoNothing),
    )
    .unwrap();
    assert_eq!(to_array(&removed), vec![(1, 0), (3, 0)]);
    assert_eq!(to_array(&tree).len(), 3);
}

#[test]
fn order_violating_replacement_fails_matrix() {
    let tree = from_distinct_asc_array(&[(1, 0), (2, 0), (3, 0)]);
    let result = update(
        &tree,
        &(2, 0),
        entry_cmp,
        |existing, _| Ok(ConflictAction::Replace((existing.0 + 100, 0))),
        |_| Ok(NotFoundAction::DoNothing),
    );
    assert!(matches!(result, Err(TreeError::ValueOrder { .. })));
}

#[test]
fn order_violating_insertion_fails_matrix() {
    let tree = from_distinct_asc_array(&[(1, 0), (3, 0)]);
    let result = update(
        &tree,
        &(2, 0),
        entry_cmp,
        |_, _| Ok(ConflictAction::Keep),
        |_| Ok(NotFoundAction::Insert((9, 0))),
    );
    assert!(matches!(result, Err(TreeError::ValueOrder { .. })));
}

#[test]
fn handler_errors_propagate_matrix() {
    let tree = from_distinct_asc_array(&[(1, 0), (2, 0)]);
    let result = update(
        &tree,
        &(2, 0),
        entry_cmp,
        |_, _| Err(TreeError::ValueExists),
        |_| Ok(NotFoundAction::DoNothing),
    );
    assert_eq!(result.unwrap_err(), TreeError::ValueExists);

    let result = update(
        &tree,
        &(9, 0),
        entry_cmp,
        |_, _| Ok(ConflictAction::Keep),
        |_| Err(TreeError::ValueNotFound),
    );
    assert_eq!(result.unwrap_err(), TreeError::ValueNotFound);
}
