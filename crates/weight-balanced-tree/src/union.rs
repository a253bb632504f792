//! Mirrors upstream `union.mjs`.
//!
//! Hedge union: recurse on the first tree's root, split the second tree by
//! it, combine the halves, then join. When nothing actually changed the
//! first tree comes back by reference identity.

use crate::errors::{OrderRelation, TreeError};
use crate::join::join;
use crate::split::split;
use crate::types::Tree;

/// All values of both trees. On a conflict the first tree's value wins.
///
/// # Example
///
/// ```
/// use weight_balanced_tree::{from_distinct_asc_array, to_array, union};
///
/// let a = from_distinct_asc_array(&[1, 4]);
/// let b = from_distinct_asc_array(&[1, 2, 3]);
/// let merged = union(&a, &b, |x: &i32, y: &i32| (*x).cmp(y) as i32);
/// assert_eq!(to_array(&merged), vec![1, 2, 3, 4]);
/// ```
pub fn union<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    union_rec(t1, t2, &cmp)
}

fn union_rec<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: &C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    let node = match t1 {
        Tree::Empty => return t2.clone(),
        Tree::Node(node) => node,
    };
    if t2.is_empty() {
        return t1.clone();
    }
    let (smaller, _, larger) = split(t2, &node.value, cmp);
    let left = union_rec(&node.left, &smaller, cmp);
    let right = union_rec(&node.right, &larger, cmp);
    if left.ptr_eq(&node.left) && right.ptr_eq(&node.right) {
        return t1.clone();
    }
    join(left, node.value.clone(), right)
}

/// [`union`] with a caller-supplied conflict resolver over the two matching
/// values. The resolver's output must still compare equal to them; the
/// operation fails with [`TreeError::ValueOrder`] otherwise.
pub fn union_with<T, C, R>(
    t1: &Tree<T>,
    t2: &Tree<T>,
    cmp: C,
    resolve: R,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
    R: Fn(&T, &T) -> Result<T, TreeError>,
{
    union_with_rec(t1, t2, &cmp, &resolve)
}

fn union_with_rec<T, C, R>(
    t1: &Tree<T>,
    t2: &Tree<T>,
    cmp: &C,
    resolve: &R,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
    R: Fn(&T, &T) -> Result<T, TreeError>,
{
    let node = match t1 {
        Tree::Empty => return Ok(t2.clone()),
        Tree::Node(node) => node,
    };
    if t2.is_empty() {
        return Ok(t1.clone());
    }
    let (smaller, equal, larger) = split(t2, &node.value, cmp);
    let left = union_with_rec(&node.left, &smaller, cmp, resolve)?;
    let right = union_with_rec(&node.right, &larger, cmp, resolve)?;
    match &equal {
        Tree::Empty => {
            if left.ptr_eq(&node.left) && right.ptr_eq(&node.right) {
                Ok(t1.clone())
            } else {
                Ok(join(left, node.value.clone(), right))
            }
        }
        Tree::Node(matched) => {
            let merged = resolve(&node.value, &matched.value)?;
            let order = cmp(&merged, &node.value);
            if order != 0 {
                let relation = if order < 0 {
                    OrderRelation::LessThan
                } else {
                    OrderRelation::GreaterThan
                };
                return Err(TreeError::ValueOrder { relation });
            }
            Ok(join(left, merged, right))
        }
    }
}
