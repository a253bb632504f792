//! Mirrors upstream `intersection.mjs`.

use crate::errors::{OrderRelation, TreeError};
use crate::join::{join, join2};
use crate::split::split;
use crate::types::Tree;

/// The values of `t1` that also appear in `t2`, keeping `t1`'s copies.
/// Returns `t1` by reference identity when every value survived.
pub fn intersection<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    intersection_rec(t1, t2, &cmp)
}

fn intersection_rec<T, C>(t1: &Tree<T>, t2: &Tree<T>, cmp: &C) -> Tree<T>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
{
    let node = match t1 {
        Tree::Empty => return Tree::Empty,
        Tree::Node(node) => node,
    };
    if t2.is_empty() {
        return Tree::Empty;
    }
    let (smaller, equal, larger) = split(t2, &node.value, cmp);
    let left = intersection_rec(&node.left, &smaller, cmp);
    let right = intersection_rec(&node.right, &larger, cmp);
    if equal.is_empty() {
        join2(left, right)
    } else if left.ptr_eq(&node.left) && right.ptr_eq(&node.right) {
        t1.clone()
    } else {
        join(left, node.value.clone(), right)
    }
}

/// [`intersection`] with a combiner over the two matching values. The
/// combiner's output must still compare equal to them; the operation fails
/// with [`TreeError::ValueOrder`] otherwise.
pub fn intersection_with<T, C, R>(
    t1: &Tree<T>,
    t2: &Tree<T>,
    cmp: C,
    combine: R,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
    R: Fn(&T, &T) -> Result<T, TreeError>,
{
    intersection_with_rec(t1, t2, &cmp, &combine)
}

fn intersection_with_rec<T, C, R>(
    t1: &Tree<T>,
    t2: &Tree<T>,
    cmp: &C,
    combine: &R,
) -> Result<Tree<T>, TreeError>
where
    T: Clone,
    C: Fn(&T, &T) -> i32,
    R: Fn(&T, &T) -> Result<T, TreeError>,
{
    let node = match t1 {
        Tree::Empty => return Ok(Tree::Empty),
        Tree::Node(node) => node,
    };
    if t2.is_empty() {
        return Ok(Tree::Empty);
    }
    let (smaller, equal, larger) = split(t2, &node.value, cmp);
    let left = intersection_with_rec(&node.left, &smaller, cmp, combine)?;
    let right = intersection_with_rec(&node.right, &larger, cmp, combine)?;
    match &equal {
        Tree::Empty => Ok(join2(left, right)),
        Tree::Node(matched) => {
            let combined = combine(&node.value, &matched.value)?;
            let order = cmp(&combined, &node.value);
            if order != 0 {
                let relation = if order < 0 {
                    OrderRelation::LessThan
                } else {
                    OrderRelation::GreaterThan
                };
                return Err(TreeError::ValueOrder { relation });
            }
            Ok(join(left, combined, right))
        }
    }
}
