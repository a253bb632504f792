//! Rust port of [weight-balanced-tree](https://github.com/mwiencek/weight-balanced-tree).
//!
//! A persistent (immutable, structurally shared) weight-balanced binary
//! search tree with ordered-set/ordered-map semantics: insert, remove, a
//! generic update primitive, join-based set algebra, rank/order-statistics
//! access, and lazy traversal. Operations never modify a published tree;
//! they return a new tree sharing every untouched subtree with the input,
//! so keeping many versions alive is cheap and concurrent readers need no
//! coordination (`Tree<T>` is `Send + Sync` whenever `T` is).
//!
//! Ordering is always supplied by the caller as a three-way comparator
//! (`Fn(&K, &T) -> i32`, negative/zero/positive). The comparator must be a
//! consistent total order; the tree is corrupted otherwise.
//!
//! # Module layout
//!
//! One module per upstream file, upstream names preserved:
//!
//! | Module | Upstream file | Contents |
//! |--------|---------------|----------|
//! | [`types`] | `types.mjs` | [`Tree`] / [`TreeNode`], comparator alias |
//! | [`errors`] | `errors.mjs` | [`TreeError`] |
//! | [`create`], [`from_distinct_asc_array`] | `create.mjs`, `fromDistinctAscArray.mjs` | construction |
//! | [`update`] | `update.mjs` | the generic update engine |
//! | [`insert`], [`remove`] | `insert.mjs`, `remove.mjs` | named policies over `update` |
//! | [`join`], [`split`], [`split_index`] | `join.mjs`, `join2.mjs`, `split.mjs`, `splitFirst.mjs`, `splitLast.mjs`, `splitIndex.mjs` | structural core |
//! | [`union`], [`intersection`], [`difference`], [`symmetric_difference`] | `union.mjs` … | set algebra |
//! | [`at`], [`index_of`], [`set_index`], [`slice`], [`splice`] | `at.mjs` … | order statistics |
//! | [`find`], [`find_by`], [`find_next`], [`find_prev`], [`find_all`], [`min_value`], [`max_value`] | `find.mjs` … | lookup |
//! | [`iterate`], [`reverse_iterate`], [`zip`], [`equals`], [`to_array`] | `iterate.mjs` … | traversal |
//! | [`filter`], [`map`] | `filter.mjs`, `map.mjs` | bulk transforms |
//! | [`validate`], [`print`] | `validate.mjs`, — | diagnostics |
//! | [`set_balancing_parameters`] | `setBalancingParameters.mjs` | DELTA/RATIO configuration |
//!
//! # Example
//!
//! ```
//! use weight_balanced_tree::{empty, from_distinct_asc_array, insert, remove, to_array, union};
//!
//! fn cmp(a: &i32, b: &i32) -> i32 {
//!     (*a).cmp(b) as i32
//! }
//!
//! let tree = empty::<i32>();
//! let tree = insert(&tree, 2, cmp).unwrap();
//! let tree = insert(&tree, 1, cmp).unwrap();
//! let tree = insert(&tree, 3, cmp).unwrap();
//! assert_eq!(to_array(&tree), vec![1, 2, 3]);
//!
//! let other = from_distinct_asc_array(&[2, 3, 4]);
//! let merged = union(&tree, &other, cmp);
//! assert_eq!(to_array(&merged), vec![1, 2, 3, 4]);
//!
//! let tree = remove(&tree, &2, cmp).unwrap();
//! assert_eq!(to_array(&tree), vec![1, 3]);
//! ```

mod balance;

pub mod at;
pub mod create;
pub mod difference;
pub mod equals;
pub mod errors;
pub mod filter;
pub mod find;
#[path = "findAll.rs"]
pub mod find_all;
#[path = "findBy.rs"]
pub mod find_by;
#[path = "findNext.rs"]
pub mod find_next;
#[path = "findPrev.rs"]
pub mod find_prev;
#[path = "fromDistinctAscArray.rs"]
pub mod from_distinct_asc_array;
#[path = "indexOf.rs"]
pub mod index_of;
pub mod insert;
pub mod intersection;
pub mod iterate;
pub mod join;
pub mod map;
#[path = "maxValue.rs"]
pub mod max_value;
#[path = "minValue.rs"]
pub mod min_value;
pub mod print;
pub mod remove;
#[path = "reverseIterate.rs"]
pub mod reverse_iterate;
#[path = "setBalancingParameters.rs"]
pub mod set_balancing_parameters;
#[path = "setIndex.rs"]
pub mod set_index;
pub mod slice;
pub mod splice;
pub mod split;
#[path = "splitIndex.rs"]
pub mod split_index;
#[path = "symmetricDifference.rs"]
pub mod symmetric_difference;
#[path = "toArray.rs"]
pub mod to_array;
pub mod types;
pub mod union;
pub mod update;
pub mod validate;
pub mod zip;

pub use at::at;
pub use create::{create, empty};
pub use difference::difference;
pub use equals::equals;
pub use errors::{OrderRelation, TreeError};
pub use filter::filter;
pub use find::find;
pub use find_all::{find_all, FindAllIter};
pub use find_by::find_by;
pub use find_next::find_next;
pub use find_prev::find_prev;
pub use from_distinct_asc_array::{fromDistinctAscArray, from_distinct_asc_array};
pub use index_of::{indexOf, index_of};
pub use insert::{
    insert, insert_if_not_exists, insert_or_replace_if_exists, insert_or_throw_if_exists,
};
pub use intersection::{intersection, intersection_with};
pub use iterate::{iterate, TreeIter};
pub use join::{join, join2};
pub use map::map;
pub use max_value::{max_node, max_value};
pub use min_value::{min_node, min_value};
pub use print::print;
pub use remove::{remove, remove_if_exists, remove_or_throw_if_not_exists};
pub use reverse_iterate::{reverse_iterate, ReverseTreeIter};
pub use set_balancing_parameters::{
    balancing_parameters, setBalancingParameters, set_balancing_parameters, set_delta,
};
pub use set_index::{setIndex, set_index};
pub use slice::slice;
pub use splice::splice;
pub use split::{split, split_first, split_last};
pub use split_index::{splitIndex, split_index};
pub use symmetric_difference::{symmetricDifference, symmetric_difference};
pub use to_array::{toArray, to_array};
pub use types::{default_comparator, Comparator, Tree, TreeNode};
pub use union::{union, union_with};
pub use update::{update, ConflictAction, NotFoundAction};
pub use validate::{validate, OrderViolation, Side};
pub use zip::{zip, ZipIter};
