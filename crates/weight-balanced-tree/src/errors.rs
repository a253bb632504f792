//! Error types.
//!
//! Mirrors upstream `errors.mjs`.
//!
//! Rust divergence: the upstream error classes interpolate the offending
//! values into their messages; the port keeps the variants value-free so
//! `T` needs no `Debug` bound, and carries structured fields only where
//! they are plain data.

use std::fmt;

use thiserror::Error;

/// How a handler-produced value compared against the key position it has to
/// occupy. Carried by [`TreeError::ValueOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRelation {
    LessThan,
    GreaterThan,
}

impl fmt::Display for OrderRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderRelation::LessThan => f.write_str("less than"),
            OrderRelation::GreaterThan => f.write_str("greater than"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Inserting a value that already exists, under the default conflict
    /// policy.
    #[error("value already exists in tree")]
    ValueExists,

    /// Removing or updating a value that is not present, under the default
    /// not-found policy.
    #[error("value not found in tree")]
    ValueNotFound,

    /// A conflict or not-found handler produced a value that no longer
    /// compares equal to the key at its position. Never corrected silently;
    /// the operation fails and the input tree is left untouched.
    #[error("the relative order of values has changed: the produced value is {relation} its key")]
    ValueOrder { relation: OrderRelation },

    /// Minimum or maximum requested on an empty tree.
    #[error("cannot read the minimum or maximum value of an empty tree")]
    EmptyTree,

    /// Rank-indexed access outside `[0, size)` after normalization.
    #[error("index {index} is out of range for a tree of size {size}")]
    IndexOutOfRange { index: isize, size: usize },
}
