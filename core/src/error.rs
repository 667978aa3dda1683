//! Error types for the field tree

use thiserror::Error;

/// Failure to resolve a positional path against a forest snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An empty path addresses no field
    #[error("Empty path does not address a field")]
    Empty,

    /// One of the path segments points past the end of its sibling list
    #[error("Index {index} out of range at depth {depth} of path {path:?} ({len} fields)")]
    OutOfRange {
        path: Vec<usize>,
        depth: usize,
        index: usize,
        len: usize,
    },
}

/// A string that is not one of the field type literals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field type '{0}' (expected string, number, boolean or nested)")]
pub struct ParseFieldTypeError(pub String);
