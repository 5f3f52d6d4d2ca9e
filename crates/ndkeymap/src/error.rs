//! Error types for ndkeymap.

use thiserror::Error;

/// Errors that can occur when constructing or accessing keyed maps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyMapError {
    /// A key list for one axis contains a repeated key.
    #[error("duplicated key {key} in axis key list")]
    DuplicatedKey { key: String },

    /// A candidate backing store's rank does not match the number of axes,
    /// or zero axes were supplied at construction.
    #[error("wrong number of dimensions: expected {expected}, got {actual}")]
    WrongDimensionCount { expected: usize, actual: usize },

    /// A candidate backing store's per-axis lengths disagree with the axes.
    #[error("wrong array shape: expected {expected:?}, got {actual:?}")]
    WrongShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A key-tuple component is absent from its axis.
    #[error("key {key} not found")]
    KeyNotFound { key: String },

    /// A key-tuple's length does not equal the number of axes.
    #[error("wrong number of keys: expected {expected}, got {actual}")]
    WrongNumberOfKeys { expected: usize, actual: usize },

    /// Raw data length does not match the requested shape.
    #[error("length mismatch: shape requires {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Integer coordinate out of bounds on a raw storage access.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },
}
