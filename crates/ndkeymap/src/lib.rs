//! ndkeymap - N-dimensional arrays addressed by human-readable keys.
//!
//! This crate lets a caller address the entries of a dense or sparse
//! N-dimensional numeric array with arbitrary keys (e.g. word pairs)
//! instead of integer indices, while the object otherwise behaves like an
//! associative container with tuple keys.
//!
//! # Architecture
//!
//! ```text
//! KeyIndex        - ordered unique-key registry for one axis
//! KeyTranslator   - one KeyIndex per axis; key-tuple <-> coordinates
//! DenseKeyMap     - map over a fully materialized DenseArray
//! SparseKeyMap    - map over a dictionary-of-keys DokArray
//! storage         - DenseArray / DokArray / CooArray backing stores
//! ```
//!
//! Every read or write on a map goes through the translator first, then
//! touches the backing store. Conversions (`generate_from_array`,
//! `to_dense_array`, `to_coo`, `from_plain_map*`) move data between raw
//! plain maps, dense arrays and sparse stores, reusing the existing axes or
//! building new ones from key lists.
//!
//! # Example
//!
//! ```
//! use ndkeymap::{DenseKeyMap, SparseKeyMap};
//!
//! let keys = vec![vec!["a", "b"], vec!["x", "y"]];
//! let mut dense = DenseKeyMap::new(keys.clone(), 0.0).unwrap();
//! dense.set(&["a", "x"], 1.5).unwrap();
//! assert_eq!(dense.get(&["a", "x"]).unwrap(), 1.5);
//! assert_eq!(dense.get(&["b", "y"]).unwrap(), 0.0);
//!
//! let mut sparse = SparseKeyMap::new(keys, 0.0).unwrap();
//! sparse.set(&["b", "y"], 2.5).unwrap();
//! assert_eq!(sparse.nnz(), 1);
//! assert_eq!(sparse.to_dense_array().get(&[1, 1]), Some(&2.5));
//! ```
//!
//! # What this crate is not
//!
//! No persistence format, no concurrency control, no numeric algorithms
//! beyond storage and format conversion. Maps are single-writer; embedding
//! applications that share a map across threads must serialize mutation
//! externally.

pub mod dense;
pub mod error;
pub mod key_index;
pub mod scalar;
pub mod sparse;
pub mod storage;
pub mod strides;
pub mod translator;

pub use dense::DenseKeyMap;
pub use error::KeyMapError;
pub use key_index::KeyIndex;
pub use scalar::Scalar;
pub use sparse::SparseKeyMap;
pub use storage::{CooArray, DenseArray, DokArray};
pub use translator::{Coord, KeyTranslator};
