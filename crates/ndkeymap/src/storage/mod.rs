//! Backing stores for keyed maps.
//!
//! Three storage kinds, convertible into one another:
//!
//! ```text
//! DenseArray<T>  - fully materialized, row-major flat vector
//! DokArray<T>    - dictionary-of-keys sparse store (mutable)
//! CooArray<T>    - coordinate-list sparse form (read-only export)
//! ```
//!
//! Shape and axis semantics live in the map wrappers; these types only know
//! integer coordinates.

mod coo;
mod dense;
mod dok;

pub use coo::CooArray;
pub use dense::DenseArray;
pub use dok::DokArray;
