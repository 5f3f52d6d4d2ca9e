//! Scalar trait for map element types.

use std::fmt::Debug;

/// Trait for scalar types storable in a keyed map.
///
/// Elements are plain values copied in and out of the backing store; the
/// sparse store additionally compares against its fill value, hence the
/// `PartialEq` bound.
pub trait Scalar: Copy + Debug + Default + PartialEq + 'static {
    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;
}

impl Scalar for f64 {
    fn one() -> Self {
        1.0
    }
}

impl Scalar for f32 {
    fn one() -> Self {
        1.0
    }
}

impl Scalar for i64 {
    fn one() -> Self {
        1
    }
}

impl Scalar for i32 {
    fn one() -> Self {
        1
    }
}
