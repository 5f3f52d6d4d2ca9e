//! Dense backing store - contiguous row-major array.

use crate::error::KeyMapError;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, compute_strides};

use super::coo::CooArray;
use super::dok::DokArray;

/// Fully materialized N-dimensional array holding a value for every
/// coordinate, in row-major order.
///
/// # Example
///
/// ```
/// use ndkeymap::storage::DenseArray;
///
/// let mut a: DenseArray<f64> = DenseArray::zeros(&[2, 3]);
/// a.set(&[1, 2], 5.0).unwrap();
/// assert_eq!(a.get(&[1, 2]), Some(&5.0));
/// assert_eq!(a.get(&[0, 0]), Some(&0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseArray<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Scalar> DenseArray<T> {
    /// Create an array of the given shape with every slot set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Self {
        let len: usize = shape.iter().product();
        Self {
            data: vec![value; len],
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create a zero-initialized array of the given shape.
    pub fn zeros(shape: &[usize]) -> Self {
        Self::filled(shape, T::zero())
    }

    /// Create an array from flat row-major data and a shape.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::LengthMismatch` if `data.len()` differs from
    /// the product of the shape.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, KeyMapError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(KeyMapError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    /// Shape of the array.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consume the array, returning its flat data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element by linear index.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Element by cartesian coordinates.
    ///
    /// Returns `None` on a rank mismatch or an out-of-bounds coordinate.
    pub fn get(&self, coords: &[usize]) -> Option<&T> {
        if coords.len() != self.ndim() {
            return None;
        }
        for (&idx, &dim) in coords.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
        }
        self.get_linear(cartesian_to_linear(coords, &self.strides))
    }

    /// Mutable element by cartesian coordinates.
    pub fn get_mut(&mut self, coords: &[usize]) -> Option<&mut T> {
        if coords.len() != self.ndim() {
            return None;
        }
        for (&idx, &dim) in coords.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
        }
        let linear = cartesian_to_linear(coords, &self.strides);
        self.data.get_mut(linear)
    }

    /// Write an element by cartesian coordinates.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` on a rank mismatch, or
    /// `KeyMapError::IndexOutOfBounds` if a coordinate exceeds its axis.
    pub fn set(&mut self, coords: &[usize], value: T) -> Result<(), KeyMapError> {
        if coords.len() != self.ndim() {
            return Err(KeyMapError::WrongDimensionCount {
                expected: self.ndim(),
                actual: coords.len(),
            });
        }
        for (&idx, &dim) in coords.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return Err(KeyMapError::IndexOutOfBounds {
                    index: idx,
                    dim_size: dim,
                });
            }
        }
        let linear = cartesian_to_linear(coords, &self.strides);
        self.data[linear] = value;
        Ok(())
    }

    /// Fill every slot with `value`.
    pub fn fill(&mut self, value: T) {
        for x in &mut self.data {
            *x = value;
        }
    }
}

impl<T: Scalar> std::ops::Index<&[usize]> for DenseArray<T> {
    type Output = T;

    /// Panics on a rank mismatch or out-of-bounds coordinate, per the usual
    /// `Index` contract. Use [`get`](DenseArray::get) for checked access.
    fn index(&self, coords: &[usize]) -> &T {
        match self.get(coords) {
            Some(value) => value,
            None => panic!(
                "coordinates {:?} invalid for array of shape {:?}",
                coords, self.shape
            ),
        }
    }
}

impl<T: Scalar> From<DokArray<T>> for DenseArray<T> {
    /// Materialize a dictionary-of-keys store, honoring its fill value.
    fn from(dok: DokArray<T>) -> Self {
        let mut dense = DenseArray::filled(dok.shape(), dok.fill_value());
        for (coords, &value) in dok.entries() {
            // Entries are in-bounds by DokArray's construction.
            if let Some(slot) = dense.get_mut(coords) {
                *slot = value;
            }
        }
        dense
    }
}

impl<T: Scalar> From<CooArray<T>> for DenseArray<T> {
    /// Materialize a coordinate-list store, honoring its fill value.
    fn from(coo: CooArray<T>) -> Self {
        let mut dense = DenseArray::filled(coo.shape(), coo.fill_value());
        for (coords, value) in coo.iter() {
            if let Some(slot) = dense.get_mut(coords) {
                *slot = value;
            }
        }
        dense
    }
}
