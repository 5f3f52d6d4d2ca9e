//! Dictionary-of-keys sparse backing store.

use std::collections::HashMap;

use crate::error::KeyMapError;
use crate::scalar::Scalar;
use crate::translator::Coord;

use super::coo::CooArray;
use super::dense::DenseArray;

/// Sparse store holding only explicitly assigned coordinates.
///
/// Absent coordinates imply the fill value. Assigning the fill value to a
/// coordinate removes its entry, so `nnz()` counts only slots that actually
/// differ from the fill.
///
/// # Example
///
/// ```
/// use ndkeymap::storage::DokArray;
///
/// let mut a: DokArray<f64> = DokArray::new(&[2, 3], 0.0);
/// a.set(&[1, 2], 5.0).unwrap();
/// assert_eq!(a.get(&[1, 2]), Some(5.0));
/// assert_eq!(a.get(&[0, 0]), Some(0.0));
/// assert_eq!(a.nnz(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DokArray<T: Scalar> {
    shape: Vec<usize>,
    fill_value: T,
    entries: HashMap<Coord, T>,
}

impl<T: Scalar> DokArray<T> {
    /// Create an empty store of the given shape and fill value.
    pub fn new(shape: &[usize], fill_value: T) -> Self {
        Self {
            shape: shape.to_vec(),
            fill_value,
            entries: HashMap::new(),
        }
    }

    /// Shape of the store.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Full logical size (product of axis lengths).
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the logical size is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of explicitly stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// The implicit value of unassigned coordinates.
    #[inline]
    pub fn fill_value(&self) -> T {
        self.fill_value
    }

    /// The explicitly stored entries.
    #[inline]
    pub fn entries(&self) -> &HashMap<Coord, T> {
        &self.entries
    }

    /// Value at the given coordinates.
    ///
    /// Returns the fill value for an in-bounds unassigned coordinate and
    /// `None` on a rank mismatch or out-of-bounds coordinate.
    pub fn get(&self, coords: &[usize]) -> Option<T> {
        if !self.in_bounds(coords) {
            return None;
        }
        Some(
            self.entries
                .get(coords)
                .copied()
                .unwrap_or(self.fill_value),
        )
    }

    /// Write a value at the given coordinates.
    ///
    /// Writing the fill value removes the entry.
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
        let coord: Coord = coords.iter().copied().collect();
        if value == self.fill_value {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
        }
        Ok(())
    }

    /// Export as a read-only coordinate-list form.
    pub fn to_coo(&self) -> CooArray<T> {
        CooArray::from_entries(
            &self.shape,
            self.fill_value,
            self.entries.iter().map(|(c, &v)| (c.clone(), v)),
        )
    }

    /// Materialize as a dense array.
    pub fn to_dense(&self) -> DenseArray<T> {
        DenseArray::from(self.clone())
    }

    fn in_bounds(&self, coords: &[usize]) -> bool {
        coords.len() == self.ndim()
            && coords
                .iter()
                .zip(self.shape.iter())
                .all(|(&idx, &dim)| idx < dim)
    }
}

impl<T: Scalar> From<DenseArray<T>> for DokArray<T> {
    /// Convert a dense array to dictionary-of-keys form with a zero fill,
    /// storing only the non-zero values.
    fn from(dense: DenseArray<T>) -> Self {
        use crate::strides::linear_to_cartesian;

        let mut dok = DokArray::new(dense.shape(), T::zero());
        for (linear, &value) in dense.data().iter().enumerate() {
            if value != T::zero() {
                let coord: Coord = linear_to_cartesian(linear, dense.shape()).into_iter().collect();
                dok.entries.insert(coord, value);
            }
        }
        dok
    }
}

impl<T: Scalar> From<CooArray<T>> for DokArray<T> {
    fn from(coo: CooArray<T>) -> Self {
        let mut dok = DokArray::new(coo.shape(), coo.fill_value());
        for (coords, value) in coo.iter() {
            dok.entries.insert(coords.iter().copied().collect(), value);
        }
        dok
    }
}
