//! Coordinate-list sparse form, read-only.

use crate::scalar::Scalar;
use crate::translator::Coord;

use super::dense::DenseArray;

/// Compressed sparse representation as parallel coordinate and value lists,
/// sorted lexicographically by coordinate.
///
/// This is an export format for bulk consumption; it carries no mutation
/// API. Build one from a [`DokArray`](super::DokArray) via
/// [`to_coo`](super::DokArray::to_coo).
#[derive(Debug, Clone, PartialEq)]
pub struct CooArray<T: Scalar> {
    shape: Vec<usize>,
    fill_value: T,
    coords: Vec<Coord>,
    values: Vec<T>,
}

impl<T: Scalar> CooArray<T> {
    /// Build from unsorted (coordinate, value) entries.
    ///
    /// Entries are sorted by coordinate; callers must not pass duplicate
    /// coordinates (the dictionary-of-keys source guarantees this).
    pub(crate) fn from_entries<I>(shape: &[usize], fill_value: T, entries: I) -> Self
    where
        I: IntoIterator<Item = (Coord, T)>,
    {
        let mut pairs: Vec<(Coord, T)> = entries.into_iter().collect();
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        let (coords, values) = pairs.into_iter().unzip();
        Self {
            shape: shape.to_vec(),
            fill_value,
            coords,
            values,
        }
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

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// The implicit value of unstored coordinates.
    #[inline]
    pub fn fill_value(&self) -> T {
        self.fill_value
    }

    /// Value at the given coordinates.
    ///
    /// Returns the fill value for an in-bounds unstored coordinate and
    /// `None` on a rank mismatch or out-of-bounds coordinate.
    pub fn get(&self, coords: &[usize]) -> Option<T> {
        if coords.len() != self.ndim() {
            return None;
        }
        for (&idx, &dim) in coords.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
        }
        match self.coords.binary_search_by(|c| c.as_slice().cmp(coords)) {
            Ok(pos) => Some(self.values[pos]),
            Err(_) => Some(self.fill_value),
        }
    }

    /// Iterate over stored entries in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], T)> + '_ {
        self.coords
            .iter()
            .zip(self.values.iter())
            .map(|(c, &v)| (c.as_slice(), v))
    }

    /// Materialize as a dense array.
    pub fn to_dense(&self) -> DenseArray<T> {
        DenseArray::from(self.clone())
    }
}
