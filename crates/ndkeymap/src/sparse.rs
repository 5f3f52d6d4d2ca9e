//! Sparse keyed map.
//!
//! `SparseKeyMap` offers the same key-tuple contract as
//! [`DenseKeyMap`](crate::DenseKeyMap) over a dictionary-of-keys backing
//! store: only explicitly assigned coordinates are held in memory, and a
//! read of an unset in-domain slot yields the fill value rather than a miss.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::dense::DenseKeyMap;
use crate::error::KeyMapError;
use crate::scalar::Scalar;
use crate::storage::{CooArray, DenseArray, DokArray};
use crate::strides::linear_to_cartesian;
use crate::translator::{infer_key_lists, KeyTranslator};

/// Map from key-tuples to values over a sparse dictionary-of-keys store.
///
/// # Example
///
/// ```
/// use ndkeymap::SparseKeyMap;
///
/// let mut map = SparseKeyMap::new(vec![vec!["a", "b"], vec!["x", "y"]], 0.0).unwrap();
/// map.set(&["a", "x"], 1.5).unwrap();
/// assert_eq!(map.get(&["a", "x"]).unwrap(), 1.5);
/// assert_eq!(map.get(&["b", "y"]).unwrap(), 0.0); // unset, fill value
/// assert_eq!(map.nnz(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SparseKeyMap<K, T: Scalar> {
    translator: KeyTranslator<K>,
    dok: DokArray<T>,
}

impl<K: Eq + Hash, T: Scalar> PartialEq for SparseKeyMap<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.translator == other.translator && self.dok == other.dok
    }
}

impl<K: Clone + Eq + Hash + Debug, T: Scalar> SparseKeyMap<K, T> {
    /// Build a map from one key list per axis; no slot is explicitly
    /// stored, every slot reads back as `fill_value`.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` if no key lists are given,
    /// or `KeyMapError::DuplicatedKey` if a list repeats a key.
    pub fn new(key_lists: Vec<Vec<K>>, fill_value: T) -> Result<Self, KeyMapError> {
        let translator = KeyTranslator::from_key_lists(key_lists)?;
        let dok = DokArray::new(&translator.shape(), fill_value);
        Ok(Self { translator, dok })
    }

    /// Value at a key-tuple.
    ///
    /// Unset in-domain slots return the fill value, never an error.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongNumberOfKeys` or `KeyMapError::KeyNotFound`
    /// from translation.
    pub fn get(&self, keys: &[K]) -> Result<T, KeyMapError> {
        let coords = self.translator.to_coordinates(keys)?;
        // Translated coordinates are in-bounds: shape and axes agree.
        Ok(self.dok.get(&coords).unwrap_or(self.dok.fill_value()))
    }

    /// Write a value at a key-tuple.
    ///
    /// Writing the fill value erases the stored entry for that slot.
    ///
    /// # Errors
    ///
    /// Translation errors as in [`get`](Self::get); the map is unchanged on
    /// failure.
    pub fn set(&mut self, keys: &[K], value: T) -> Result<(), KeyMapError> {
        let coords = self.translator.to_coordinates(keys)?;
        self.dok.set(&coords, value)
    }

    /// Whether a key-tuple is addressable (right arity, every key known).
    pub fn contains_key(&self, keys: &[K]) -> bool {
        self.translator.contains(keys)
    }

    /// Full logical size (product of axis lengths), not the number of
    /// stored entries; see [`nnz`](Self::nnz) for the latter.
    pub fn len(&self) -> usize {
        self.dok.len()
    }

    /// Whether the map has no addressable slots.
    pub fn is_empty(&self) -> bool {
        self.dok.is_empty()
    }

    /// Number of explicitly stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.dok.nnz()
    }

    /// The implicit value of unset slots.
    #[inline]
    pub fn fill_value(&self) -> T {
        self.dok.fill_value()
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.translator.ndim()
    }

    /// Per-axis lengths.
    pub fn shape(&self) -> Vec<usize> {
        self.translator.shape()
    }

    /// Keys of one axis in canonical order, or `None` if the axis does not
    /// exist.
    pub fn axis_keys(&self, dim: usize) -> Option<&[K]> {
        self.translator.axis(dim).map(|axis| axis.keys())
    }

    /// The key-tuple translator.
    #[inline]
    pub fn translator(&self) -> &KeyTranslator<K> {
        &self.translator
    }

    /// Iterate over every addressable slot as `(key_tuple, value)`, in
    /// row-major order, fill value included for unset slots. Restartable.
    pub fn iter(&self) -> SparseKeyMapIter<'_, K, T> {
        SparseKeyMapIter {
            map: self,
            shape: self.shape(),
            linear: 0,
            total: self.len(),
        }
    }

    /// Materialize the full array, fill value included.
    pub fn to_dense_array(&self) -> DenseArray<T> {
        self.dok.to_dense()
    }

    /// Read-only compressed coordinate-list form of the stored entries.
    pub fn to_coo(&self) -> CooArray<T> {
        self.dok.to_coo()
    }

    /// Read-only view of the underlying dictionary-of-keys store.
    #[inline]
    pub fn as_dok(&self) -> &DokArray<T> {
        &self.dok
    }

    /// Copy of the underlying dictionary-of-keys store.
    pub fn to_dok(&self) -> DokArray<T> {
        self.dok.clone()
    }

    /// Export every addressable slot into a plain key-tuple map.
    ///
    /// The result has exactly [`len`](Self::len) entries, fill value
    /// included for unset slots.
    pub fn to_plain_map(&self) -> HashMap<Vec<K>, T> {
        self.iter().collect()
    }

    /// Build a new sparse map over this map's axes with `candidate` as
    /// backing store. Dense candidates are converted to dictionary-of-keys
    /// form; the candidate's fill value carries over.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` if the candidate's rank
    /// disagrees with the axes, or `KeyMapError::WrongShape` if any axis
    /// length disagrees.
    pub fn generate_from_array(
        &self,
        candidate: impl Into<DokArray<T>>,
    ) -> Result<Self, KeyMapError> {
        let dok = candidate.into();
        self.translator.validate_shape(dok.shape())?;
        Ok(Self {
            translator: self.translator.clone(),
            dok,
        })
    }

    /// Build a dense map over this map's axes with `candidate` materialized
    /// as the backing array. This is the storage-flipping counterpart of
    /// [`generate_from_array`](Self::generate_from_array).
    ///
    /// # Errors
    ///
    /// Shape and rank validation as in
    /// [`generate_from_array`](Self::generate_from_array).
    pub fn generate_dense_from_array(
        &self,
        candidate: impl Into<DenseArray<T>>,
    ) -> Result<DenseKeyMap<K, T>, KeyMapError> {
        let array = candidate.into();
        self.translator.validate_shape(array.shape())?;
        Ok(DenseKeyMap::from_parts(self.translator.clone(), array))
    }

    /// Build a sparse map from explicit per-axis key lists and a plain map.
    ///
    /// Slots not covered by `plain_map` read back as `fill_value`; entries
    /// whose key-tuple is not addressable are skipped.
    pub fn from_plain_map(
        key_lists: Vec<Vec<K>>,
        plain_map: &HashMap<Vec<K>, T>,
        fill_value: T,
    ) -> Result<Self, KeyMapError> {
        let mut map = Self::new(key_lists, fill_value)?;
        for (keys, &value) in plain_map {
            if map.contains_key(keys) {
                map.set(keys, value)?;
            }
        }
        Ok(map)
    }

    /// Build a sparse map from a plain map alone, inferring per-axis keys
    /// in first-seen scan order. Order-unstable; see
    /// [`DenseKeyMap::from_plain_map_inferring_keys`] for the caveats.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` on an empty plain map, or
    /// `KeyMapError::WrongNumberOfKeys` if the tuples disagree in arity.
    pub fn from_plain_map_inferring_keys(
        plain_map: &HashMap<Vec<K>, T>,
        fill_value: T,
    ) -> Result<Self, KeyMapError> {
        let key_lists = infer_key_lists(plain_map.keys())?;
        Self::from_plain_map(key_lists, plain_map, fill_value)
    }
}

/// Lazy iterator over every addressable slot of a [`SparseKeyMap`].
pub struct SparseKeyMapIter<'a, K, T: Scalar> {
    map: &'a SparseKeyMap<K, T>,
    shape: Vec<usize>,
    linear: usize,
    total: usize,
}

impl<K: Clone + Eq + Hash + Debug, T: Scalar> Iterator for SparseKeyMapIter<'_, K, T> {
    type Item = (Vec<K>, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.linear >= self.total {
            return None;
        }
        let coords = linear_to_cartesian(self.linear, &self.shape);
        let keys = self.map.translator.key_tuple(&coords)?;
        let value = self.map.dok.get(&coords)?;
        self.linear += 1;
        Some((keys, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total.saturating_sub(self.linear);
        (remaining, Some(remaining))
    }
}

impl<'a, K: Clone + Eq + Hash + Debug, T: Scalar> IntoIterator for &'a SparseKeyMap<K, T> {
    type Item = (Vec<K>, T);
    type IntoIter = SparseKeyMapIter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
