//! Dense keyed map.
//!
//! `DenseKeyMap` behaves like an associative container from key-tuples to
//! scalar values, backed by a fully materialized [`DenseArray`]. Every valid
//! key-tuple is always present, holding the default value until written.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::KeyMapError;
use crate::scalar::Scalar;
use crate::storage::DenseArray;
use crate::strides::linear_to_cartesian;
use crate::translator::{infer_key_lists, KeyTranslator};

/// Map from key-tuples to values over a fully materialized array.
///
/// # Example
///
/// ```
/// use ndkeymap::DenseKeyMap;
///
/// let mut map = DenseKeyMap::new(vec![vec!["a", "b"], vec!["x", "y"]], 0.0).unwrap();
/// map.set(&["a", "x"], 1.5).unwrap();
/// assert_eq!(map.get(&["a", "x"]).unwrap(), 1.5);
/// assert_eq!(map.get(&["b", "y"]).unwrap(), 0.0);
/// assert_eq!(map.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct DenseKeyMap<K, T: Scalar> {
    translator: KeyTranslator<K>,
    array: DenseArray<T>,
}

impl<K: Eq + Hash, T: Scalar> PartialEq for DenseKeyMap<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.translator == other.translator && self.array == other.array
    }
}

impl<K: Clone + Eq + Hash + Debug, T: Scalar> DenseKeyMap<K, T> {
    /// Build a map from one key list per axis, every slot set to
    /// `default_value`.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` if no key lists are given,
    /// or `KeyMapError::DuplicatedKey` if a list repeats a key.
    pub fn new(key_lists: Vec<Vec<K>>, default_value: T) -> Result<Self, KeyMapError> {
        let translator = KeyTranslator::from_key_lists(key_lists)?;
        let array = DenseArray::filled(&translator.shape(), default_value);
        Ok(Self { translator, array })
    }

    /// Wrap an already validated translator/array pair.
    ///
    /// Callers must have checked `translator.validate_shape(array.shape())`.
    pub(crate) fn from_parts(translator: KeyTranslator<K>, array: DenseArray<T>) -> Self {
        Self { translator, array }
    }

    /// Value at a key-tuple.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongNumberOfKeys` or `KeyMapError::KeyNotFound`
    /// from translation; unset slots read back as the default, never an
    /// error.
    pub fn get(&self, keys: &[K]) -> Result<T, KeyMapError> {
        let coords = self.translator.to_coordinates(keys)?;
        // Translated coordinates are in-bounds: shape and axes agree.
        Ok(self.array[coords.as_slice()])
    }

    /// Write a value at a key-tuple.
    ///
    /// # Errors
    ///
    /// Translation errors as in [`get`](Self::get); the map is unchanged on
    /// failure.
    pub fn set(&mut self, keys: &[K], value: T) -> Result<(), KeyMapError> {
        let coords = self.translator.to_coordinates(keys)?;
        self.array.set(&coords, value)
    }

    /// Whether a key-tuple is addressable (right arity, every key known).
    pub fn contains_key(&self, keys: &[K]) -> bool {
        self.translator.contains(keys)
    }

    /// Total number of addressable slots (product of axis lengths).
    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the map has no addressable slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
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
    /// row-major order. Restartable: each call starts a fresh pass over the
    /// current values.
    pub fn iter(&self) -> DenseKeyMapIter<'_, K, T> {
        DenseKeyMapIter {
            map: self,
            shape: self.shape(),
            linear: 0,
        }
    }

    /// Copy of the backing array.
    pub fn to_array(&self) -> DenseArray<T> {
        self.array.clone()
    }

    /// Read-only view of the backing array. Not a write-through handle;
    /// mutation goes through [`set`](Self::set).
    #[inline]
    pub fn as_array(&self) -> &DenseArray<T> {
        &self.array
    }

    /// Export every addressable slot into a plain key-tuple map.
    ///
    /// The result has exactly [`len`](Self::len) entries.
    pub fn to_plain_map(&self) -> HashMap<Vec<K>, T> {
        self.iter().collect()
    }

    /// Build a new map over this map's axes with `candidate` as backing
    /// store. Sparse candidates are materialized first.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` if the candidate's rank
    /// disagrees with the axes, or `KeyMapError::WrongShape` if any axis
    /// length disagrees.
    pub fn generate_from_array(
        &self,
        candidate: impl Into<DenseArray<T>>,
    ) -> Result<Self, KeyMapError> {
        let array = candidate.into();
        self.translator.validate_shape(array.shape())?;
        Ok(Self::from_parts(self.translator.clone(), array))
    }

    /// Build a map from explicit per-axis key lists and a plain map.
    ///
    /// Slots not covered by `plain_map` hold `default_value`; entries whose
    /// key-tuple is not addressable are skipped. This is the deterministic
    /// reconstruction path: axis ordering is pinned by `key_lists`.
    pub fn from_plain_map(
        key_lists: Vec<Vec<K>>,
        plain_map: &HashMap<Vec<K>, T>,
        default_value: T,
    ) -> Result<Self, KeyMapError> {
        let mut map = Self::new(key_lists, default_value)?;
        for (keys, &value) in plain_map {
            if map.contains_key(keys) {
                map.set(keys, value)?;
            }
        }
        Ok(map)
    }

    /// Build a map from a plain map alone, inferring per-axis keys.
    ///
    /// For each axis position, the distinct keys observed across the plain
    /// map's tuples are collected in first-seen order. That order follows
    /// the plain map's iteration order and is NOT stable across runs; use
    /// [`from_plain_map`](Self::from_plain_map) when axis ordering matters.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` on an empty plain map, or
    /// `KeyMapError::WrongNumberOfKeys` if the tuples disagree in arity.
    pub fn from_plain_map_inferring_keys(
        plain_map: &HashMap<Vec<K>, T>,
        default_value: T,
    ) -> Result<Self, KeyMapError> {
        let key_lists = infer_key_lists(plain_map.keys())?;
        Self::from_plain_map(key_lists, plain_map, default_value)
    }
}

/// Lazy iterator over every addressable slot of a [`DenseKeyMap`].
pub struct DenseKeyMapIter<'a, K, T: Scalar> {
    map: &'a DenseKeyMap<K, T>,
    shape: Vec<usize>,
    linear: usize,
}

impl<K: Clone + Eq + Hash + Debug, T: Scalar> Iterator for DenseKeyMapIter<'_, K, T> {
    type Item = (Vec<K>, T);

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.map.array.get_linear(self.linear)?;
        let coords = linear_to_cartesian(self.linear, &self.shape);
        let keys = self.map.translator.key_tuple(&coords)?;
        self.linear += 1;
        Some((keys, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.map.len().saturating_sub(self.linear);
        (remaining, Some(remaining))
    }
}

impl<'a, K: Clone + Eq + Hash + Debug, T: Scalar> IntoIterator for &'a DenseKeyMap<K, T> {
    type Item = (Vec<K>, T);
    type IntoIter = DenseKeyMapIter<'a, K, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
