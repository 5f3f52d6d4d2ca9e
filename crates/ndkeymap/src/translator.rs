//! Key-tuple to coordinate translation.
//!
//! A `KeyTranslator` composes one [`KeyIndex`] per array axis and converts
//! N-tuples of keys into N-tuples of integer coordinates (and back). Every
//! read or write on a wrapped map goes through this translation.

use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::error::KeyMapError;
use crate::key_index::KeyIndex;

/// Integer coordinates for one slot.
///
/// Stack-allocated for the common case of up to 8 axes.
pub type Coord = SmallVec<[usize; 8]>;

/// Composition of key indices across all axes.
///
/// # Example
///
/// ```
/// use ndkeymap::KeyTranslator;
///
/// let tr = KeyTranslator::from_key_lists(vec![
///     vec!["a", "b"],
///     vec!["x", "y", "z"],
/// ]).unwrap();
/// assert_eq!(tr.ndim(), 2);
/// assert_eq!(tr.shape(), vec![2, 3]);
/// let coord = tr.to_coordinates(&["b", "z"]).unwrap();
/// assert_eq!(coord.as_slice(), &[1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct KeyTranslator<K> {
    axes: Vec<KeyIndex<K>>,
}

impl<K: Eq + Hash> PartialEq for KeyTranslator<K> {
    fn eq(&self, other: &Self) -> bool {
        self.axes == other.axes
    }
}

impl<K: Eq + Hash> Eq for KeyTranslator<K> {}

impl<K: Clone + Eq + Hash + Debug> KeyTranslator<K> {
    /// Build a translator from pre-built axis indices.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` if `axes` is empty.
    pub fn new(axes: Vec<KeyIndex<K>>) -> Result<Self, KeyMapError> {
        if axes.is_empty() {
            return Err(KeyMapError::WrongDimensionCount {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self { axes })
    }

    /// Build a translator from one key list per axis.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` if no lists are given, or
    /// `KeyMapError::DuplicatedKey` if a list contains a repeated key.
    pub fn from_key_lists<I, A>(key_lists: I) -> Result<Self, KeyMapError>
    where
        I: IntoIterator<Item = A>,
        A: IntoIterator<Item = K>,
    {
        let axes = key_lists
            .into_iter()
            .map(KeyIndex::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(axes)
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Per-axis lengths.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(|axis| axis.len()).collect()
    }

    /// Total number of addressable slots (product of axis lengths).
    pub fn num_slots(&self) -> usize {
        self.axes.iter().map(|axis| axis.len()).product()
    }

    /// The key index for one axis.
    #[inline]
    pub fn axis(&self, dim: usize) -> Option<&KeyIndex<K>> {
        self.axes.get(dim)
    }

    /// Translate a key-tuple into integer coordinates.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongNumberOfKeys` if the tuple's arity does
    /// not match [`ndim`](Self::ndim), or `KeyMapError::KeyNotFound` if any
    /// component is unknown on its axis.
    pub fn to_coordinates(&self, keys: &[K]) -> Result<Coord, KeyMapError> {
        if keys.len() != self.ndim() {
            return Err(KeyMapError::WrongNumberOfKeys {
                expected: self.ndim(),
                actual: keys.len(),
            });
        }
        keys.iter()
            .zip(self.axes.iter())
            .map(|(key, axis)| axis.index_of(key))
            .collect()
    }

    /// Translate integer coordinates back into an owned key-tuple.
    ///
    /// Returns `None` if the arity or any coordinate is out of range.
    pub fn key_tuple(&self, coords: &[usize]) -> Option<Vec<K>> {
        if coords.len() != self.ndim() {
            return None;
        }
        coords
            .iter()
            .zip(self.axes.iter())
            .map(|(&pos, axis)| axis.key_at(pos).cloned())
            .collect()
    }

    /// Whether a key-tuple is in-domain (right arity, every key known).
    pub fn contains(&self, keys: &[K]) -> bool {
        keys.len() == self.ndim()
            && keys
                .iter()
                .zip(self.axes.iter())
                .all(|(key, axis)| axis.contains(key))
    }

    /// Validate a candidate backing store's shape against the axes.
    ///
    /// Rank is checked first, then per-axis lengths.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::WrongDimensionCount` on a rank mismatch, or
    /// `KeyMapError::WrongShape` on a per-axis length mismatch.
    pub fn validate_shape(&self, candidate: &[usize]) -> Result<(), KeyMapError> {
        if candidate.len() != self.ndim() {
            return Err(KeyMapError::WrongDimensionCount {
                expected: self.ndim(),
                actual: candidate.len(),
            });
        }
        let expected = self.shape();
        if candidate != expected.as_slice() {
            return Err(KeyMapError::WrongShape {
                expected,
                actual: candidate.to_vec(),
            });
        }
        Ok(())
    }
}

/// Recover per-axis key lists from a collection of key-tuples.
///
/// For each axis position, distinct keys are collected in first-seen order
/// over `tuples`. The recovered order reflects scan order, nothing more.
///
/// # Errors
///
/// Returns `KeyMapError::WrongDimensionCount` if `tuples` is empty, or
/// `KeyMapError::WrongNumberOfKeys` if the tuples disagree in arity.
pub(crate) fn infer_key_lists<'a, K, I>(tuples: I) -> Result<Vec<Vec<K>>, KeyMapError>
where
    K: Clone + Eq + Hash + Debug + 'a,
    I: IntoIterator<Item = &'a Vec<K>>,
{
    let mut arity: Option<usize> = None;
    let mut key_lists: Vec<Vec<K>> = Vec::new();
    let mut seen: Vec<std::collections::HashSet<K>> = Vec::new();

    for tuple in tuples {
        match arity {
            None => {
                arity = Some(tuple.len());
                key_lists = vec![Vec::new(); tuple.len()];
                seen = vec![std::collections::HashSet::new(); tuple.len()];
            }
            Some(n) if tuple.len() != n => {
                return Err(KeyMapError::WrongNumberOfKeys {
                    expected: n,
                    actual: tuple.len(),
                });
            }
            Some(_) => {}
        }
        for (axis, key) in tuple.iter().enumerate() {
            if seen[axis].insert(key.clone()) {
                key_lists[axis].push(key.clone());
            }
        }
    }

    match arity {
        Some(n) if n > 0 => Ok(key_lists),
        // An empty plain map, or one keyed by empty tuples, pins down no
        // axes at all.
        _ => Err(KeyMapError::WrongDimensionCount {
            expected: 1,
            actual: 0,
        }),
    }
}
