//! Per-axis key registry.
//!
//! A `KeyIndex` is the ordered, duplicate-free set of keys addressing one
//! axis of a keyed map. It provides key -> position and position -> key
//! lookup; the set of valid keys is fixed at construction.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::KeyMapError;

/// Ordered unique-key registry for one array axis.
///
/// # Example
///
/// ```
/// use ndkeymap::KeyIndex;
///
/// let axis = KeyIndex::new(vec!["a", "b", "c"]).unwrap();
/// assert_eq!(axis.len(), 3);
/// assert_eq!(axis.index_of(&"b").unwrap(), 1);
/// assert_eq!(axis.key_at(2), Some(&"c"));
/// ```
#[derive(Debug, Clone)]
pub struct KeyIndex<K> {
    keys: Vec<K>,
    positions: HashMap<K, usize>,
}

// `positions` is derived from `keys`, so comparing `keys` alone suffices.
impl<K: Eq + Hash> PartialEq for KeyIndex<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq + Hash> Eq for KeyIndex<K> {}

impl<K: Clone + Eq + Hash + Debug> KeyIndex<K> {
    /// Build a key index from an ordered key sequence.
    ///
    /// Input order is preserved as the canonical position-to-key ordering.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::DuplicatedKey` if any key repeats.
    pub fn new<I: IntoIterator<Item = K>>(keys: I) -> Result<Self, KeyMapError> {
        let keys: Vec<K> = keys.into_iter().collect();
        let mut positions = HashMap::with_capacity(keys.len());
        for (pos, key) in keys.iter().enumerate() {
            if positions.insert(key.clone(), pos).is_some() {
                return Err(KeyMapError::DuplicatedKey {
                    key: format!("{key:?}"),
                });
            }
        }
        Ok(Self { keys, positions })
    }

    /// Position of `key` on this axis, in `0..len()`.
    ///
    /// # Errors
    ///
    /// Returns `KeyMapError::KeyNotFound` if the key is absent.
    pub fn index_of(&self, key: &K) -> Result<usize, KeyMapError> {
        self.positions
            .get(key)
            .copied()
            .ok_or_else(|| KeyMapError::KeyNotFound {
                key: format!("{key:?}"),
            })
    }

    /// Whether `key` exists on this axis.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Key at `position`, or `None` if out of range.
    #[inline]
    pub fn key_at(&self, position: usize) -> Option<&K> {
        self.keys.get(position)
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the axis has no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// All keys in canonical order.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}
