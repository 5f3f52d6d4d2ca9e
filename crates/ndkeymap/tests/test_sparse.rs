//! Integration tests for the sparse keyed map, covering:
//! - Construction and fill-value semantics of unset slots
//! - Dense, COO and dictionary-of-keys exports
//! - Regeneration from sparse and dense candidates, including the
//!   dense-flipping variant
//! - Plain-map reconstruction

use std::collections::HashMap;

use approx::assert_relative_eq;
use ndkeymap::{DenseArray, DokArray, KeyMapError, SparseKeyMap};

fn sample() -> SparseKeyMap<&'static str, f64> {
    SparseKeyMap::new(vec![vec!["a", "b", "c"], vec!["d", "e"]], 1.0).unwrap()
}

#[test]
fn test_initialization() {
    let map = sample();
    assert_eq!(map.ndim(), 2);
    assert_eq!(map.shape(), vec![3, 2]);
    assert_eq!(map.len(), 6);
    assert_eq!(map.nnz(), 0);
    assert_eq!(map.to_dense_array(), DenseArray::filled(&[3, 2], 1.0));
}

#[test]
fn test_initialization_with_duplicated_keys() {
    let err = SparseKeyMap::new(vec![vec!["a", "a"], vec!["b", "c"]], 0.0).unwrap_err();
    assert!(matches!(err, KeyMapError::DuplicatedKey { .. }));
}

#[test]
fn test_getitem_setitem() {
    let mut map = sample();
    map.set(&["a", "d"], 2.0).unwrap();
    assert_relative_eq!(map.get(&["a", "d"]).unwrap(), 2.0);
    assert_relative_eq!(map.get(&["b", "e"]).unwrap(), 1.0);
}

#[test]
fn test_get_wrong_arity() {
    let map = sample();
    assert!(matches!(
        map.get(&["a"]).unwrap_err(),
        KeyMapError::WrongNumberOfKeys { .. }
    ));
    assert!(matches!(
        map.get(&["a", "b", "c"]).unwrap_err(),
        KeyMapError::WrongNumberOfKeys { .. }
    ));
}

#[test]
fn test_unset_slot_is_fill_not_error() {
    let map = SparseKeyMap::new(vec![vec!["a", "b"], vec!["x", "y"]], 0.0).unwrap();
    // Addressable but unset: fill value, never KeyNotFound.
    assert_relative_eq!(map.get(&["b", "x"]).unwrap(), 0.0);
    // Out of domain: a hard error.
    assert!(matches!(
        map.get(&["c", "x"]).unwrap_err(),
        KeyMapError::KeyNotFound { .. }
    ));
}

#[test]
fn test_to_dense_array() {
    let mut map = sample();
    map.set(&["a", "d"], 3.0).unwrap();
    let expected =
        DenseArray::from_vec(vec![3.0, 1.0, 1.0, 1.0, 1.0, 1.0], &[3, 2]).unwrap();
    assert_eq!(map.to_dense_array(), expected);
}

#[test]
fn test_to_coo() {
    let mut map = sample();
    map.set(&["b", "e"], 4.0).unwrap();
    let coo = map.to_coo();
    assert_eq!(coo.nnz(), 1);
    assert_eq!(coo.get(&[1, 1]), Some(4.0));
    assert_eq!(coo.get(&[0, 1]), Some(1.0));
}

#[test]
fn test_empty_map_exports() {
    let map = SparseKeyMap::new(vec![vec!["a", "b"], vec!["x", "y"]], 0.0).unwrap();
    assert_eq!(map.to_coo().nnz(), 0);
    assert_eq!(map.to_dense_array().data(), &[0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_to_dok() {
    let mut map = sample();
    map.set(&["c", "d"], 5.0).unwrap();
    let dok = map.to_dok();
    assert_eq!(dok.get(&[2, 0]), Some(5.0));
    assert_eq!(dok.get(&[1, 1]), Some(1.0));
    assert_eq!(map.as_dok().nnz(), 1);
}

#[test]
fn test_iteration_covers_all_slots() {
    let mut map = sample();
    map.set(&["a", "e"], 2.5).unwrap();
    let items: Vec<(Vec<&str>, f64)> = map.iter().collect();
    assert_eq!(items.len(), 6);
    assert!(items.contains(&(vec!["a", "e"], 2.5)));
    assert!(items.contains(&(vec!["c", "d"], 1.0)));
}

#[test]
fn test_to_plain_map_includes_fill_slots() {
    let mut map = sample();
    map.set(&["b", "d"], 9.0).unwrap();
    let plain = map.to_plain_map();
    assert_eq!(plain.len(), 6);
    assert_relative_eq!(plain[&vec!["b", "d"]], 9.0);
    assert_relative_eq!(plain[&vec!["a", "d"]], 1.0);
}

#[test]
fn test_generate_from_sparse_candidate() {
    let map = sample();
    let mut dok: DokArray<f64> = DokArray::new(&[3, 2], 0.0);
    dok.set(&[0, 0], 0.25).unwrap();
    dok.set(&[2, 1], 0.75).unwrap();

    let fresh = map.generate_from_array(dok.clone()).unwrap();
    assert_eq!(fresh.to_dense_array(), dok.to_dense());
    assert_eq!(fresh.shape(), map.shape());
}

#[test]
fn test_generate_from_dense_candidate() {
    let map = sample();
    let dense = DenseArray::from_vec(vec![0.0, 2.0, 0.0, 0.0, 0.0, 6.0], &[3, 2]).unwrap();
    let fresh = map.generate_from_array(dense.clone()).unwrap();
    assert_eq!(fresh.nnz(), 2);
    assert_eq!(fresh.to_dense_array(), dense);
}

#[test]
fn test_generate_dense_from_array() {
    let map = sample();
    let mut dok: DokArray<f64> = DokArray::new(&[3, 2], 0.0);
    dok.set(&[1, 0], 8.0).unwrap();

    let dense_map = map.generate_dense_from_array(dok.clone()).unwrap();
    assert_eq!(dense_map.to_array(), dok.to_dense());
    assert_relative_eq!(dense_map.get(&["b", "d"]).unwrap(), 8.0);
    assert_relative_eq!(dense_map.get(&["a", "d"]).unwrap(), 0.0);
}

#[test]
fn test_generate_wrong_shape() {
    let map = sample();
    let err = map
        .generate_from_array(DokArray::<f64>::new(&[2, 3], 0.0))
        .unwrap_err();
    assert_eq!(
        err,
        KeyMapError::WrongShape {
            expected: vec![3, 2],
            actual: vec![2, 3]
        }
    );
}

#[test]
fn test_generate_wrong_rank() {
    let map = sample();
    let err = map
        .generate_from_array(DokArray::<f64>::new(&[6], 0.0))
        .unwrap_err();
    assert!(matches!(err, KeyMapError::WrongDimensionCount { .. }));
}

#[test]
fn test_from_plain_map_given_keys() {
    let mut plain = HashMap::new();
    plain.insert(vec!["a", "d"], 10.0);
    plain.insert(vec!["c", "e"], 20.0);
    let map = SparseKeyMap::from_plain_map(
        vec![vec!["a", "b", "c"], vec!["d", "e"]],
        &plain,
        -1.0,
    )
    .unwrap();
    assert_relative_eq!(map.get(&["a", "d"]).unwrap(), 10.0);
    assert_relative_eq!(map.get(&["c", "e"]).unwrap(), 20.0);
    assert_relative_eq!(map.get(&["b", "d"]).unwrap(), -1.0);
}

#[test]
fn test_from_plain_map_inferring_keys() {
    let mut plain = HashMap::new();
    plain.insert(vec!["a", "x"], 1.0);
    let map = SparseKeyMap::from_plain_map_inferring_keys(&plain, 0.0).unwrap();
    assert_eq!(map.shape(), vec![1, 1]);
    assert_relative_eq!(map.get(&["a", "x"]).unwrap(), 1.0);
}

#[test]
fn test_plain_map_roundtrip() {
    let mut map = sample();
    map.set(&["a", "e"], 2.0).unwrap();
    map.set(&["c", "d"], -4.0).unwrap();

    let plain = map.to_plain_map();
    let rebuilt = SparseKeyMap::from_plain_map(
        vec![vec!["a", "b", "c"], vec!["d", "e"]],
        &plain,
        1.0,
    )
    .unwrap();

    for (keys, value) in &map {
        assert_relative_eq!(rebuilt.get(&keys).unwrap(), value);
    }
}

#[test]
fn test_set_fill_value_erases() {
    let mut map = SparseKeyMap::new(vec![vec!["a", "b"], vec!["x", "y"]], 0.0).unwrap();
    map.set(&["a", "x"], 5.0).unwrap();
    assert_eq!(map.nnz(), 1);
    map.set(&["a", "x"], 0.0).unwrap();
    assert_eq!(map.nnz(), 0);
    assert_relative_eq!(map.get(&["a", "x"]).unwrap(), 0.0);
}
