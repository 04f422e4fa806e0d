//! Property-based tests for CooNd entry management against dense baselines

use coond_core::{CooNd, Error};
use coond_kernels::{CooNdOps, Sum};
use ndarray::{ArrayD, IxDyn};
use proptest::prelude::*;

// shape with 1..=3 axes of length 1..=4, plus a dense row-major buffer for it
fn dense_strategy() -> impl Strategy<Value = ArrayD<f64>> {
    prop::collection::vec(1usize..=4, 1..=3).prop_flat_map(|shape| {
        let len: usize = shape.iter().product();
        prop::collection::vec(
            prop_oneof![3 => Just(0i32), 2 => -50i32..50i32].prop_map(f64::from),
            len..=len,
        )
        .prop_map(move |data| ArrayD::from_shape_vec(IxDyn(&shape), data).unwrap())
    })
}

fn coord_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5, 0usize..5)
}

proptest! {
    #[test]
    fn prop_empty_todense_is_zero(shape in prop::collection::vec(1usize..=5, 1..=4)) {
        let a = CooNd::<f64>::new(shape.clone()).unwrap();
        prop_assert_eq!(a.size(), 0);
        prop_assert_eq!(a.todense().unwrap(), ArrayD::<f64>::zeros(IxDyn(&shape)));
    }

    #[test]
    fn prop_dense_roundtrip(dense in dense_strategy()) {
        let a = CooNd::from_dense(dense.view()).unwrap();
        prop_assert_eq!(a.size(), dense.iter().filter(|&&v| v != 0.0).count());
        prop_assert_eq!(a.todense().unwrap(), dense);
    }

    #[test]
    fn prop_flush_idempotent(
        values in prop::collection::vec(-2.0f64..2.0, 0..40),
        tol in 0.0f64..1.0,
    ) {
        let n = values.len().max(1);
        let mut a = CooNd::<f64>::new(vec![n]).unwrap();
        for (i, &v) in values.iter().enumerate() {
            a.add_entry(&[i], v).unwrap();
        }
        a.flush(tol);
        let once = a.clone();
        prop_assert_eq!(a.flush(tol), 0);
        prop_assert_eq!(a, once);
    }

    #[test]
    fn prop_duplicate_adds_accumulate(
        (i, j) in coord_strategy(),
        v1 in 1i32..100,
        v2 in 1i32..100,
    ) {
        let mut a = CooNd::<i32>::new(vec![5, 5]).unwrap();
        a.add_entry(&[i, j], v1).unwrap();
        a.add_entry(&[i, j], v2).unwrap();
        let dense = a.todense().unwrap();
        prop_assert_eq!(dense[&[i, j][..]], v1 + v2);
        let is_multiple = matches!(a.get_entry(&[i, j]), Err(Error::MultipleAssignment { .. }));
        prop_assert!(is_multiple);
    }

    #[test]
    fn prop_set_entry_never_duplicates(
        (i, j) in coord_strategy(),
        others in prop::collection::vec((coord_strategy(), -9i64..9), 0..10),
        writes in prop::collection::vec(-100i64..100, 1..10),
    ) {
        let mut a = CooNd::<i64>::new(vec![5, 5]).unwrap();
        for ((r, c), v) in others {
            a.set_entry(&[r, c], v).unwrap();
        }
        for &v in &writes {
            a.set_entry(&[i, j], v).unwrap();
        }
        prop_assert_eq!(a.count_at(&[i, j]), 1);
        prop_assert_eq!(a.get_entry(&[i, j]).unwrap(), *writes.last().unwrap());
        prop_assert!(!a.has_duplicates());
    }

    #[test]
    fn prop_sum_duplicates_preserves_dense(
        entries in prop::collection::vec((coord_strategy(), 1i32..20), 0..30),
    ) {
        let mut a = CooNd::<i32>::new(vec![5, 5]).unwrap();
        for ((r, c), v) in entries {
            a.add_entry(&[r, c], v).unwrap();
        }
        let before = a.todense().unwrap();
        a.sum_duplicates();
        prop_assert!(!a.has_duplicates());
        prop_assert_eq!(a.todense().unwrap(), before);
    }

    #[test]
    fn prop_remove_duplicate_sum_matches_dense(
        (i, j) in coord_strategy(),
        dups in prop::collection::vec(1i32..20, 2..6),
    ) {
        let mut a = CooNd::<i32>::new(vec![5, 5]).unwrap();
        for &v in &dups {
            a.add_entry(&[i, j], v).unwrap();
        }
        let before = a.size();
        let removed = a.remove_duplicate_at(&[i, j], Sum).unwrap();
        prop_assert_eq!(removed, dups.len() - 1);
        prop_assert_eq!(a.size(), before - removed);
        prop_assert_eq!(a.get_entry(&[i, j]).unwrap(), dups.iter().sum::<i32>());
    }

    #[test]
    fn prop_swapaxes_twice_is_identity(dense in dense_strategy(), a1 in 0usize..3, a2 in 0usize..3) {
        let original = CooNd::from_dense(dense.view()).unwrap();
        let ndim = original.ndim();
        let (a1, a2) = (a1 % ndim, a2 % ndim);
        let mut a = original.clone();
        a.swapaxes(a1, a2).unwrap();
        a.swapaxes(a1, a2).unwrap();
        prop_assert_eq!(a, original);
    }
}
