//! Compaction and duplicate resolution for COOND, in place

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use coond_core::{CooNd, Result, Scalar};
use rayon::prelude::*;

use crate::util::{check_coord_len, SMALL_NNZ_LIMIT};

/// Combines the values found at a duplicated coordinate into one.
///
/// Implemented for any `FnOnce(&[T]) -> T`, for [`Replace`] and for [`Sum`].
pub trait Reducer<T> {
    fn reduce(self, duplicates: &[T]) -> T;
}

impl<T, F> Reducer<T> for F
where
    F: FnOnce(&[T]) -> T,
{
    #[inline]
    fn reduce(self, duplicates: &[T]) -> T {
        self(duplicates)
    }
}

/// Discard the duplicates and store this value instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Replace<T>(pub T);

impl<T> Reducer<T> for Replace<T> {
    #[inline]
    fn reduce(self, _duplicates: &[T]) -> T {
        self.0
    }
}

/// Add the duplicates together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl<T: Scalar> Reducer<T> for Sum {
    #[inline]
    fn reduce(self, duplicates: &[T]) -> T {
        let mut acc = T::zero();
        for &v in duplicates {
            acc += v;
        }
        acc
    }
}

/// Drop entries with `|v| <= eps`, keeping the survivors in storage order.
///
/// Returns the number of entries removed. A negative `eps` removes nothing.
#[allow(
    clippy::neg_cmp_op_on_partial_ord,
    reason = "NaN must compare as not-small and survive the prune"
)]
pub fn prune_eps_coond<T: Scalar>(a: &mut CooNd<T>, eps: f64) -> usize {
    let nnz = a.data.len();
    if eps < 0.0 || nnz == 0 {
        return 0;
    }
    let keep: Vec<bool> = if nnz < SMALL_NNZ_LIMIT {
        a.data.iter().map(|v| !(v.magnitude() <= eps)).collect()
    } else {
        a.data.par_iter().map(|v| !(v.magnitude() <= eps)).collect()
    };
    let ndim = a.ndim();
    let mut dst = 0usize;
    for (src, &k) in keep.iter().enumerate() {
        if !k {
            continue;
        }
        if dst != src {
            a.data[dst] = a.data[src];
            a.indices.copy_within(src * ndim..(src + 1) * ndim, dst * ndim);
        }
        dst += 1;
    }
    a.data.truncate(dst);
    a.indices.truncate(dst * ndim);
    let removed = nnz - dst;
    if removed > 0 {
        log::debug!("prune_eps_coond: removed {removed} of {nnz} entries (eps = {eps:e})");
    }
    removed
}

/// Drop explicitly stored zeros.
pub fn eliminate_zeros_coond<T: Scalar>(a: &mut CooNd<T>) -> usize {
    prune_eps_coond(a, 0.0)
}

/// Collapse the entries stored at `coord` into one.
///
/// With two or more matches, every match is zeroed, the first one receives
/// `reducer`'s result, and the whole array is then pruned at the configured
/// tolerance (so a reduction to zero removes the coordinate entirely).
/// Returns the number of entries removed; zero or one match is a no-op.
pub fn remove_duplicate_at_coond<T, R>(
    a: &mut CooNd<T>,
    coord: &[usize],
    reducer: R,
) -> Result<usize>
where
    T: Scalar,
    R: Reducer<T>,
{
    check_coord_len(coord, a.ndim())?;
    let hits = a.find(coord);
    let Some((&first, _)) = hits.split_first() else {
        return Ok(0);
    };
    if hits.len() == 1 {
        return Ok(0);
    }
    let duplicates: Vec<T> = hits.iter().map(|&k| a.data[k]).collect();
    for &k in &hits {
        a.data[k] = T::zero();
    }
    a.data[first] = reducer.reduce(&duplicates);
    log::debug!(
        "remove_duplicate_at_coond: {coord:?} had {} entries, reduced to {}",
        hits.len(),
        a.data[first]
    );
    let tol = a.options.tolerance;
    Ok(prune_eps_coond(a, tol))
}

/// Sum every group of duplicated coordinates into its first occurrence,
/// then prune at the configured tolerance. Returns the number of entries removed.
pub fn sum_duplicates_coond<T: Scalar>(a: &mut CooNd<T>) -> usize {
    let nnz = a.data.len();
    if nnz < 2 {
        let tol = a.options.tolerance;
        return prune_eps_coond(a, tol);
    }
    let mut first: HashMap<&[usize], usize> = HashMap::with_capacity(nnz);
    let mut indices = Vec::with_capacity(a.indices.len());
    let mut data: Vec<T> = Vec::with_capacity(nnz);
    for (coord, v) in a.iter() {
        match first.entry(coord) {
            Entry::Occupied(e) => data[*e.get()] += v,
            Entry::Vacant(e) => {
                e.insert(data.len());
                indices.extend_from_slice(coord);
                data.push(v);
            }
        }
    }
    drop(first);
    let merged = nnz - data.len();
    a.indices = indices;
    a.data = data;
    if merged > 0 {
        log::debug!("sum_duplicates_coond: merged {merged} duplicate entries");
    }
    let tol = a.options.tolerance;
    merged + prune_eps_coond(a, tol)
}

#[must_use]
pub fn has_duplicates_coond<T: Scalar>(a: &CooNd<T>) -> bool {
    let mut seen: HashSet<&[usize]> = HashSet::with_capacity(a.nnz());
    a.coords().any(|c| !seen.insert(c))
}

/// Coordinates stored more than once, in order of first appearance.
#[must_use]
pub fn duplicate_coords_coond<T: Scalar>(a: &CooNd<T>) -> Vec<Vec<usize>> {
    let mut counts: HashMap<&[usize], usize> = HashMap::with_capacity(a.nnz());
    let mut order: Vec<&[usize]> = Vec::new();
    for c in a.coords() {
        let n = counts.entry(c).or_insert(0);
        if *n == 0 {
            order.push(c);
        }
        *n += 1;
    }
    order
        .into_iter()
        .filter(|c| counts.get(c).is_some_and(|&n| n > 1))
        .map(<[usize]>::to_vec)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(values: &[f64]) -> CooNd<f64> {
        let indices = (0..values.len()).collect();
        CooNd::from_flat_parts_unchecked(vec![values.len()], indices, values.to_vec())
    }

    #[test]
    fn prune_keeps_order_and_coordinates() {
        let mut a = line(&[1.0, 0.0, 2.0, 1e-20, -3.0]);
        assert_eq!(prune_eps_coond(&mut a, 1e-15), 2);
        assert_eq!(a.data, vec![1.0, 2.0, -3.0]);
        assert_eq!(a.indices, vec![0, 2, 4]);
    }

    #[test]
    fn negative_eps_is_noop() {
        let mut a = line(&[0.0, 1.0]);
        assert_eq!(prune_eps_coond(&mut a, -1.0), 0);
        assert_eq!(a.nnz(), 2);
    }

    #[test]
    fn nan_survives_prune() {
        let mut a = line(&[f64::NAN, 0.0]);
        assert_eq!(prune_eps_coond(&mut a, 1e-15), 1);
        assert!(a.data[0].is_nan());
    }
}
