//! Axis permutation for COOND.
//!
//! Coordinates and `shape` are permuted together, so stored coordinates keep
//! lying inside the recorded shape.

use coond_core::{CooNd, Error, Result};
use rayon::prelude::*;

use crate::util::{check_axis, SMALL_NNZ_LIMIT};

/// Exchange axes `axis1` and `axis2` of every coordinate and of the shape.
pub fn swapaxes_coond<T>(a: &mut CooNd<T>, axis1: usize, axis2: usize) -> Result<()> {
    let ndim = a.ndim();
    check_axis(axis1, ndim)?;
    check_axis(axis2, ndim)?;
    if axis1 == axis2 {
        return Ok(());
    }
    if a.nnz() < SMALL_NNZ_LIMIT {
        for row in a.indices.chunks_exact_mut(ndim) {
            row.swap(axis1, axis2);
        }
    } else {
        a.indices
            .par_chunks_exact_mut(ndim)
            .for_each(|row| row.swap(axis1, axis2));
    }
    a.shape.swap(axis1, axis2);
    log::debug!("swapaxes_coond: {axis1} <-> {axis2}, shape now {:?}", a.shape);
    Ok(())
}

/// Reorder axes so that new axis `d` is old axis `perm[d]`.
pub fn permute_axes_coond<T>(a: &mut CooNd<T>, perm: &[usize]) -> Result<()> {
    let ndim = a.ndim();
    if perm.len() != ndim {
        return Err(Error::invalid_argument(
            "perm",
            format!("length {} must equal ndim {ndim}", perm.len()),
        ));
    }
    let mut seen = vec![false; ndim];
    for &p in perm {
        check_axis(p, ndim)?;
        if seen[p] {
            return Err(Error::invalid_argument(
                "perm",
                format!("{perm:?} repeats axis {p}"),
            ));
        }
        seen[p] = true;
    }
    if perm.iter().enumerate().all(|(d, &p)| d == p) {
        return Ok(());
    }

    let permute_row = |scratch: &mut Vec<usize>, row: &mut [usize]| {
        scratch.copy_from_slice(row);
        for d in 0..ndim {
            row[d] = scratch[perm[d]];
        }
    };
    if a.nnz() < SMALL_NNZ_LIMIT {
        let mut scratch = vec![0usize; ndim];
        for row in a.indices.chunks_exact_mut(ndim) {
            permute_row(&mut scratch, row);
        }
    } else {
        a.indices
            .par_chunks_exact_mut(ndim)
            .for_each_init(|| vec![0usize; ndim], |scratch, row| permute_row(scratch, row));
    }
    a.shape = perm.iter().map(|&p| a.shape[p]).collect();
    log::debug!("permute_axes_coond: perm {perm:?}, shape now {:?}", a.shape);
    Ok(())
}
