//! Shared thresholds and argument checks for the COOND kernels

use coond_core::{Error, Result};

/// Entry count from which kernels switch to rayon.
pub const SMALL_NNZ_LIMIT: usize = 32 * 1024;

#[inline]
pub(crate) fn check_axis(axis: usize, ndim: usize) -> Result<()> {
    if axis >= ndim {
        return Err(Error::InvalidDimension { axis, ndim });
    }
    Ok(())
}

#[inline]
pub(crate) fn check_coord_len(coord: &[usize], ndim: usize) -> Result<()> {
    if coord.len() != ndim {
        return Err(Error::DimensionMismatch {
            expected: ndim,
            got: coord.len(),
        });
    }
    Ok(())
}
