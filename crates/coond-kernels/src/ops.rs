//! Method syntax for the COOND kernels

use coond_core::{CooNd, Result, Scalar};
use ndarray::ArrayD;

use crate::cleanup::{
    duplicate_coords_coond, eliminate_zeros_coond, has_duplicates_coond, prune_eps_coond,
    remove_duplicate_at_coond, sum_duplicates_coond, Reducer,
};
use crate::convert::to_dense_coond;
use crate::transform::{permute_axes_coond, swapaxes_coond};

/// Extends [`CooNd`] with the kernels of this crate.
pub trait CooNdOps<T: Scalar> {
    /// Remove entries with `|v| <= tolerance`; returns how many were removed.
    fn flush(&mut self, tolerance: f64) -> usize;
    /// `flush` at the array's configured tolerance.
    fn flush_default(&mut self) -> usize;
    fn eliminate_zeros(&mut self) -> usize;
    fn remove_duplicate_at<R: Reducer<T>>(&mut self, coord: &[usize], reducer: R)
        -> Result<usize>;
    fn sum_duplicates(&mut self) -> usize;
    fn has_duplicates(&self) -> bool;
    fn duplicate_coords(&self) -> Vec<Vec<usize>>;
    fn swapaxes(&mut self, axis1: usize, axis2: usize) -> Result<()>;
    fn permute_axes(&mut self, perm: &[usize]) -> Result<()>;
    fn todense(&self) -> Result<ArrayD<T>>;
}

impl<T: Scalar> CooNdOps<T> for CooNd<T> {
    #[inline]
    fn flush(&mut self, tolerance: f64) -> usize {
        prune_eps_coond(self, tolerance)
    }

    #[inline]
    fn flush_default(&mut self) -> usize {
        let tol = self.options.tolerance;
        prune_eps_coond(self, tol)
    }

    #[inline]
    fn eliminate_zeros(&mut self) -> usize {
        eliminate_zeros_coond(self)
    }

    #[inline]
    fn remove_duplicate_at<R: Reducer<T>>(
        &mut self,
        coord: &[usize],
        reducer: R,
    ) -> Result<usize> {
        remove_duplicate_at_coond(self, coord, reducer)
    }

    #[inline]
    fn sum_duplicates(&mut self) -> usize {
        sum_duplicates_coond(self)
    }

    #[inline]
    fn has_duplicates(&self) -> bool {
        has_duplicates_coond(self)
    }

    #[inline]
    fn duplicate_coords(&self) -> Vec<Vec<usize>> {
        duplicate_coords_coond(self)
    }

    #[inline]
    fn swapaxes(&mut self, axis1: usize, axis2: usize) -> Result<()> {
        swapaxes_coond(self, axis1, axis2)
    }

    #[inline]
    fn permute_axes(&mut self, perm: &[usize]) -> Result<()> {
        permute_axes_coond(self, perm)
    }

    #[inline]
    fn todense(&self) -> Result<ArrayD<T>> {
        to_dense_coond(self)
    }
}
