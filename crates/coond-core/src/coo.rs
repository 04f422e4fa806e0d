//! ND COO format definition, constructors and read-only views

use core::fmt;
use core::iter::Zip;
use core::slice::{ChunksExact, Iter as SliceIter};

use ndarray::{Array2, ArrayView, Dimension};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::scalar::Scalar;

/// n-dimensional sparse array in coordinate format.
///
/// Entry `k` has coordinate `indices[k * ndim .. (k + 1) * ndim]` and value
/// `data[k]`. The same coordinate may be stored more than once; see
/// `set_entry` for the write path that never introduces duplicates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct CooNd<T> {
    pub data: Vec<T>,
    pub indices: Vec<usize>, // flattened shape (nnz * ndim)
    pub shape: Vec<usize>,
    pub options: Options,
}

impl<T> CooNd<T> {
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Stored entries, counting duplicates and entries not yet flushed.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Coordinate of entry `k`.
    #[inline]
    #[must_use]
    pub fn coord(&self, k: usize) -> &[usize] {
        let ndim = self.ndim();
        &self.indices[k * ndim..(k + 1) * ndim]
    }

    /// Coordinates in storage order, one slice per entry.
    #[inline]
    pub fn coords(&self) -> ChunksExact<'_, usize> {
        self.indices.chunks_exact(self.ndim().max(1))
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.data
    }

    /// Restartable iterator over `(coordinate, value)` in storage order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.coords().zip(self.data.iter()),
        }
    }

    /// Check every stored coordinate against `shape`.
    pub fn check_bounds(&self) -> Result<()> {
        for coord in self.coords() {
            check_coord_bounds(&self.shape, coord)?;
        }
        Ok(())
    }
}

impl<T: Scalar> CooNd<T> {
    /// Empty array of the given shape.
    pub fn new(shape: Vec<usize>) -> Result<Self> {
        validate_shape(&shape)?;
        Ok(Self::from_flat_parts_unchecked(shape, Vec::new(), Vec::new()))
    }

    /// Collect every element of `dense` that is not exactly zero, in row-major order.
    pub fn from_dense<D: Dimension>(dense: ArrayView<'_, T, D>) -> Result<Self> {
        let dense = dense.into_dyn();
        let shape = dense.shape().to_vec();
        if shape.is_empty() {
            return Err(Error::invalid_construction(
                "dense array must have at least one axis",
            ));
        }
        let zero = T::zero();
        let mut indices = Vec::new();
        let mut data = Vec::new();
        for (idx, &v) in dense.indexed_iter() {
            if v != zero {
                indices.extend_from_slice(idx.slice());
                data.push(v);
            }
        }
        log::debug!(
            "CooNd::from_dense shape {:?} -> {} entries",
            shape,
            data.len()
        );
        Ok(Self::from_flat_parts_unchecked(shape, indices, data))
    }

    /// Store an `(n, D)` coordinate block and `n` values as given.
    ///
    /// Bounds and duplicates are not checked. Without an explicit shape each
    /// axis is sized one past the largest coordinate on it, so an empty block
    /// infers a zero-length axis everywhere.
    pub fn from_parts(
        coords: Array2<usize>,
        values: Vec<T>,
        shape: Option<Vec<usize>>,
    ) -> Result<Self> {
        let (nrows, ncols) = coords.dim();
        if ncols == 0 {
            return Err(Error::invalid_construction(
                "coordinate block must have at least one column",
            ));
        }
        if nrows != values.len() {
            return Err(Error::shape_mismatch(nrows, values.len()));
        }
        let shape = match shape {
            Some(shape) => {
                validate_shape(&shape)?;
                if shape.len() != ncols {
                    return Err(Error::invalid_construction(format!(
                        "shape has {} axes but coordinates have {ncols} columns",
                        shape.len()
                    )));
                }
                shape
            }
            None => coords
                .columns()
                .into_iter()
                .map(|col| col.iter().max().map_or(0, |&m| m + 1))
                .collect(),
        };
        let indices = coords.iter().copied().collect();
        Ok(Self::from_flat_parts_unchecked(shape, indices, values))
    }

    /// Build from the flattened layout, optionally validating bounds.
    pub fn from_flat_parts(
        shape: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
        check: bool,
    ) -> Result<Self> {
        let ndim = shape.len();
        if ndim == 0 {
            return Err(Error::invalid_construction("shape must be non-empty"));
        }
        let nnz = data.len();
        let expected = nnz
            .checked_mul(ndim)
            .ok_or_else(|| Error::invalid_construction("indices length overflow"))?;
        if indices.len() != expected {
            return Err(Error::invalid_construction(format!(
                "indices length must be nnz * ndim = {expected}, got {}",
                indices.len()
            )));
        }
        let out = Self::from_flat_parts_unchecked(shape, indices, data);
        if check {
            out.check_bounds()?;
        }
        Ok(out)
    }

    #[inline]
    #[must_use]
    pub fn from_flat_parts_unchecked(shape: Vec<usize>, indices: Vec<usize>, data: Vec<T>) -> Self {
        debug_assert!(!shape.is_empty(), "shape must be non-empty");
        debug_assert_eq!(indices.len(), data.len() * shape.len());
        Self {
            data,
            indices,
            shape,
            options: Options::default(),
        }
    }
}

fn validate_shape(shape: &[usize]) -> Result<()> {
    if shape.is_empty() {
        return Err(Error::invalid_construction("shape must be non-empty"));
    }
    if let Some(axis) = shape.iter().position(|&n| n == 0) {
        return Err(Error::invalid_construction(format!(
            "axis {axis} of shape {shape:?} must be positive"
        )));
    }
    Ok(())
}

pub(crate) fn check_coord_bounds(shape: &[usize], coord: &[usize]) -> Result<()> {
    for (axis, (&index, &size)) in coord.iter().zip(shape).enumerate() {
        if index >= size {
            return Err(Error::IndexOutOfBounds { axis, index, size });
        }
    }
    Ok(())
}

/// Borrowing iterator over the entries of a [`CooNd`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Zip<ChunksExact<'a, usize>, SliceIter<'a, T>>,
}

impl<'a, T: Copy> Iterator for Iter<'a, T> {
    type Item = (&'a [usize], T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(c, &v)| (c, v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(c, &v)| (c, v))
    }
}

impl<T: Copy> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T: Copy> IntoIterator for &'a CooNd<T> {
    type Item = (&'a [usize], T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Copy + fmt::Display> fmt::Display for CooNd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (coord, v) in self {
            writeln!(f, "{coord:?} ---> {v}")?;
        }
        Ok(())
    }
}
