//! Entry-level reads and writes.
//!
//! Two write paths: `add_entry` appends without looking (O(1), may create
//! duplicates) and `set_entry` scans for the coordinate first (O(nnz), never
//! creates duplicates). Reads share `set_entry`'s scan and refuse to guess
//! when duplicates are present.

use ndarray::ArrayView2;

use crate::coo::{check_coord_bounds, CooNd};
use crate::error::{Error, Result};
use crate::options::BoundsCheck;
use crate::scalar::Scalar;

impl<T: Scalar> CooNd<T> {
    fn validate_coord(&self, coord: &[usize]) -> Result<()> {
        let ndim = self.ndim();
        if coord.len() != ndim {
            return Err(Error::DimensionMismatch {
                expected: ndim,
                got: coord.len(),
            });
        }
        if self.options.bounds == BoundsCheck::Strict {
            check_coord_bounds(&self.shape, coord)?;
        }
        Ok(())
    }

    fn validate_block(&self, coords: &ArrayView2<'_, usize>, nvalues: usize) -> Result<()> {
        let (nrows, ncols) = coords.dim();
        if nrows != nvalues {
            return Err(Error::shape_mismatch(nrows, nvalues));
        }
        if ncols != self.ndim() {
            return Err(Error::DimensionMismatch {
                expected: self.ndim(),
                got: ncols,
            });
        }
        Ok(())
    }

    /// Positions of every stored entry at `coord`, in storage order.
    #[must_use]
    pub fn find(&self, coord: &[usize]) -> Vec<usize> {
        self.coords()
            .enumerate()
            .filter_map(|(k, c)| (c == coord).then_some(k))
            .collect()
    }

    /// Number of stored entries at `coord`.
    #[must_use]
    pub fn count_at(&self, coord: &[usize]) -> usize {
        self.coords().filter(|&c| c == coord).count()
    }

    /// Append one entry without searching for an existing one.
    pub fn add_entry(&mut self, coord: &[usize], value: T) -> Result<()> {
        self.validate_coord(coord)?;
        log::trace!("CooNd::add_entry {coord:?} <- {value}");
        self.indices.extend_from_slice(coord);
        self.data.push(value);
        Ok(())
    }

    /// Append an `(n, D)` coordinate block with `n` values.
    ///
    /// The whole block is validated before anything is appended.
    pub fn add_entries(&mut self, coords: ArrayView2<'_, usize>, values: &[T]) -> Result<()> {
        self.validate_block(&coords, values.len())?;
        for row in coords.rows() {
            if let Some(coord) = row.as_slice() {
                self.validate_coord(coord)?;
            } else {
                self.validate_coord(&row.to_vec())?;
            }
        }
        log::trace!("CooNd::add_entries appending {} entries", values.len());
        self.indices.reserve(values.len() * self.ndim());
        self.indices.extend(coords.iter().copied());
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// Write `value` at `coord`, overwriting the entry if one exists.
    ///
    /// Fails with `MultipleAssignment`, leaving storage untouched, if the
    /// coordinate is already duplicated.
    pub fn set_entry(&mut self, coord: &[usize], value: T) -> Result<()> {
        self.validate_coord(coord)?;
        let hits = self.find(coord);
        match hits.as_slice() {
            [] => {
                log::trace!("CooNd::set_entry {coord:?} <- {value} (new)");
                self.indices.extend_from_slice(coord);
                self.data.push(value);
                Ok(())
            }
            [k] => {
                log::trace!("CooNd::set_entry {coord:?} <- {value} (overwrite)");
                self.data[*k] = value;
                Ok(())
            }
            _ => Err(Error::multiple_assignment(coord, hits.len())),
        }
    }

    /// Apply `set_entry` row by row.
    ///
    /// Not atomic: if a row fails, the rows before it stay written.
    pub fn set_entries(&mut self, coords: ArrayView2<'_, usize>, values: &[T]) -> Result<()> {
        self.validate_block(&coords, values.len())?;
        for (row, &v) in coords.rows().into_iter().zip(values) {
            let coord = row.to_vec();
            self.set_entry(&coord, v)?;
        }
        Ok(())
    }

    /// Value stored at `coord`, or zero if nothing is stored there.
    pub fn get_entry(&self, coord: &[usize]) -> Result<T> {
        if coord.len() != self.ndim() {
            return Err(Error::DimensionMismatch {
                expected: self.ndim(),
                got: coord.len(),
            });
        }
        let mut found = None;
        let mut count = 0usize;
        for (c, v) in self {
            if c == coord {
                found = Some(v);
                count += 1;
            }
        }
        match count {
            0 => Ok(T::zero()),
            1 => Ok(found.unwrap_or_else(T::zero)),
            _ => Err(Error::multiple_assignment(coord, count)),
        }
    }

    /// `get_entry` for every row of an `(n, D)` block, in row order.
    pub fn get_entries(&self, coords: ArrayView2<'_, usize>) -> Result<Vec<T>> {
        coords
            .rows()
            .into_iter()
            .map(|row| self.get_entry(&row.to_vec()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn add_entries_validates_whole_block_first() {
        let mut a = CooNd::<f64>::new(vec![2, 2])
            .unwrap()
            .with_options(crate::Options::strict());
        let coords = array![[0usize, 0], [5, 1]];
        let err = a.add_entries(coords.view(), &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfBounds {
                axis: 0,
                index: 5,
                size: 2
            }
        );
        assert_eq!(a.size(), 0);
    }

    #[test]
    fn find_reports_every_match() {
        let mut a = CooNd::<i32>::new(vec![3]).unwrap();
        a.add_entry(&[1], 4).unwrap();
        a.add_entry(&[2], 5).unwrap();
        a.add_entry(&[1], 6).unwrap();
        assert_eq!(a.find(&[1]), vec![0, 2]);
        assert_eq!(a.count_at(&[2]), 1);
        assert!(a.find(&[0]).is_empty());
    }
}
