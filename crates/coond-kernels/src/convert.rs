//! COOND -> dense conversion

use coond_core::{CooNd, Error, Result, Scalar};
use ndarray::{ArrayD, IxDyn};

/// Materialise `a` as a dense array of its shape.
///
/// Values are added into their cells, so duplicated coordinates accumulate.
/// A coordinate outside the shape (only storable in lenient mode) is an error.
pub fn to_dense_coond<T: Scalar>(a: &CooNd<T>) -> Result<ArrayD<T>> {
    let mut out = ArrayD::<T>::zeros(IxDyn(&a.shape));
    for (coord, v) in a {
        match out.get_mut(coord) {
            Some(cell) => *cell += v,
            None => return Err(out_of_bounds(&a.shape, coord)),
        }
    }
    log::debug!(
        "to_dense_coond: {} entries into shape {:?}",
        a.nnz(),
        a.shape
    );
    Ok(out)
}

fn out_of_bounds(shape: &[usize], coord: &[usize]) -> Error {
    for (axis, (&index, &size)) in coord.iter().zip(shape).enumerate() {
        if index >= size {
            return Error::IndexOutOfBounds { axis, index, size };
        }
    }
    Error::DimensionMismatch {
        expected: shape.len(),
        got: coord.len(),
    }
}
