use crate::coo::CooNd;

/// Read-only view of an n-dimensional sparse container.
pub trait SparseNd {
    fn nnz(&self) -> usize;
    fn ndim(&self) -> usize;
    fn shape(&self) -> &[usize];
}

impl<T> SparseNd for CooNd<T> {
    #[inline]
    fn nnz(&self) -> usize {
        self.nnz()
    }

    #[inline]
    fn ndim(&self) -> usize {
        self.ndim()
    }

    #[inline]
    fn shape(&self) -> &[usize] {
        &self.shape
    }
}
