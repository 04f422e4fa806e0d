//! Kernels over `CooNd`: compaction, duplicate resolution, axis permutation
//! and dense conversion.
//!
//! Large arrays are processed with rayon; set `RAYON_NUM_THREADS` to bound
//! the pool.
#![allow(
    clippy::module_name_repetitions,
    reason = "Kernel names carry the _coond suffix like the rest of the API"
)]

pub mod cleanup;
pub mod convert;
pub mod ops;
pub mod transform;
pub mod util;

pub use cleanup::{
    duplicate_coords_coond, eliminate_zeros_coond, has_duplicates_coond, prune_eps_coond,
    remove_duplicate_at_coond, sum_duplicates_coond, Reducer, Replace, Sum,
};
pub use convert::to_dense_coond;
pub use ops::CooNdOps;
pub use transform::{permute_axes_coond, swapaxes_coond};
