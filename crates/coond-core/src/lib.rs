//! Core data structure for coond: an n-dimensional sparse array in
//! coordinate (COO) format.
#![allow(
    clippy::module_name_repetitions,
    reason = "CooNd and its helpers are referred to by full name across crates"
)]

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod coo;
pub mod entry;
pub mod error;
pub mod nd;
pub mod options;
pub mod scalar;

pub use coo::{CooNd, Iter};
pub use error::{Error, Result};
pub use nd::SparseNd;
pub use options::{BoundsCheck, Options, DEFAULT_TOLERANCE};
pub use scalar::Scalar;
