//! Element types storable in a `CooNd`

use core::fmt::{Debug, Display};
use core::ops::AddAssign;
use num_traits::{ToPrimitive, Zero};

/// Scalar element of a sparse array.
///
/// Blanket-implemented for every numeric type that is `Copy`, has an additive
/// identity and can be widened to `f64` for tolerance comparisons.
pub trait Scalar:
    Copy + Zero + AddAssign + PartialEq + ToPrimitive + Debug + Display + Send + Sync + 'static
{
    /// `|self|` widened to `f64`; values that cannot be widened compare as infinite.
    #[inline]
    fn magnitude(self) -> f64 {
        self.to_f64().map_or(f64::INFINITY, f64::abs)
    }
}

impl<T> Scalar for T where
    T: Copy + Zero + AddAssign + PartialEq + ToPrimitive + Debug + Display + Send + Sync + 'static
{
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn magnitude_is_absolute() {
        assert_eq!((-2.5f64).magnitude(), 2.5);
        assert_eq!((-3i32).magnitude(), 3.0);
        assert_eq!(7u8.magnitude(), 7.0);
    }
}
