//! Per-array configuration of the write boundary

/// Tolerance under which a stored value counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Whether writes validate coordinates against the shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundsCheck {
    /// Coordinates are stored as given, even outside the shape.
    #[default]
    Lenient,
    /// `add_entry`/`set_entry` reject components outside `[0, shape[d])`.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    pub bounds: BoundsCheck,
    /// Used by duplicate resolution when it compacts the array.
    pub tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bounds: BoundsCheck::Lenient,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Options {
    #[must_use]
    pub const fn with_bounds(mut self, bounds: BoundsCheck) -> Self {
        self.bounds = bounds;
        self
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            bounds: BoundsCheck::Strict,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}
