//! Floating-point comparison configuration.
//!
//! [`Tolerance`] is the configuration consumed by
//! [`equal_approx`](crate::ops::equal_approx).
//!
//! # Example
//!
//! ```
//! use fast_floats::utils::Tolerance;
//!
//! let a = 1.0_f64 / 3.0;
//! let b = 0.333333333333333;
//! assert!(Tolerance::default().accepts(a, b));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Absolute and relative bounds for approximate comparison.
///
/// Two values are accepted when they are exactly equal, or when their
/// difference is within `absolute`, or when it is within `relative` times
/// the larger magnitude. NaN is never accepted.
///
/// # Example
///
/// ```
/// use fast_floats::utils::Tolerance;
///
/// let tol = Tolerance::new().absolute(1e-3).relative(0.0);
/// assert!(tol.accepts(1.0_f64, 1.0005));
/// assert!(!tol.accepts(1.0_f64, 1.01));
/// assert!(!tol.accepts(f64::NAN, f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    absolute: f64,
    relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new()
    }
}

impl Tolerance {
    /// Creates a tolerance of [`EPSILON`] absolute and [`EPSILON`] relative.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            absolute: EPSILON,
            relative: EPSILON,
        }
    }

    /// Sets the absolute bound.
    #[must_use]
    pub const fn absolute(mut self, absolute: f64) -> Self {
        self.absolute = absolute;
        self
    }

    /// Sets the relative bound.
    #[must_use]
    pub const fn relative(mut self, relative: f64) -> Self {
        self.relative = relative;
        self
    }

    /// Returns the absolute bound.
    #[must_use]
    pub const fn absolute_bound(&self) -> f64 {
        self.absolute
    }

    /// Returns the relative bound.
    #[must_use]
    pub const fn relative_bound(&self) -> f64 {
        self.relative
    }

    /// Returns true if `a` and `b` are equal within this tolerance.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn accepts<T: SeriesElement>(&self, a: T, b: T) -> bool {
        let (a, b) = (a.widen(), b.widen());
        // Matching infinities have a NaN difference.
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        if !diff.is_finite() {
            return false;
        }
        if diff <= self.absolute {
            return true;
        }
        diff <= self.relative * a.abs().max(b.abs())
    }
}
