//! Filling and reordering a destination in place.

use crate::contract::enforce;
use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Fills `dst` with evenly spaced values from `lo` to `hi` inclusive.
///
/// Both endpoints are written exactly; interior points are
/// `lo + i * (hi - lo) / (n - 1)`.
///
/// # Errors
///
/// - `Error::TooFewElements` if `dst` has fewer than two elements
/// - `Error::NumericConversion` if the step count is not representable
///
/// # Example
///
/// ```
/// use fast_floats::ops::try_span;
///
/// let mut dst = [0.0_f64; 5];
/// try_span(&mut dst, 0.0, 1.0).unwrap();
/// assert_eq!(dst, [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn try_span<T: SeriesElement>(dst: &mut [T], lo: T, hi: T) -> Result<()> {
    let n = dst.len();
    if n < 2 {
        return Err(Error::TooFewElements {
            operation: "span",
            required: 2,
            actual: n,
        });
    }

    let step = (hi - lo) / T::from_usize(n - 1)?;
    let mut k = T::zero();
    for d in dst.iter_mut() {
        *d = lo + k * step;
        k = k + T::one();
    }
    dst[n - 1] = hi;
    Ok(())
}

/// Fills `dst` with evenly spaced values from `lo` to `hi` inclusive.
///
/// # Panics
///
/// Panics if `dst` has fewer than two elements.
#[track_caller]
pub fn span<T: SeriesElement>(dst: &mut [T], lo: T, hi: T) {
    enforce(try_span(dst, lo, hi));
}

/// Reverses the order of the elements of `s`.
pub fn reverse<T: SeriesElement>(s: &mut [T]) {
    s.reverse();
}
