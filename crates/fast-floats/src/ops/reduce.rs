//! Reductions of one or two sequences to a scalar.
//!
//! Reductions with an identity element (`sum`, `prod`) accept empty input.
//! The extrema (`max`, `min`, `argmax`, `argmin`) have no identity and report
//! [`Error::EmptyInput`] instead.
//!
//! # NaN Handling
//!
//! The extrema skip NaN elements, so a NaN only surfaces when every element
//! is NaN. The arithmetic reductions propagate NaN as IEEE 754 does.

use crate::contract::enforce;
use crate::error::{Error, Result};
use crate::traits::{SeriesElement, ValidatedInput};

/// Returns the sum of the elements of `s`, or zero if `s` is empty.
#[inline]
#[must_use]
pub fn sum<T: SeriesElement>(s: &[T]) -> T {
    s.iter().fold(T::zero(), |acc, &x| acc + x)
}

/// Returns the product of the elements of `s`, or one if `s` is empty.
#[inline]
#[must_use]
pub fn prod<T: SeriesElement>(s: &[T]) -> T {
    s.iter().fold(T::one(), |acc, &x| acc * x)
}

/// Returns the dot product of `a` and `b`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
pub fn try_dot<T: SeriesElement>(a: &[T], b: &[T]) -> Result<T> {
    b.validate_len(a.len(), "dot", 1)?;
    Ok(a.iter()
        .zip(b)
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Returns the dot product of `a` and `b`.
///
/// # Panics
///
/// Panics if the lengths differ.
#[track_caller]
#[must_use]
pub fn dot<T: SeriesElement>(a: &[T], b: &[T]) -> T {
    enforce(try_dot(a, b))
}

// ==================== Extrema ====================

/// Finds the first index whose value wins against every later candidate.
///
/// `better(candidate, current)` decides replacement; ties keep the earlier
/// index. NaN elements are skipped. Returns index 0 when all are NaN.
fn extremum<T: SeriesElement>(s: &[T], better: impl Fn(T, T) -> bool) -> (usize, T) {
    let mut best: Option<(usize, T)> = None;
    for (i, &x) in s.iter().enumerate() {
        if x.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if !better(x, current) => {}
            _ => best = Some((i, x)),
        }
    }
    best.unwrap_or((0, T::nan()))
}

/// Returns the largest element of `s`, ignoring NaN.
///
/// Returns NaN only if every element is NaN.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `s` is empty.
pub fn try_max<T: SeriesElement>(s: &[T]) -> Result<T> {
    s.validate_not_empty("max")?;
    Ok(extremum(s, |x, cur| x > cur).1)
}

/// Returns the largest element of `s`, ignoring NaN.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
#[must_use]
pub fn max<T: SeriesElement>(s: &[T]) -> T {
    enforce(try_max(s))
}

/// Returns the smallest element of `s`, ignoring NaN.
///
/// Returns NaN only if every element is NaN.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `s` is empty.
pub fn try_min<T: SeriesElement>(s: &[T]) -> Result<T> {
    s.validate_not_empty("min")?;
    Ok(extremum(s, |x, cur| x < cur).1)
}

/// Returns the smallest element of `s`, ignoring NaN.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
#[must_use]
pub fn min<T: SeriesElement>(s: &[T]) -> T {
    enforce(try_min(s))
}

/// Returns the index of the largest element of `s`.
///
/// Ties resolve to the lowest index. NaN elements are ignored; if every
/// element is NaN the result is 0.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `s` is empty.
///
/// # Example
///
/// ```
/// use fast_floats::ops::try_argmax;
///
/// assert_eq!(try_argmax(&[1.0_f64, 5.0, f64::NAN, 5.0]).unwrap(), 1);
/// assert!(try_argmax::<f64>(&[]).is_err());
/// ```
pub fn try_argmax<T: SeriesElement>(s: &[T]) -> Result<usize> {
    s.validate_not_empty("argmax")?;
    Ok(extremum(s, |x, cur| x > cur).0)
}

/// Returns the index of the largest element of `s`.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
#[must_use]
pub fn argmax<T: SeriesElement>(s: &[T]) -> usize {
    enforce(try_argmax(s))
}

/// Returns the index of the smallest element of `s`.
///
/// Ties resolve to the lowest index. NaN elements are ignored; if every
/// element is NaN the result is 0.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `s` is empty.
pub fn try_argmin<T: SeriesElement>(s: &[T]) -> Result<usize> {
    s.validate_not_empty("argmin")?;
    Ok(extremum(s, |x, cur| x < cur).0)
}

/// Returns the index of the smallest element of `s`.
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
#[must_use]
pub fn argmin<T: SeriesElement>(s: &[T]) -> usize {
    enforce(try_argmin(s))
}

// ==================== Norms ====================

fn validate_norm_order<T: SeriesElement>(p: T) -> Result<()> {
    if p.is_nan() || p < T::one() {
        Err(Error::InvalidNorm { p: p.widen() })
    } else {
        Ok(())
    }
}

/// L-p norm of a stream of values. `p` must already be validated.
#[allow(clippy::float_cmp)]
fn lp_norm<T: SeriesElement>(values: impl Iterator<Item = T>, p: T) -> T {
    let one = T::one();
    if p == one {
        values.fold(T::zero(), |acc, x| acc + x.abs())
    } else if p == one + one {
        values.fold(T::zero(), |acc, x| acc + x * x).sqrt()
    } else if p.is_infinite() {
        // `Float::max` discards NaN, so carry it explicitly.
        values.fold(T::zero(), |acc, x| {
            if acc.is_nan() || x.is_nan() {
                T::nan()
            } else {
                acc.max(x.abs())
            }
        })
    } else {
        values
            .fold(T::zero(), |acc, x| acc + x.abs().powf(p))
            .powf(one / p)
    }
}

/// Returns the L-`p` norm of `s`.
///
/// `p = 1` is the sum of magnitudes, `p = 2` the Euclidean length and
/// `p = +∞` the largest magnitude. The norm of an empty sequence is zero.
///
/// # Errors
///
/// Returns `Error::InvalidNorm` if `p` is NaN or below 1.
///
/// # Example
///
/// ```
/// use fast_floats::ops::try_norm;
///
/// let s = [3.0_f64, -4.0];
/// assert_eq!(try_norm(&s, 1.0).unwrap(), 7.0);
/// assert_eq!(try_norm(&s, 2.0).unwrap(), 5.0);
/// assert_eq!(try_norm(&s, f64::INFINITY).unwrap(), 4.0);
/// assert!(try_norm(&s, 0.5).is_err());
/// ```
pub fn try_norm<T: SeriesElement>(s: &[T], p: T) -> Result<T> {
    validate_norm_order(p)?;
    Ok(lp_norm(s.iter().copied(), p))
}

/// Returns the L-`p` norm of `s`.
///
/// # Panics
///
/// Panics if `p` is NaN or below 1.
#[track_caller]
#[must_use]
pub fn norm<T: SeriesElement>(s: &[T], p: T) -> T {
    enforce(try_norm(s, p))
}

/// Returns the L-`p` distance between `a` and `b`, `norm(a - b, p)`.
///
/// # Errors
///
/// - `Error::InvalidNorm` if `p` is NaN or below 1
/// - `Error::LengthMismatch` if the lengths differ
pub fn try_distance<T: SeriesElement>(a: &[T], b: &[T], p: T) -> Result<T> {
    validate_norm_order(p)?;
    b.validate_len(a.len(), "distance", 1)?;
    Ok(lp_norm(a.iter().zip(b).map(|(&x, &y)| x - y), p))
}

/// Returns the L-`p` distance between `a` and `b`.
///
/// # Panics
///
/// Panics if `p` is NaN or below 1, or if the lengths differ.
#[track_caller]
#[must_use]
pub fn distance<T: SeriesElement>(a: &[T], b: &[T], p: T) -> T {
    enforce(try_distance(a, b, p))
}

// ==================== Predicates ====================

/// Returns true if any element of `s` is NaN.
#[inline]
#[must_use]
pub fn has_nan<T: SeriesElement>(s: &[T]) -> bool {
    s.iter().any(|x| x.is_nan())
}

/// Counts the elements of `s` for which `pred` returns true.
#[inline]
pub fn count<T: SeriesElement>(s: &[T], pred: impl Fn(T) -> bool) -> usize {
    s.iter().filter(|&&x| pred(x)).count()
}
