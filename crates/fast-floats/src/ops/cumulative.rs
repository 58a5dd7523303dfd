//! Cumulative scans.
//!
//! A cumulative scan is a single left-to-right pass that carries a running
//! accumulator and writes one output per input position. The first output
//! is the first input, unchanged.
//!
//! # Formula
//!
//! ```text
//! cum_sum:  dst[0] = s[0],  dst[i] = dst[i-1] + s[i]
//! cum_prod: dst[0] = s[0],  dst[i] = dst[i-1] * s[i]
//! ```

use crate::contract::enforce;
use crate::error::Result;
use crate::traits::{SeriesElement, ValidatedInput};

#[inline]
fn scan_into<T: SeriesElement>(dst: &mut [T], s: &[T], step: impl Fn(T, T) -> T) {
    let Some((&first, rest)) = s.split_first() else {
        return;
    };
    let mut acc = first;
    dst[0] = acc;
    for (d, &x) in dst[1..].iter_mut().zip(rest) {
        acc = step(acc, x);
        *d = acc;
    }
}

#[inline]
fn scan_in_place<T: SeriesElement>(s: &mut [T], step: impl Fn(T, T) -> T) {
    for i in 1..s.len() {
        s[i] = step(s[i - 1], s[i]);
    }
}

/// Writes the cumulative sum of `s` into `dst`.
///
/// `s` is not modified. Empty sequences are a no-op.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `s` differs in length from `dst`.
pub fn try_cum_sum<T: SeriesElement>(dst: &mut [T], s: &[T]) -> Result<()> {
    s.validate_len(dst.len(), "cum_sum", 1)?;
    scan_into(dst, s, |acc, x| acc + x);
    Ok(())
}

/// Writes the cumulative sum of `s` into `dst`.
///
/// # Panics
///
/// Panics if `s` differs in length from `dst`.
///
/// # Example
///
/// ```
/// use fast_floats::ops::cum_sum;
///
/// let s = [1.0_f64, -2.0, 3.0, -4.0];
/// let mut dst = [0.0; 4];
/// cum_sum(&mut dst, &s);
/// assert_eq!(dst, [1.0, -1.0, 2.0, -2.0]);
/// ```
#[track_caller]
pub fn cum_sum<T: SeriesElement>(dst: &mut [T], s: &[T]) {
    enforce(try_cum_sum(dst, s));
}

/// Replaces `s` with its cumulative sum.
pub fn cum_sum_in_place<T: SeriesElement>(s: &mut [T]) {
    scan_in_place(s, |acc, x| acc + x);
}

/// Writes the cumulative product of `s` into `dst`.
///
/// `s` is not modified. Empty sequences are a no-op.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `s` differs in length from `dst`.
pub fn try_cum_prod<T: SeriesElement>(dst: &mut [T], s: &[T]) -> Result<()> {
    s.validate_len(dst.len(), "cum_prod", 1)?;
    scan_into(dst, s, |acc, x| acc * x);
    Ok(())
}

/// Writes the cumulative product of `s` into `dst`.
///
/// # Panics
///
/// Panics if `s` differs in length from `dst`.
///
/// # Example
///
/// ```
/// use fast_floats::ops::cum_prod;
///
/// let s = [1.0_f64, -2.0, 3.0, -4.0];
/// let mut dst = [0.0; 4];
/// cum_prod(&mut dst, &s);
/// assert_eq!(dst, [1.0, -2.0, -6.0, 24.0]);
/// ```
#[track_caller]
pub fn cum_prod<T: SeriesElement>(dst: &mut [T], s: &[T]) {
    enforce(try_cum_prod(dst, s));
}

/// Replaces `s` with its cumulative product.
pub fn cum_prod_in_place<T: SeriesElement>(s: &mut [T]) {
    scan_in_place(s, |acc, x| acc * x);
}
