//! Elementwise arithmetic over equal-length sequences.
//!
//! Every binary operation comes in two calling conventions:
//!
//! - **In-place** `op(dst, s)`: `dst` is the first operand and receives the
//!   result, `dst[i] = dst[i] ∘ s[i]`.
//! - **Out-of-place** `op_to(dst, a, b)`: `dst[i] = a[i] ∘ b[i]`; `a` and `b`
//!   are untouched and the previous contents of `dst` are ignored.
//!
//! All operands must have the length of `dst`. The `try_` forms report a
//! mismatch as [`Error::LengthMismatch`] before writing anything. The plain
//! forms panic with the same diagnostic.
//!
//! # Example
//!
//! ```
//! use fast_floats::ops::{add_all, add_all_to};
//!
//! let mut s1 = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let s2 = vec![5.0, 6.0, 7.0, 8.0];
//! let s3 = vec![1.0, 1.0, 1.0, 1.0];
//!
//! let mut dst = vec![0.0; 4];
//! add_all_to(&mut dst, &[&s1, &s2, &s3]);
//! assert_eq!(dst, [7.0, 9.0, 11.0, 13.0]);
//!
//! add_all(&mut s1, &[&s2, &s3]);
//! assert_eq!(s1, [7.0, 9.0, 11.0, 13.0]);
//! ```

use crate::contract::enforce;
use crate::error::{Error, Result};
use crate::traits::{validate_arity, validate_operands, SeriesElement, ValidatedInput};

#[inline]
fn zip_assign<T: SeriesElement>(dst: &mut [T], s: &[T], f: impl Fn(T, T) -> T) {
    for (d, &x) in dst.iter_mut().zip(s) {
        *d = f(*d, x);
    }
}

#[inline]
fn zip_write<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T], f: impl Fn(T, T) -> T) {
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = f(x, y);
    }
}

fn checked_assign<T: SeriesElement>(
    operation: &'static str,
    dst: &mut [T],
    s: &[T],
    f: impl Fn(T, T) -> T,
) -> Result<()> {
    s.validate_len(dst.len(), operation, 1)?;
    zip_assign(dst, s, f);
    Ok(())
}

fn checked_write<T: SeriesElement>(
    operation: &'static str,
    dst: &mut [T],
    a: &[T],
    b: &[T],
    f: impl Fn(T, T) -> T,
) -> Result<()> {
    validate_operands(operation, dst.len(), &[a, b], 1)?;
    zip_write(dst, a, b, f);
    Ok(())
}

// ==================== Add ====================

/// Adds every source sequence into `dst`, in argument order.
///
/// `dst[i] = dst[i] + sources[0][i] + sources[1][i] + ...`
///
/// The destination counts as the first operand, so at least one source is
/// required.
///
/// # Errors
///
/// - `Error::TooFewOperands` if `sources` is empty
/// - `Error::LengthMismatch` if any source differs in length from `dst`
pub fn try_add_all<T: SeriesElement, S: AsRef<[T]>>(dst: &mut [T], sources: &[S]) -> Result<()> {
    validate_arity("add", 2, sources.len() + 1)?;
    validate_operands("add", dst.len(), sources, 1)?;
    for s in sources {
        zip_assign(dst, s.as_ref(), |d, x| d + x);
    }
    Ok(())
}

/// Adds every source sequence into `dst`, panicking on a length mismatch.
///
/// See [`try_add_all`].
///
/// # Panics
///
/// Panics if `sources` is empty or any source differs in length from `dst`.
#[track_caller]
pub fn add_all<T: SeriesElement, S: AsRef<[T]>>(dst: &mut [T], sources: &[S]) {
    enforce(try_add_all(dst, sources));
}

/// Adds `s` into `dst` elementwise.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
pub fn try_add<T: SeriesElement>(dst: &mut [T], s: &[T]) -> Result<()> {
    checked_assign("add", dst, s, |d, x| d + x)
}

/// Adds `s` into `dst` elementwise.
///
/// # Panics
///
/// Panics if the lengths differ.
#[track_caller]
pub fn add<T: SeriesElement>(dst: &mut [T], s: &[T]) {
    enforce(try_add(dst, s));
}

/// Writes the elementwise sum of all sources into `dst`.
///
/// `dst[i] = sources[0][i] + sources[1][i] + ...`, summed in argument order.
/// The previous contents of `dst` are overwritten. A single source is
/// copied.
///
/// # Errors
///
/// - `Error::TooFewOperands` if `sources` is empty
/// - `Error::LengthMismatch` if any source differs in length from `dst`
///
/// # Example
///
/// ```
/// use fast_floats::ops::try_add_all_to;
///
/// // Columnwise sum of a set of rows.
/// let rows: Vec<Vec<f64>> = (0..5).map(|_| vec![0.0, 1.0, 2.0]).collect();
///
/// let mut result = vec![0.0; 3];
/// try_add_all_to(&mut result, &rows).unwrap();
/// assert_eq!(result, [0.0, 5.0, 10.0]);
/// ```
pub fn try_add_all_to<T: SeriesElement, S: AsRef<[T]>>(dst: &mut [T], sources: &[S]) -> Result<()> {
    let Some((first, rest)) = sources.split_first() else {
        return Err(Error::TooFewOperands {
            operation: "add_to",
            required: 2,
            actual: 1,
        });
    };
    validate_operands("add_to", dst.len(), sources, 1)?;

    dst.copy_from_slice(first.as_ref());
    for s in rest {
        zip_assign(dst, s.as_ref(), |d, x| d + x);
    }
    Ok(())
}

/// Writes the elementwise sum of all sources into `dst`.
///
/// See [`try_add_all_to`].
///
/// # Panics
///
/// Panics if `sources` is empty or any source differs in length from `dst`.
#[track_caller]
pub fn add_all_to<T: SeriesElement, S: AsRef<[T]>>(dst: &mut [T], sources: &[S]) {
    enforce(try_add_all_to(dst, sources));
}

/// Writes `a + b` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `a` or `b` differs in length from `dst`.
pub fn try_add_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    checked_write("add_to", dst, a, b, |x, y| x + y)
}

/// Writes `a + b` into `dst`.
///
/// # Panics
///
/// Panics if `a` or `b` differs in length from `dst`.
#[track_caller]
pub fn add_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) {
    enforce(try_add_to(dst, a, b));
}

/// Adds the constant `c` to every element of `s`.
///
/// # Example
///
/// ```
/// use fast_floats::ops::add_const;
///
/// let mut s = [1.0_f64, -2.0, 3.0, -4.0];
/// add_const(5.0, &mut s);
/// assert_eq!(s, [6.0, 3.0, 8.0, 1.0]);
/// ```
pub fn add_const<T: SeriesElement>(c: T, s: &mut [T]) {
    for x in s {
        *x = *x + c;
    }
}

// ==================== Sub / Mul / Div ====================

/// Subtracts `s` from `dst` elementwise.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
pub fn try_sub<T: SeriesElement>(dst: &mut [T], s: &[T]) -> Result<()> {
    checked_assign("sub", dst, s, |d, x| d - x)
}

/// Subtracts `s` from `dst` elementwise.
///
/// # Panics
///
/// Panics if the lengths differ.
#[track_caller]
pub fn sub<T: SeriesElement>(dst: &mut [T], s: &[T]) {
    enforce(try_sub(dst, s));
}

/// Writes `a - b` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `a` or `b` differs in length from `dst`.
pub fn try_sub_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    checked_write("sub_to", dst, a, b, |x, y| x - y)
}

/// Writes `a - b` into `dst`.
///
/// # Panics
///
/// Panics if `a` or `b` differs in length from `dst`.
#[track_caller]
pub fn sub_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) {
    enforce(try_sub_to(dst, a, b));
}

/// Multiplies `dst` by `s` elementwise.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
pub fn try_mul<T: SeriesElement>(dst: &mut [T], s: &[T]) -> Result<()> {
    checked_assign("mul", dst, s, |d, x| d * x)
}

/// Multiplies `dst` by `s` elementwise.
///
/// # Panics
///
/// Panics if the lengths differ.
#[track_caller]
pub fn mul<T: SeriesElement>(dst: &mut [T], s: &[T]) {
    enforce(try_mul(dst, s));
}

/// Writes `a * b` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `a` or `b` differs in length from `dst`.
pub fn try_mul_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    checked_write("mul_to", dst, a, b, |x, y| x * y)
}

/// Writes `a * b` into `dst`.
///
/// # Panics
///
/// Panics if `a` or `b` differs in length from `dst`.
#[track_caller]
pub fn mul_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) {
    enforce(try_mul_to(dst, a, b));
}

/// Divides `dst` by `s` elementwise.
///
/// Division follows IEEE 754: dividing by zero yields an infinity or NaN
/// and is not an error.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if the lengths differ.
pub fn try_div<T: SeriesElement>(dst: &mut [T], s: &[T]) -> Result<()> {
    checked_assign("div", dst, s, |d, x| d / x)
}

/// Divides `dst` by `s` elementwise.
///
/// # Panics
///
/// Panics if the lengths differ.
#[track_caller]
pub fn div<T: SeriesElement>(dst: &mut [T], s: &[T]) {
    enforce(try_div(dst, s));
}

/// Writes `a / b` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `a` or `b` differs in length from `dst`.
pub fn try_div_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) -> Result<()> {
    checked_write("div_to", dst, a, b, |x, y| x / y)
}

/// Writes `a / b` into `dst`.
///
/// # Panics
///
/// Panics if `a` or `b` differs in length from `dst`.
#[track_caller]
pub fn div_to<T: SeriesElement>(dst: &mut [T], a: &[T], b: &[T]) {
    enforce(try_div_to(dst, a, b));
}

// ==================== Scaling ====================

/// Multiplies every element of `s` by `c`.
pub fn scale<T: SeriesElement>(c: T, s: &mut [T]) {
    for x in s {
        *x = c * *x;
    }
}

/// Writes `c * s` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `s` differs in length from `dst`.
pub fn try_scale_to<T: SeriesElement>(dst: &mut [T], c: T, s: &[T]) -> Result<()> {
    s.validate_len(dst.len(), "scale_to", 2)?;
    for (d, &x) in dst.iter_mut().zip(s) {
        *d = c * x;
    }
    Ok(())
}

/// Writes `c * s` into `dst`.
///
/// # Panics
///
/// Panics if `s` differs in length from `dst`.
#[track_caller]
pub fn scale_to<T: SeriesElement>(dst: &mut [T], c: T, s: &[T]) {
    enforce(try_scale_to(dst, c, s));
}

/// Adds `alpha * s` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `s` differs in length from `dst`.
pub fn try_add_scaled<T: SeriesElement>(dst: &mut [T], alpha: T, s: &[T]) -> Result<()> {
    s.validate_len(dst.len(), "add_scaled", 2)?;
    zip_assign(dst, s, |d, x| d + alpha * x);
    Ok(())
}

/// Adds `alpha * s` into `dst`.
///
/// # Panics
///
/// Panics if `s` differs in length from `dst`.
#[track_caller]
pub fn add_scaled<T: SeriesElement>(dst: &mut [T], alpha: T, s: &[T]) {
    enforce(try_add_scaled(dst, alpha, s));
}

/// Writes `y + alpha * s` into `dst`.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `y` or `s` differs in length from `dst`.
pub fn try_add_scaled_to<T: SeriesElement>(
    dst: &mut [T],
    y: &[T],
    alpha: T,
    s: &[T],
) -> Result<()> {
    y.validate_len(dst.len(), "add_scaled_to", 1)?;
    s.validate_len(dst.len(), "add_scaled_to", 3)?;
    zip_write(dst, y, s, |yi, si| yi + alpha * si);
    Ok(())
}

/// Writes `y + alpha * s` into `dst`.
///
/// # Panics
///
/// Panics if `y` or `s` differs in length from `dst`.
#[track_caller]
pub fn add_scaled_to<T: SeriesElement>(dst: &mut [T], y: &[T], alpha: T, s: &[T]) {
    enforce(try_add_scaled_to(dst, y, alpha, s));
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_add_all_in_place_three_operands() {
        let mut s1 = vec![1.0_f64, 2.0, 3.0, 4.0];
        let s2 = vec![5.0_f64, 6.0, 7.0, 8.0];
        let s3 = vec![1.0_f64, 1.0, 1.0, 1.0];

        add_all(&mut s1, &[&s2, &s3]);

        assert_eq!(s1, vec![7.0, 9.0, 11.0, 13.0]);
        assert_eq!(s2, vec![5.0, 6.0, 7.0, 8.0]);
        assert_eq!(s3, vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_add_all_to_leaves_sources() {
        let s1 = vec![1.0_f64, 2.0, 3.0, 4.0];
        let s2 = vec![5.0_f64, 6.0, 7.0, 8.0];
        let s3 = vec![1.0_f64, 1.0, 1.0, 1.0];
        let mut dst = vec![f64::NAN; s1.len()];

        add_all_to(&mut dst, &[&s1, &s2, &s3]);

        assert_eq!(dst, vec![7.0, 9.0, 11.0, 13.0]);
        assert_eq!(s1, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_add_all_to_single_source_copies() {
        let s = [3.0_f64, -1.0];
        let mut dst = [0.0_f64; 2];
        add_all_to(&mut dst, &[&s]);
        assert_eq!(dst, s);
    }

    #[test]
    fn test_add_all_requires_a_source() {
        let mut dst = [1.0_f64, 2.0];
        let result = try_add_all::<f64, &[f64]>(&mut dst, &[]);
        assert!(matches!(
            result,
            Err(Error::TooFewOperands {
                required: 2,
                actual: 1,
                ..
            })
        ));
        assert_eq!(dst, [1.0, 2.0]);
    }

    #[test]
    fn test_add_all_to_requires_a_source() {
        let mut dst = [1.0_f64, 2.0];
        let result = try_add_all_to::<f64, &[f64]>(&mut dst, &[]);
        assert!(matches!(result, Err(Error::TooFewOperands { .. })));
    }

    #[test]
    fn test_add_all_mismatch_leaves_dst_untouched() {
        let mut dst = vec![1.0_f64, 2.0, 3.0];
        let ok = vec![1.0_f64, 1.0, 1.0];
        let bad = vec![1.0_f64, 1.0];

        let result = try_add_all(&mut dst, &[&ok, &bad]);

        assert_eq!(
            result,
            Err(Error::LengthMismatch {
                operation: "add",
                expected: 3,
                actual: 2,
                operand: 2,
            })
        );
        assert_eq!(dst, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "length mismatch in add")]
    fn test_add_panics_on_mismatch() {
        let mut a = vec![1.0_f64, 2.0, 3.0];
        let b = vec![5.0_f64, 6.0, 7.0, 8.0];
        add(&mut a, &b);
    }

    #[test]
    #[should_panic(expected = "too few operands for add_to")]
    fn test_add_all_to_panics_without_sources() {
        let mut dst = vec![0.0_f64; 3];
        add_all_to::<f64, Vec<f64>>(&mut dst, &[]);
    }

    #[test]
    fn test_add_to_pair() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [0.5_f64, 0.5, -3.0];
        let mut dst = [0.0_f64; 3];
        add_to(&mut dst, &a, &b);
        assert_eq!(dst, [1.5, 2.5, 0.0]);
    }

    #[test]
    fn test_add_to_mismatch_reports_operand() {
        let a = [1.0_f64, 2.0, 3.0];
        let b = [1.0_f64];
        let mut dst = [0.0_f64; 3];
        let err = try_add_to(&mut dst, &a, &b).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { operand: 2, .. }));
        assert_eq!(dst, [0.0; 3]);
    }

    #[test]
    fn test_add_to_dst_mismatch() {
        let a = [1.0_f64, 2.0];
        let b = [1.0_f64, 2.0];
        let mut dst = [0.0_f64; 3];
        let err = try_add_to(&mut dst, &a, &b).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 3,
                actual: 2,
                operand: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_add_empty_sequences() {
        let mut dst: [f64; 0] = [];
        let s: [f64; 0] = [];
        add(&mut dst, &s);
        add_all_to(&mut dst, &[&s, &s]);
    }

    #[test]
    fn test_add_const() {
        let mut s = [1.0_f64, -2.0, 3.0, -4.0];
        add_const(5.0, &mut s);
        assert_eq!(s, [6.0, 3.0, 8.0, 1.0]);

        add_const(-5.0, &mut s);
        assert_eq!(s, [1.0, -2.0, 3.0, -4.0]);
    }

    #[test]
    fn test_add_const_f32() {
        let mut s = [0.5_f32, 1.5];
        add_const(0.25, &mut s);
        assert_eq!(s, [0.75, 1.75]);
    }

    #[test]
    fn test_sub() {
        let mut a = [5.0_f64, 6.0, 7.0];
        sub(&mut a, &[1.0, 2.0, 3.0]);
        assert_eq!(a, [4.0, 4.0, 4.0]);

        let mut dst = [0.0_f64; 2];
        sub_to(&mut dst, &[1.0, 1.0], &[2.0, -2.0]);
        assert_eq!(dst, [-1.0, 3.0]);
    }

    #[test]
    fn test_mul() {
        let mut a = [2.0_f64, -3.0, 0.5];
        mul(&mut a, &[4.0, 2.0, 2.0]);
        assert_eq!(a, [8.0, -6.0, 1.0]);

        let mut dst = [0.0_f64; 2];
        mul_to(&mut dst, &[3.0, 4.0], &[3.0, 0.25]);
        assert_eq!(dst, [9.0, 1.0]);
    }

    #[test]
    fn test_div() {
        let mut a = [8.0_f64, 1.0, 0.0];
        div(&mut a, &[2.0, 0.0, 0.0]);
        assert_eq!(a[0], 4.0);
        assert!(a[1].is_infinite() && a[1] > 0.0);
        assert!(a[2].is_nan());

        let mut dst = [0.0_f64; 2];
        div_to(&mut dst, &[1.0, 9.0], &[4.0, 3.0]);
        assert_eq!(dst, [0.25, 3.0]);
    }

    #[test]
    fn test_binary_mismatch_errors() {
        let mut a = [1.0_f64, 2.0];
        let b = [1.0_f64];
        assert!(matches!(try_sub(&mut a, &b), Err(Error::LengthMismatch { operation: "sub", .. })));
        assert!(matches!(try_mul(&mut a, &b), Err(Error::LengthMismatch { operation: "mul", .. })));
        assert!(matches!(try_div(&mut a, &b), Err(Error::LengthMismatch { operation: "div", .. })));
        assert_eq!(a, [1.0, 2.0]);
    }

    #[test]
    fn test_scale() {
        let mut s = [1.0_f64, -2.0, 0.0];
        scale(3.0, &mut s);
        assert_eq!(s, [3.0, -6.0, 0.0]);

        let mut dst = [0.0_f64; 3];
        scale_to(&mut dst, 0.5, &s);
        assert_eq!(dst, [1.5, -3.0, 0.0]);
    }

    #[test]
    fn test_scale_to_mismatch() {
        let mut dst = [0.0_f64; 2];
        let err = try_scale_to(&mut dst, 2.0, &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { operand: 2, actual: 3, .. }));
    }

    #[test]
    fn test_add_scaled() {
        let mut dst = [1.0_f64, 1.0, 1.0];
        add_scaled(&mut dst, 2.0, &[1.0, 2.0, 3.0]);
        assert_eq!(dst, [3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_add_scaled_to() {
        let y = [1.0_f64, 2.0];
        let s = [10.0_f64, 20.0];
        let mut dst = [0.0_f64; 2];
        add_scaled_to(&mut dst, &y, -0.5, &s);
        assert_eq!(dst, [-4.0, -8.0]);
        assert_eq!(y, [1.0, 2.0]);
    }

    #[test]
    fn test_add_scaled_to_mismatch() {
        let mut dst = [0.0_f64; 2];
        let err = try_add_scaled_to(&mut dst, &[1.0, 2.0], 1.0, &[1.0]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { operand: 3, .. }));
    }
}
