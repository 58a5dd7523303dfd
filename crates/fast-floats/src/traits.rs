//! Core traits for fast-floats numeric operations.
//!
//! The primary trait is [`SeriesElement`], which abstracts over `f32` and
//! `f64` so every operation is written once. [`ValidatedInput`] and the
//! standalone validators below implement the length contract shared by all
//! pairwise operations.
//!
//! # Example
//!
//! ```
//! use fast_floats::traits::{validate_operands, SeriesElement};
//!
//! fn weighted_sum<T: SeriesElement>(
//!     values: &[T],
//!     weights: &[T],
//! ) -> fast_floats::Result<T> {
//!     validate_operands("weighted_sum", values.len(), &[weights], 1)?;
//!     Ok(values
//!         .iter()
//!         .zip(weights)
//!         .fold(T::zero(), |acc, (&v, &w)| acc + v * w))
//! }
//!
//! let result = weighted_sum(&[1.0_f64, 2.0, 3.0], &[0.5, 0.25, 0.25]).unwrap();
//! assert!((result - 1.75).abs() < 1e-10);
//! assert!(weighted_sum(&[1.0_f64, 2.0], &[1.0]).is_err());
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements of a sequence.
///
/// This trait extends `num_traits::Float` with the checked conversions the
/// library needs. It is implemented for every type satisfying the bounds,
/// which in practice means `f32` and `f64`.
///
/// # Example
///
/// ```
/// use fast_floats::traits::SeriesElement;
///
/// fn total<T: SeriesElement>(data: &[T]) -> T {
///     data.iter().fold(T::zero(), |acc, &x| acc + x)
/// }
///
/// assert!((total(&[1.0_f64, 2.0, 4.0]) - 7.0).abs() < 1e-10);
/// assert!((total(&[1.0_f32, 2.0, 4.0]) - 7.0).abs() < 1e-6);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Widens the element to `f64`, mapping unrepresentable values to NaN.
    #[inline]
    #[must_use]
    fn widen(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Length checks against the contract of pairwise operations.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has exactly `expected` elements.
    ///
    /// `operand` is the position of this series in the caller's argument
    /// list and is reported in the error.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the lengths differ.
    #[inline]
    fn validate_len(&self, expected: usize, operation: &'static str, operand: usize) -> Result<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                operation,
                expected,
                actual: self.len(),
                operand,
            })
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self, operation: &'static str) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput { operation })
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that every operand has exactly `expected` elements.
///
/// Operands are numbered from `first_operand` upward in the reported error,
/// so callers pass the position of `operands[0]` in their own argument list.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` for the first operand whose length differs.
#[inline]
pub fn validate_operands<T: SeriesElement, S: AsRef<[T]>>(
    operation: &'static str,
    expected: usize,
    operands: &[S],
    first_operand: usize,
) -> Result<()> {
    operands
        .iter()
        .enumerate()
        .try_for_each(|(offset, operand)| {
            operand
                .as_ref()
                .validate_len(expected, operation, first_operand + offset)
        })
}

/// Validates that a variadic operation received at least `required`
/// sequences in total.
///
/// # Errors
///
/// Returns `Error::TooFewOperands` if `actual < required`.
#[inline]
pub const fn validate_arity(operation: &'static str, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        Err(Error::TooFewOperands {
            operation,
            required,
            actual,
        })
    } else {
        Ok(())
    }
}
