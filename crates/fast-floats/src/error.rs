//! Error types for fast-floats.
//!
//! Every fallible operation validates its arguments before touching any
//! buffer, so an `Err` always means the caller's buffers are unchanged.
//! The contract forms of the operations (the ones without a `try_` prefix)
//! turn these errors into a panic at the call site.

use thiserror::Error;

/// The main error type for fast-floats operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two sequences that must be combined elementwise have different lengths.
    ///
    /// Operand positions count the arguments after the destination, from 1.
    #[error(
        "length mismatch in {operation}: operand {operand} has {actual} elements, expected {expected}"
    )]
    LengthMismatch {
        /// Name of the operation that detected the mismatch.
        operation: &'static str,
        /// Length every operand was required to have.
        expected: usize,
        /// Length of the offending operand.
        actual: usize,
        /// Position of the offending operand in the argument list.
        operand: usize,
    },

    /// A variadic operation received fewer sequences than it combines.
    #[error("too few operands for {operation}: required {required} sequences, got {actual}")]
    TooFewOperands {
        /// Name of the operation.
        operation: &'static str,
        /// Minimum number of sequences, counting the destination.
        required: usize,
        /// Number of sequences provided, counting the destination.
        actual: usize,
    },

    /// A reduction without an identity element was given an empty sequence.
    #[error("empty input: {operation} requires at least one element")]
    EmptyInput {
        /// Name of the operation.
        operation: &'static str,
    },

    /// The destination is too short for the requested fill.
    #[error("too few elements for {operation}: required {required}, got {actual}")]
    TooFewElements {
        /// Name of the operation.
        operation: &'static str,
        /// Minimum length required.
        required: usize,
        /// Length provided.
        actual: usize,
    },

    /// The order of a vector norm is below 1 or NaN.
    #[error("invalid norm order {p}: order must be at least 1")]
    InvalidNorm {
        /// The rejected order, widened to `f64`.
        p: f64,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This occurs when a `usize` count has to be represented in the
    /// element type (e.g. the number of steps in [`span`](crate::ops::span)).
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the fast-floats Error type.
pub type Result<T> = std::result::Result<T, Error>;
