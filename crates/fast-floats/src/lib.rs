//! fast-floats: allocation-free vector operations over float slices
//!
//! This crate provides elementwise arithmetic, cumulative scans, reductions
//! and comparisons over `f32`/`f64` slices. Every operation writes into a
//! buffer the caller supplies, so the crate can be called from tight loops
//! without touching the allocator.
//!
//! # Features
//!
//! - **Zero allocation**: results go into caller-owned buffers
//! - **Generics**: works with both `f32` and `f64` data types
//! - **Strict lengths**: mismatched operands are rejected, never truncated
//!
//! # Quick Start
//!
//! ```
//! use fast_floats::prelude::*;
//!
//! let s1 = vec![1.0_f64, 2.0, 3.0, 4.0];
//! let s2 = vec![5.0, 6.0, 7.0, 8.0];
//! let s3 = vec![1.0, 1.0, 1.0, 1.0];
//!
//! let mut dst = vec![0.0; s1.len()];
//! add_all_to(&mut dst, &[&s1, &s2, &s3]);
//! assert_eq!(dst, [7.0, 9.0, 11.0, 13.0]);
//!
//! let mut running = vec![0.0; dst.len()];
//! cum_sum(&mut running, &dst);
//! assert_eq!(running, [7.0, 16.0, 27.0, 40.0]);
//! ```
//!
//! # Error Handling
//!
//! A length mismatch is a programmer error. The plain operations panic at
//! the call site with a diagnostic naming the operation and both lengths.
//! The `try_` forms return [`Result<T, Error>`] instead and leave every
//! buffer untouched on failure:
//!
//! ```
//! use fast_floats::prelude::*;
//!
//! let mut a = vec![1.0_f64, 2.0, 3.0];
//! let b = vec![5.0, 6.0, 7.0, 8.0];
//!
//! let result = try_add(&mut a, &b);
//! assert!(matches!(result, Err(Error::LengthMismatch { .. })));
//! assert_eq!(a, [1.0, 2.0, 3.0]);
//! ```
//!
//! Violations are also reported through the [`log`] facade at error level
//! before the panic, for hosts that capture logs.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

mod contract;
pub mod error;
pub mod ops;
pub mod prelude;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{Tolerance, EPSILON};
