//! Vector operations over float slices.
//!
//! # Overview
//!
//! All operations in this module share the following properties:
//!
//! - **Generic**: work with both `f32` and `f64` via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Allocation-free**: results go into a caller-supplied buffer, which is
//!   never resized
//! - **Single pass**: O(n) over the inputs, with no intermediate buffers
//! - **All or nothing**: preconditions are checked before any write
//!
//! # Calling Conventions
//!
//! | Form | Shape | Meaning |
//! |------|-------|---------|
//! | in-place | `op(dst, s)` | `dst` is the first operand and the result |
//! | out-of-place | `op_to(dst, a, b)` | `dst` receives the result; sources are read-only |
//! | variadic | `add_all(dst, &[..])`, `add_all_to(dst, &[..])` | any number of sources |
//!
//! # Contract and Checked Forms
//!
//! Each fallible operation has a `try_` form that returns
//! [`Result`](crate::Result) and a plain form that panics at the call site
//! on a violated precondition. Length mismatches are programmer errors, so
//! the plain form is the usual choice. Predicates such as [`eq_len`] never
//! fail.
//!
//! # Operation Categories
//!
//! ## Elementwise
//!
//! - [`add`], [`add_to`], [`add_all`], [`add_all_to`], [`add_const`]
//! - [`sub`], [`sub_to`], [`mul`], [`mul_to`], [`div`], [`div_to`]
//! - [`scale`], [`scale_to`], [`add_scaled`], [`add_scaled_to`]
//!
//! ## Cumulative Scans
//!
//! - [`cum_sum`], [`cum_sum_in_place`], [`cum_prod`], [`cum_prod_in_place`]
//!
//! ## Reductions
//!
//! - [`sum`], [`prod`], [`dot`], [`norm`], [`distance`]
//! - [`max`], [`min`], [`argmax`], [`argmin`], [`has_nan`], [`count`]
//!
//! ## Comparisons
//!
//! - [`eq_len`], [`equal`], [`equal_approx`]
//!
//! ## Generation
//!
//! - [`span`], [`reverse`]

pub mod compare;
pub mod cumulative;
pub mod elementwise;
pub mod generate;
pub mod reduce;

pub use compare::{eq_len, equal, equal_approx};
pub use cumulative::{
    cum_prod, cum_prod_in_place, cum_sum, cum_sum_in_place, try_cum_prod, try_cum_sum,
};
pub use elementwise::{
    add, add_all, add_all_to, add_const, add_scaled, add_scaled_to, add_to, div, div_to, mul,
    mul_to, scale, scale_to, sub, sub_to, try_add, try_add_all, try_add_all_to, try_add_scaled,
    try_add_scaled_to, try_add_to, try_div, try_div_to, try_mul, try_mul_to, try_scale_to,
    try_sub, try_sub_to,
};
pub use generate::{reverse, span, try_span};
pub use reduce::{
    argmax, argmin, count, distance, dot, has_nan, max, min, norm, prod, sum, try_argmax,
    try_argmin, try_distance, try_dot, try_max, try_min, try_norm,
};
