//! Commonly used types, traits and operations for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_floats::prelude::*;
//!
//! let mut s = vec![1.0_f64, -2.0, 3.0, -4.0];
//! add_const(5.0, &mut s);
//!
//! let mut dst = vec![0.0; s.len()];
//! cum_prod(&mut dst, &s);
//! assert_eq!(dst, [6.0, 18.0, 144.0, 144.0]);
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{SeriesElement, ValidatedInput};

// Comparison configuration
pub use crate::utils::Tolerance;

// Contract forms
pub use crate::ops::{
    add, add_all, add_all_to, add_const, add_scaled, add_scaled_to, add_to, argmax, argmin,
    count, cum_prod, cum_prod_in_place, cum_sum, cum_sum_in_place, distance, div, div_to, dot,
    eq_len, equal, equal_approx, has_nan, max, min, mul, mul_to, norm, prod, reverse, scale,
    scale_to, span, sub, sub_to, sum,
};

// Checked forms
pub use crate::ops::{
    try_add, try_add_all, try_add_all_to, try_add_scaled, try_add_scaled_to, try_add_to,
    try_argmax, try_argmin, try_cum_prod, try_cum_sum, try_distance, try_div, try_div_to,
    try_dot, try_max, try_min, try_mul, try_mul_to, try_norm, try_scale_to, try_span, try_sub,
    try_sub_to,
};
