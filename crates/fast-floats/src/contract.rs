//! Turns precondition failures into panics at the caller's location.
//!
//! The plain forms of the vector operations (`add`, `cum_sum`, ...) treat a
//! violated precondition as a programmer error: the call aborts with the
//! error's diagnostic instead of returning it. Each plain form is
//! `#[track_caller]`, so the panic message points at the user's call site
//! and not at this module.

use std::panic::Location;

use crate::error::{Error, Result};

/// Unwraps the result of a checked operation, panicking on a violation.
#[inline]
#[track_caller]
pub(crate) fn enforce<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => violation(&err),
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn violation(err: &Error) -> ! {
    log::error!("contract violation at {}: {err}", Location::caller());
    panic!("{err}");
}
