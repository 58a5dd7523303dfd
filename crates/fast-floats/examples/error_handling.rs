//! Error Handling Examples
//!
//! The plain operations panic on a length mismatch. Each fallible one has a
//! `try_` twin that returns the error instead and leaves every buffer as it
//! was.
//!
//! Run with: `cargo run --example error_handling`

#![allow(clippy::wildcard_enum_match_arm)]

use fast_floats::prelude::*;
use fast_floats::Error;

fn main() {
    println!("=== Error Handling Examples ===");
    println!();

    // Example 1: Length mismatch
    println!("1. Length Mismatch:");
    let mut dst = vec![1.0_f64, 2.0, 3.0];
    let longer = vec![5.0, 6.0, 7.0, 8.0];
    match try_add(&mut dst, &longer) {
        Ok(()) => println!("   Unexpected success"),
        Err(Error::LengthMismatch {
            operation,
            expected,
            actual,
            operand,
        }) => {
            println!("   Caught LengthMismatch error (expected)");
            println!("   Details: {operation} operand {operand} has {actual}, expected {expected}");
            println!("   Destination untouched: {dst:?}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 2: Nothing to add
    println!("2. Too Few Operands:");
    let mut out = vec![0.0_f64; 3];
    match try_add_all_to::<f64, &[f64]>(&mut out, &[]) {
        Ok(()) => println!("   Unexpected success"),
        Err(Error::TooFewOperands { required, actual, .. }) => {
            println!("   Caught TooFewOperands error (expected)");
            println!("   Details: required {required} sequences, got {actual}");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    // Example 3: Reductions without an identity
    println!("3. Empty Input:");
    let empty: Vec<f64> = vec![];
    match try_argmax(&empty) {
        Ok(i) => println!("   Unexpected success: {i}"),
        Err(e @ Error::EmptyInput { .. }) => println!("   Caught: {e}"),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!("   sum of empty = {}", sum(&empty));
    println!();

    // Example 4: Checking lengths up front
    println!("4. Guarding With eq_len:");
    let a = vec![1.0_f64, 2.0];
    let b = vec![1.0_f64, 2.0, 3.0];
    if eq_len(&[&a, &b]) {
        println!("   Safe to combine");
    } else {
        println!("   Lengths differ, skipping the contract form");
    }
    println!();

    // Example 5: Propagating with ?
    println!("5. Propagating With ?:");
    match normalized_running_total(&[2.0, 4.0, 6.0, 8.0]) {
        Ok(v) => println!("   Result: {v:?}"),
        Err(e) => println!("   Error: {e}"),
    }
}

fn normalized_running_total(s: &[f64]) -> fast_floats::Result<Vec<f64>> {
    let mut out = vec![0.0; s.len()];
    try_cum_sum(&mut out, s)?;
    let top = try_max(&out)?;
    scale(1.0 / top, &mut out);
    Ok(out)
}
