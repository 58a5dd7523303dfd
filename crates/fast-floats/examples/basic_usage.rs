//! Basic Usage Example
//!
//! Walks through the core operations: combining slices in place and into
//! a fresh buffer, guarding on equal lengths, columnwise sums, constant
//! shifts and cumulative scans.
//!
//! Run with: `cargo run --example basic_usage`

#![allow(clippy::cast_precision_loss)]

use fast_floats::prelude::*;

fn main() {
    println!("=== Add (in place) ===");
    let mut s1 = vec![1.0_f64, 2.0, 3.0, 4.0];
    let s2 = vec![5.0, 6.0, 7.0, 8.0];
    let s3 = vec![1.0, 1.0, 1.0, 1.0];
    add_all(&mut s1, &[&s2, &s3]);
    println!("s1 = {s1:?}");
    println!("s2 = {s2:?}");
    println!("s3 = {s3:?}");
    println!();

    println!("=== Add (new slice) ===");
    let s1 = vec![1.0_f64, 2.0, 3.0, 4.0];
    let mut dst = vec![0.0; s1.len()];
    add_all_to(&mut dst, &[&s1, &s2, &s3]);
    println!("dst = {dst:?}");
    println!("s1  = {s1:?}");
    println!();

    println!("=== Unequal lengths ===");
    let mut short = vec![1.0_f64, 2.0, 3.0];
    let long = vec![5.0, 6.0, 7.0, 8.0];
    if eq_len(&[&short, &long]) {
        add(&mut short, &long);
    } else {
        println!("Lengths differ: {} vs {}", short.len(), long.len());
    }
    println!();

    println!("=== Columnwise sum ===");
    let rows: Vec<Vec<f64>> = (0..5).map(|_| (0..3).map(|j| j as f64).collect()).collect();
    let mut result = vec![0.0_f64; rows[0].len()];
    add_all_to(&mut result, &rows);
    println!("result = {result:?}");
    println!();

    println!("=== AddConst ===");
    let mut s = vec![1.0_f64, -2.0, 3.0, -4.0];
    add_const(5.0, &mut s);
    println!("s = {s:?}");
    println!();

    println!("=== CumProd / CumSum ===");
    let s = vec![1.0_f64, -2.0, 3.0, -4.0];
    let mut out = vec![0.0; s.len()];
    cum_prod(&mut out, &s);
    println!("cum_prod = {out:?}");
    cum_sum(&mut out, &s);
    println!("cum_sum  = {out:?}");
    println!("orig     = {s:?}");
}
