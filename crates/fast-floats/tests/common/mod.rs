//! Shared test utilities for fast-floats tests.

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Elementwise approximate equality; lengths must match.
#[allow(dead_code)]
pub fn slices_approx_eq(a: &[f64], b: &[f64], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < eps)
}

/// `n` rows, each `[0, 1, ..., width - 1]`.
#[allow(dead_code)]
pub fn ramp_rows(n: usize, width: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|_| (0..width).map(|j| j as f64).collect())
        .collect()
}

/// Deterministic pseudo-random series for tests that need "messy" data.
#[allow(dead_code)]
pub fn wavy_series(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| (i as f64 * 0.37).sin() * 10.0 + (i as f64 * 0.11).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_approx_eq() {
        assert!(slices_approx_eq(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], EPSILON));
        assert!(!slices_approx_eq(&[1.0, 2.0], &[1.0], EPSILON));
        assert!(!slices_approx_eq(&[1.0], &[1.1], EPSILON));
    }

    #[test]
    fn test_ramp_rows() {
        let rows = ramp_rows(5, 3);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r == &[0.0, 1.0, 2.0]));
    }
}
