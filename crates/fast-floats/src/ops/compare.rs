//! Length and value comparisons between sequences.
//!
//! These are predicates: they answer a question about their arguments and
//! never treat a length mismatch as a violation.

use crate::traits::SeriesElement;
use crate::utils::Tolerance;

/// Returns true if all sequences share one common length.
///
/// Zero or one sequence is trivially true.
///
/// # Example
///
/// ```
/// use fast_floats::ops::{add, eq_len};
///
/// let mut s1 = vec![1.0_f64, 2.0, 3.0];
/// let s2 = vec![5.0, 6.0, 7.0, 8.0];
///
/// if eq_len(&[&s1, &s2]) {
///     add(&mut s1, &s2);
/// } else {
///     println!("Unequal lengths");
/// }
/// assert_eq!(s1, [1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn eq_len<T, S: AsRef<[T]>>(sequences: &[S]) -> bool {
    match sequences.split_first() {
        None => true,
        Some((first, rest)) => {
            let n = first.as_ref().len();
            rest.iter().all(|s| s.as_ref().len() == n)
        }
    }
}

/// Returns true if `a` and `b` have the same length and identical elements.
///
/// Comparison is IEEE equality, so a NaN element never compares equal.
#[must_use]
pub fn equal<T: SeriesElement>(a: &[T], b: &[T]) -> bool {
    a == b
}

/// Returns true if `a` and `b` have the same length and every pair of
/// elements is accepted by `tol`.
///
/// # Example
///
/// ```
/// use fast_floats::ops::equal_approx;
/// use fast_floats::utils::Tolerance;
///
/// let a = [0.1_f64 + 0.2, 1.0];
/// let b = [0.3_f64, 1.0];
/// assert!(equal_approx(&a, &b, Tolerance::default()));
/// assert!(!equal_approx(&a, &b[..1], Tolerance::default()));
/// ```
#[must_use]
pub fn equal_approx<T: SeriesElement>(a: &[T], b: &[T], tol: Tolerance) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| tol.accepts(x, y))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;

    #[test]
    fn test_eq_len_mismatch() {
        let s1 = vec![1.0_f64, 2.0, 3.0];
        let s2 = vec![5.0_f64, 6.0, 7.0, 8.0];
        assert!(!eq_len(&[&s1, &s2]));
    }

    #[test]
    fn test_eq_len_equal() {
        let s1 = vec![1.0_f64, 2.0, 3.0];
        let s2 = vec![5.0_f64, 6.0, 7.0];
        let s3 = vec![0.0_f64; 3];
        assert!(eq_len(&[&s1, &s2, &s3]));
    }

    #[test]
    fn test_eq_len_mismatch_anywhere() {
        let rows = vec![vec![0.0_f64; 4], vec![0.0; 4], vec![0.0; 4], vec![0.0; 3]];
        assert!(!eq_len(&rows));
    }

    #[test]
    fn test_eq_len_trivial_cases() {
        let none: [Vec<f64>; 0] = [];
        assert!(eq_len(&none));
        assert!(eq_len(&[vec![1.0_f64, 2.0]]));

        let empty: Vec<f64> = vec![];
        assert!(eq_len(&[&empty, &empty]));
    }

    #[test]
    fn test_equal() {
        assert!(equal(&[1.0_f64, 2.0], &[1.0, 2.0]));
        assert!(!equal(&[1.0_f64, 2.0], &[1.0, 2.5]));
        assert!(!equal(&[1.0_f64, 2.0], &[1.0]));
        assert!(!equal(&[f64::NAN], &[f64::NAN]));
        assert!(equal::<f64>(&[], &[]));
    }

    #[test]
    fn test_equal_approx() {
        let tol = Tolerance::new().absolute(1e-6);
        assert!(equal_approx(&[1.0_f64, 2.0], &[1.0 + 1e-7, 2.0 - 1e-7], tol));
        assert!(!equal_approx(&[1.0_f64, 2.0], &[1.0, 2.1], tol));
        assert!(!equal_approx(&[1.0_f64], &[1.0, 1.0], tol));
        assert!(!equal_approx(&[f64::NAN], &[f64::NAN], tol));
    }

    #[test]
    fn test_equal_approx_follows_tolerance_bounds() {
        let a = [1e12_f64, 0.0];
        let b = [1e12 + 1.0, 5e-11];

        // Absolute bound alone rejects the large pair.
        let absolute = Tolerance::new().absolute(1e-10).relative(0.0);
        assert!(!equal_approx(&a, &b, absolute));

        // Relative bound alone rejects the pair near zero.
        let relative = Tolerance::new().absolute(0.0).relative(1e-6);
        assert!(!equal_approx(&a, &b, relative));

        // Either bound may accept each pair.
        let both = Tolerance::new().absolute(1e-10).relative(1e-6);
        assert!(equal_approx(&a, &b, both));
        assert!(equal_approx(&a, &b, Tolerance::default().relative(1e-6)));
    }
}
