//! Log-sum-exp primitives for arithmetic on values stored as logarithms.

/// ln(eᵃ + eᵇ) without overflow.
///
/// Either operand may be −∞ (representing zero).
#[inline]
pub fn log_add(a: f64, b: f64) -> f64 {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    if lo == f64::NEG_INFINITY {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}

/// ln(eᵃ − eᵇ) for a ≥ b.
///
/// Returns NaN when b > a (the difference is negative) and −∞ when a == b.
#[inline]
pub fn log_sub(a: f64, b: f64) -> f64 {
    if b == f64::NEG_INFINITY {
        return a;
    }
    a + (-(b - a).exp()).ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "expected {b}, got {a}");
    }

    #[test]
    fn test_log_add_values() {
        assert_close(log_add(2f64.ln(), 3f64.ln()), 5f64.ln(), 1e-15);
        assert_close(log_add(3f64.ln(), 2f64.ln()), 5f64.ln(), 1e-15);
        // Large magnitudes that would overflow exp
        assert_close(log_add(1000.0, 1000.0), 1000.0 + 2f64.ln(), 1e-12);
    }

    #[test]
    fn test_log_add_neg_infinity() {
        assert_eq!(log_add(f64::NEG_INFINITY, 1.5), 1.5);
        assert_eq!(log_add(1.5, f64::NEG_INFINITY), 1.5);
        assert_eq!(
            log_add(f64::NEG_INFINITY, f64::NEG_INFINITY),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_log_sub_values() {
        assert_close(log_sub(5f64.ln(), 2f64.ln()), 3f64.ln(), 1e-15);
        assert_eq!(log_sub(4.0, f64::NEG_INFINITY), 4.0);
        assert_eq!(log_sub(4.0, 4.0), f64::NEG_INFINITY);
        assert!(log_sub(1.0, 2.0).is_nan());
    }
}
