//! Gamma function helpers (Γ, ln Γ, Γ(1+z) − 1)
//!
//! Γ and ln Γ themselves come from `libm`. What the incomplete gamma and
//! Bessel engines need beyond that is Γ(1+z) − 1 for small z, which cannot be
//! formed by subtraction without losing every significant digit.

use crate::algorithm::polynomial::Polynomial;
use crate::algorithm::special::gamma_coefficients::*;
use crate::constants::{EPSILON, LN_SQRT_2PI};

/// Γ(x)
#[inline]
pub fn gamma(x: f64) -> f64 {
    libm::tgamma(x)
}

/// ln |Γ(x)|
#[inline]
pub fn lgamma(x: f64) -> f64 {
    libm::lgamma(x)
}

/// ln Γ(a) by Stirling's series truncated after the 1/(288a²) term.
///
/// Only used as a last resort for very large `a`, where it is accurate to
/// well below double precision.
pub(crate) fn lgamma_stirling(a: f64) -> f64 {
    let series = 1.0 + 1.0 / (12.0 * a) + 1.0 / (288.0 * a * a);
    series.ln() - a + (a - 0.5) * a.ln() + LN_SQRT_2PI
}

/// ln Γ(z) for z in (0, 3) by rational approximation.
///
/// `zm1` and `zm2` must equal z − 1 and z − 2; passing them separately keeps
/// full precision when z is close to 1 or 2, where ln Γ has its zeros.
pub(crate) fn lgamma_small(mut z: f64, mut zm1: f64, mut zm2: f64) -> f64 {
    if z < EPSILON {
        return -z.ln();
    }
    if zm1 == 0.0 || zm2 == 0.0 {
        return 0.0;
    }

    let mut result = 0.0;
    if z > 2.0 {
        if z >= 3.0 {
            while z >= 3.0 {
                z -= 1.0;
                result += z.ln();
            }
            zm2 = z - 2.0;
        }
        let r = zm2 * (z + 1.0);
        let rat =
            Polynomial::new(&LGAMMA_2_3_P).eval(zm2) / Polynomial::new(&LGAMMA_2_3_Q).eval(zm2);
        result += r * LGAMMA_2_3_Y + r * rat;
    } else {
        // Shift z < 1 up into [1, 2]
        if z < 1.0 {
            result -= z.ln();
            zm2 = zm1;
            zm1 = z;
            z += 1.0;
        }
        if z <= 1.5 {
            let rat = Polynomial::new(&LGAMMA_1_15_P).eval(zm1)
                / Polynomial::new(&LGAMMA_1_15_Q).eval(zm1);
            let prefix = zm1 * zm2;
            result += prefix * LGAMMA_1_15_Y + prefix * rat;
        } else {
            let rat = Polynomial::new(&LGAMMA_15_2_P).eval(-zm2)
                / Polynomial::new(&LGAMMA_15_2_Q).eval(-zm2);
            let r = zm2 * zm1;
            result += r * LGAMMA_15_2_Y + r * rat;
        }
    }
    result
}

/// Γ(1 + z) − 1, accurate for z near 0 and near −1/2..2.
pub fn tgamma1pm1(z: f64) -> f64 {
    if z < 0.0 {
        if z < -0.5 {
            gamma(1.0 + z) - 1.0
        } else {
            (-z.ln_1p() + lgamma_small(z + 2.0, z + 1.0, z)).exp_m1()
        }
    } else if z < 2.0 {
        lgamma_small(z + 1.0, z, z - 1.0).exp_m1()
    } else {
        gamma(z + 1.0) - 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(a: f64, b: f64, tol: f64) {
        assert!(
            ((a - b) / b).abs() < tol,
            "expected {b}, got {a} (rel err {})",
            ((a - b) / b).abs()
        );
    }

    #[test]
    fn test_lgamma_small_matches_libm() {
        for &z in &[0.1, 0.5, 0.9, 1.2, 1.5, 1.7, 2.5, 2.9] {
            let expected = lgamma(z);
            let got = lgamma_small(z, z - 1.0, z - 2.0);
            assert!((got - expected).abs() < 2e-15 * expected.abs().max(1.0));
        }
    }

    #[test]
    fn test_lgamma_small_zeros() {
        assert_eq!(lgamma_small(1.0, 0.0, -1.0), 0.0);
        assert_eq!(lgamma_small(2.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_tgamma1pm1_small() {
        // Γ(1+z) − 1 ≈ −γz for tiny z
        let z = 1e-10;
        assert_rel(tgamma1pm1(z), -0.5772156649015329e-10, 1e-8);
        assert_rel(tgamma1pm1(-z), 0.5772156649015329e-10, 1e-8);
    }

    #[test]
    fn test_tgamma1pm1_regimes() {
        // Γ(1.5) − 1, Γ(0.75) − 1, Γ(4) − 1, Γ(0.3) − 1
        assert_rel(tgamma1pm1(0.5), 0.886226925452758 - 1.0, 1e-13);
        assert_rel(tgamma1pm1(-0.25), 1.2254167024651776 - 1.0, 1e-13);
        assert_rel(tgamma1pm1(3.0), 5.0, 1e-14);
        assert_rel(tgamma1pm1(-0.7), 2.991568987687591 - 1.0, 1e-13);
    }

    #[test]
    fn test_stirling_large() {
        let a = 500.0;
        assert_rel(lgamma_stirling(a), lgamma(a), 1e-13);
    }
}
