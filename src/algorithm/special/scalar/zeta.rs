//! Riemann zeta function ζ(s) for real s
//!
//! ```text
//! ζ(s) = Σₙ₌₁^∞ n⁻ˢ,    s > 1
//! ```
//!
//! continued to the whole real line (except the pole at s = 1) by the
//! functional equation
//!
//! ```text
//! ζ(s) = 2ˢ πˢ⁻¹ sin(πs/2) Γ(1 − s) ζ(1 − s)
//! ```
//!
//! Integer arguments use closed forms: Bernoulli numbers for even and
//! negative odd s, and Borwein's alternating series (cached for the first
//! fifty odd integers ≥ 3) for positive odd s. Other positive arguments use
//! banded rational approximations.

use std::sync::OnceLock;

use log::debug;

use crate::algorithm::polynomial::Polynomial;
use crate::algorithm::special::zeta_coefficients::*;
use crate::constants::{
    EPSILON, LN_SQRT_2PI, MAX_FACTORIAL, MAX_LOG, PI, PRECISION_BITS, ROOT_EPSILON,
};

use super::elementary::{bernoulli_number, factorial, powm1, sin_pi};
use super::gamma_functions::{gamma, lgamma};

/// Number of odd integers 3, 5, 7, … whose ζ value is cached.
const ODD_CACHE_SIZE: usize = 50;

/// Largest 1 − s for which a negative odd integer is evaluated through
/// B₁₋ₛ/(1 − s) rather than the functional equation.
const MAX_BERNOULLI_INDEX: i64 = 120;

// ============================================================================
// Borwein Series
// ============================================================================

/// ζ(s) by algorithm 3 of Borwein, "An efficient algorithm for the Riemann
/// zeta function" (2000): an accelerated alternating series in n = 18 terms,
/// with ζ(s) = η(s)/(1 − 2¹⁻ˢ).
fn zeta_polynomial_series(s: f64, sc: f64) -> f64 {
    let n = (EPSILON.ln() / -2.0).trunc() as i32;
    let two_n = 2f64.powi(n);
    let mut sum = 0.0;
    let mut ej_sign = 1.0;

    for j in 0..n {
        sum += ej_sign * -two_n / f64::from(j + 1).powf(s);
        ej_sign = -ej_sign;
    }

    let mut ej_sum = 1.0;
    let mut ej_term = 1.0;
    for j in n..2 * n {
        sum += ej_sign * (ej_sum - two_n) / f64::from(j + 1).powf(s);
        ej_sign = -ej_sign;
        ej_term *= f64::from(2 * n - j);
        ej_term /= f64::from(j - n + 1);
        ej_sum += ej_term;
    }

    -sum / (two_n * -powm1(2.0, sc))
}

fn odd_integer_cache() -> &'static [f64; ODD_CACHE_SIZE] {
    static CACHE: OnceLock<[f64; ODD_CACHE_SIZE]> = OnceLock::new();
    CACHE.get_or_init(|| {
        debug!("initialising zeta cache for the first {ODD_CACHE_SIZE} odd integers");
        std::array::from_fn(|k| {
            let s = (2 * k + 3) as f64;
            zeta_polynomial_series(s, 1.0 - s)
        })
    })
}

/// ζ(s) for odd s ≥ 3.
fn zeta_odd_integer(s: i64, sc: f64) -> f64 {
    let index = ((s - 3) / 2) as usize;
    match odd_integer_cache().get(index) {
        Some(&value) => value,
        None => zeta_polynomial_series(s as f64, sc),
    }
}

// ============================================================================
// Rational Approximations
// ============================================================================

fn rational(p: &[f64], q: &[f64], z: f64) -> f64 {
    Polynomial::new(p).eval(z) / Polynomial::new(q).eval(z)
}

/// ζ(s) for positive non-integer s (and s < 1 near zero), by band.
fn zeta_rational(s: f64, sc: f64) -> f64 {
    if s < 1.0 {
        (rational(&ZETA_LT_1_P, &ZETA_LT_1_Q, sc) - ZETA_LT_1_Y + sc) / sc
    } else if s <= 2.0 {
        rational(&ZETA_1_2_P, &ZETA_1_2_Q, -sc) + 1.0 / -sc
    } else if s <= 4.0 {
        rational(&ZETA_2_4_P, &ZETA_2_4_Q, s - 2.0) + ZETA_2_4_Y + 1.0 / -sc
    } else if s <= 7.0 {
        1.0 + rational(&ZETA_4_7_P, &ZETA_4_7_Q, s - 4.0).exp()
    } else if s < 15.0 {
        1.0 + rational(&ZETA_7_15_P, &ZETA_7_15_Q, s - 7.0).exp()
    } else if s < 36.0 {
        1.0 + rational(&ZETA_15_36_P, &ZETA_15_36_Q, s - 15.0).exp()
    } else if s < 56.0 {
        1.0 + 2f64.powf(-s)
    } else {
        1.0
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// ζ(s) for integer s, if a closed form applies.
fn zeta_integer(v: i64, sc: f64) -> Option<f64> {
    if v < 0 {
        if -v & 1 == 0 {
            // Trivial zeros
            return Some(0.0);
        }
        let m = 1 - v;
        if m > MAX_BERNOULLI_INDEX {
            return None;
        }
        return Some(-bernoulli_number(m as u32) / m as f64);
    }
    if v & 1 == 0 {
        // ζ(2k) = (−1)ᵏ⁺¹ 2²ᵏ⁻¹ π²ᵏ B₂ₖ/(2k)!
        let magnitude = 2f64.powi(v as i32 - 1) * PI.powi(v as i32) * bernoulli_number(v as u32)
            / factorial(v as u32);
        return Some(if (v / 2 - 1) & 1 == 1 {
            -magnitude
        } else {
            magnitude
        });
    }
    Some(zeta_odd_integer(v, sc))
}

/// ζ(s) given both s and sc = 1 − s, so that values next to the pole keep
/// their precision.
fn zeta_imp(s: f64, sc: f64) -> f64 {
    if sc == 0.0 {
        return f64::NAN;
    }
    if s > f64::from(PRECISION_BITS) {
        return 1.0;
    }
    if s.floor() == s {
        if s < 0.0 && (s / 2.0).floor() == s / 2.0 {
            // Trivial zeros, which include every double below −2⁵³
            return 0.0;
        }
        // Both |s| ≤ 53 and odd s > −2⁵³ fit an i64 exactly
        if let Some(result) = zeta_integer(s as i64, sc) {
            return result;
        }
    }

    if s.abs() < ROOT_EPSILON {
        return -0.5 - LN_SQRT_2PI * s;
    }
    if s >= 0.0 {
        return zeta_rational(s, sc);
    }

    // Reflect: evaluate at 1 − s > 1
    let (s, sc) = (sc, s);
    if (sc / 2.0).floor() == sc / 2.0 {
        return 0.0;
    }
    if s > f64::from(MAX_FACTORIAL) {
        // Γ(s) overflows; carry Γ(s)/(2π)ˢ in logs
        let mult = sin_pi(0.5 * sc) * 2.0 * zeta_imp(s, sc);
        let log_result = lgamma(s) - s * (2.0 * PI).ln();
        let overflow = if mult.is_sign_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        if log_result > MAX_LOG {
            return overflow;
        }
        let result = log_result.exp();
        if f64::MAX / mult.abs() < result {
            return overflow;
        }
        return result * mult;
    }
    sin_pi(0.5 * sc) * 2.0 * (2.0 * PI).powf(-s) * gamma(s) * zeta_imp(s, sc)
}

/// Riemann zeta function ζ(s).
///
/// Returns NaN at the pole s = 1, at s = −∞ and for NaN input.
///
/// # Example
///
/// ```
/// use specfun::prelude::*;
///
/// let z2 = zeta(2.0);
/// assert!((z2 - std::f64::consts::PI.powi(2) / 6.0).abs() < 1e-15);
/// assert_eq!(zeta(-2.0), 0.0);
/// ```
pub fn zeta(s: f64) -> f64 {
    if s.is_nan() || s == f64::NEG_INFINITY {
        return f64::NAN;
    }
    zeta_imp(s, 1.0 - s)
}
