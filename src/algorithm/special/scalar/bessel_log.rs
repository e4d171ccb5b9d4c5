//! Logarithms of the modified Bessel functions, ln Iᵥ(x) and ln Kᵥ(x)
//!
//! Iᵥ grows like eˣ and overflows for x beyond ~713, while Kᵥ underflows there
//! and overflows at small x for large orders. These evaluators run the same
//! regime structure as the linear engine in [`super::bessel`] but keep every
//! intermediate in log space:
//!
//! - the order 0/1 fits use [`LogPolynomial`] where all coefficients are
//!   positive, and take the log of the slowly varying factor elsewhere
//! - the power series sums log-terms with [`sum_log_series`]
//! - the K recurrence is a chain of [`log_add`] steps, so no rescaling is
//!   needed
//! - the Wronskian and reflection formulas combine terms with
//!   [`log_add`]/[`log_sub`]

use std::sync::OnceLock;

use log::trace;

use crate::algorithm::log_space::{log_add, log_sub};
use crate::algorithm::polynomial::{LogPolynomial, Polynomial};
use crate::algorithm::series::sum_log_series;
use crate::algorithm::special::bessel_coefficients::*;
use crate::constants::{EPSILON, MAX_LOG, PI, SERIES_ITERATIONS_MAX};
use crate::error::{Error, Result};

use super::bessel::{
    DEBYE_MIN_ORDER, asymptotic_i_large_x_sum, bessel_i_at_zero, cf1_ik, cf2_ik_parts,
    debye_log_ik, iround, is_odd_integer, temme_ik, use_asymptotic_i,
};
use super::elementary::sin_pi;
use super::gamma_functions::lgamma;

fn log_table(
    cell: &'static OnceLock<LogPolynomial>,
    coefficients: &[f64],
) -> &'static LogPolynomial {
    cell.get_or_init(|| LogPolynomial::from_coefficients(coefficients))
}

// ============================================================================
// Orders 0 and 1
// ============================================================================

/// ln I₀(x) for x > 0.
pub(crate) fn bessel_i0_log(x: f64) -> f64 {
    static SMALL: OnceLock<LogPolynomial> = OnceLock::new();
    static LARGE: OnceLock<LogPolynomial> = OnceLock::new();

    let log_x = x.ln();
    if x < 7.75 {
        let log_a = 2.0 * log_x - 4f64.ln();
        log_add(log_a + log_table(&SMALL, &I0_SMALL).eval(log_a), 0.0)
    } else if x < 500.0 {
        // The medium-range table alternates in sign, so only its value is logged
        x + Polynomial::new(&I0_MEDIUM).eval(1.0 / x).ln() - 0.5 * log_x
    } else {
        x + log_table(&LARGE, &I0_LARGE).eval(-log_x) - 0.5 * log_x
    }
}

/// ln I₁(x) for x > 0.
pub(crate) fn bessel_i1_log(x: f64) -> f64 {
    static SMALL: OnceLock<LogPolynomial> = OnceLock::new();

    let log_x = x.ln();
    if x < 7.75 {
        let log_a = 2.0 * log_x - 4f64.ln();
        let tail = log_table(&SMALL, &I1_SMALL).eval(log_a);
        let q = LogPolynomial::new(vec![0.0, 0.5f64.ln(), tail]);
        log_x + q.eval(log_a) - 2f64.ln()
    } else if x < 500.0 {
        x + Polynomial::new(&I1_MEDIUM).eval(1.0 / x).ln() - 0.5 * log_x
    } else {
        x + Polynomial::new(&I1_LARGE).eval(1.0 / x).ln() - 0.5 * log_x
    }
}

// ============================================================================
// Series and Asymptotic Forms
// ============================================================================

/// Log-terms of the Iᵥ power series: ln[(x²/4)ᵏ / (k!·(v+1)ₖ)].
struct LogSmallZSeries {
    k: f64,
    log_v: f64,
    term: f64,
    mult: f64,
}

impl LogSmallZSeries {
    fn new(v: f64, x: f64) -> Self {
        Self {
            k: 0.0,
            log_v: v.ln(),
            term: 0.0,
            mult: 2.0 * x.ln() - 4f64.ln(),
        }
    }
}

impl Iterator for LogSmallZSeries {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let r = self.term;
        let log_k = (self.k + 1.0).ln();
        self.k += 1.0;
        // ln(k + v) = log_add(ln k, ln v)
        self.term += self.mult - log_k - log_add(log_k, self.log_v);
        Some(r)
    }
}

fn bessel_i_small_z_series_log(v: f64, x: f64) -> f64 {
    let prefix = (x / 2.0).ln() * v - lgamma(v + 1.0);
    if prefix == f64::NEG_INFINITY {
        return prefix;
    }
    prefix + sum_log_series(LogSmallZSeries::new(v, x), EPSILON.ln(), SERIES_ITERATIONS_MAX)
}

fn asymptotic_bessel_i_large_x_log(v: f64, x: f64) -> f64 {
    x + asymptotic_i_large_x_sum(v, x).ln() - 0.5 * (2.0 * x * PI).ln()
}

// ============================================================================
// Log I/K Engine
// ============================================================================

/// ln Kᵤ(x) and ln Kᵤ₊₁(x) at the reduced order |u| ≤ ½.
fn log_k_reduced(u: f64, x: f64) -> (f64, f64) {
    if x <= 2.0 {
        // Both values are O(1) to O(1/x) here, so the linear series is safe
        let (ku, ku1) = temme_ik(u, x);
        (ku.ln(), ku1.ln())
    } else {
        let (f, s) = cf2_ik_parts(u, x);
        let log_ku = 0.5 * (PI / (2.0 * x)).ln() - x - s.ln();
        let log_ku1 = log_ku + ((0.5 + u + x + (u * u - 0.25) * f) / x).ln();
        (log_ku, log_ku1)
    }
}

/// ln Iᵥ(x) and ln Kᵥ(x) for x > 0 and any real v.
///
/// ln I is NaN when Iᵥ(x) is negative (possible only for negative
/// non-integer v), and also when `need_i` is false.
pub(crate) fn bessel_ik_log(v: f64, x: f64, need_i: bool) -> (f64, f64) {
    debug_assert!(x > 0.0);

    let reflect = v < 0.0;
    let v = v.abs();
    if v >= DEBYE_MIN_ORDER {
        return debye_ik_log(v, x, reflect, need_i);
    }
    let n = iround(v);
    let u = v - n as f64;

    let (mut prev, mut current) = log_k_reduced(u, x);
    for k in 1..=n {
        let log_fact = (2.0 * (u + k as f64) / x).ln();
        let next = log_add(log_fact + current, prev);
        prev = current;
        current = next;
    }
    let log_kv = prev;
    let log_kv1 = current;

    if !need_i {
        return (f64::NAN, log_kv);
    }

    let log_iv = if use_asymptotic_i(v, x) {
        trace!("bessel_ik_log: asymptotic I for v={v}, x={x}");
        asymptotic_bessel_i_large_x_log(v, x)
    } else if v > 0.0 && x / v < 0.25 {
        bessel_i_small_z_series_log(v, x)
    } else {
        let fv = cf1_ik(v, x);
        -x.ln() - log_add(log_kv + fv.ln(), log_kv1)
    };

    let log_i = if reflect {
        reflect_log_i(log_iv, log_kv, sin_pi(u + (n % 2) as f64))
    } else {
        log_iv
    };

    (log_i, log_kv)
}

/// ln I₋ᵥ from ln Iᵥ and ln Kᵥ, where sin(πv) = `sin_pi_v`.
fn reflect_log_i(log_iv: f64, log_kv: f64, sin_pi_v: f64) -> f64 {
    let s = 2.0 / PI * sin_pi_v;
    if s > 0.0 {
        log_add(log_iv, s.ln() + log_kv)
    } else if s < 0.0 {
        log_sub(log_iv, (-s).ln() + log_kv)
    } else {
        log_iv
    }
}

/// [`bessel_ik_log`] for orders past [`DEBYE_MIN_ORDER`].
fn debye_ik_log(v: f64, x: f64, reflect: bool, need_i: bool) -> (f64, f64) {
    trace!("bessel_ik_log: Debye expansion for v={v}, x={x}");
    let (log_iv, log_kv) = debye_log_ik(v, x);
    if !need_i {
        return (f64::NAN, log_kv);
    }
    let log_i = if reflect {
        reflect_log_i(log_iv, log_kv, sin_pi(v))
    } else {
        log_iv
    };
    (log_i, log_kv)
}

// ============================================================================
// Public Functions
// ============================================================================

/// ln Iᵥ(x), without overflow for large x.
///
/// For integer `v` negative `x` is accepted: even orders give ln Iᵥ(|x|), odd
/// orders NaN (the value is negative). NaN is also returned wherever Iᵥ(x)
/// itself is negative, which happens for some negative non-integer orders.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for `x < 0` with non-integer `v`.
pub fn log_bessel_i(v: f64, x: f64) -> Result<f64> {
    if v.is_nan() || x.is_nan() {
        return Ok(f64::NAN);
    }
    if x < 0.0 {
        if v.floor() != v {
            return Err(Error::invalid_argument(
                "log_bessel_i",
                "x",
                format!("got x = {x}, but x must be non-negative for non-integer order {v}"),
            ));
        }
        if is_odd_integer(v) {
            return Ok(f64::NAN);
        }
        return log_bessel_i(v, -x);
    }
    if x == 0.0 {
        let i = bessel_i_at_zero(v);
        return Ok(if i < 0.0 { f64::NAN } else { i.ln() });
    }
    if v == 0.5 {
        if x >= MAX_LOG {
            let e = x / 2.0;
            return Ok(e + (e - 0.5 * (2.0 * x * PI).ln()));
        }
        return Ok(0.5 * (2f64.ln() - x.ln() - PI.ln()) + x.sinh().ln());
    }
    if v == 0.0 {
        return Ok(bessel_i0_log(x));
    }
    if v == 1.0 {
        return Ok(bessel_i1_log(x));
    }
    if v > 0.0 && x / v < 0.25 {
        return Ok(bessel_i_small_z_series_log(v, x));
    }
    Ok(bessel_ik_log(v, x, true).0)
}

/// ln Kᵥ(x), without underflow for large x or overflow for large orders.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for `x < 0`.
pub fn log_bessel_k(v: f64, x: f64) -> Result<f64> {
    if v.is_nan() || x.is_nan() {
        return Ok(f64::NAN);
    }
    if x < 0.0 {
        return Err(Error::invalid_argument(
            "log_bessel_k",
            "x",
            format!("got x = {x}, but x must be non-negative"),
        ));
    }
    if x == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(bessel_ik_log(v.abs(), x, false).1)
}
