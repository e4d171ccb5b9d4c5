//! Digamma, trigamma and polygamma functions
//!
//! ```text
//! ψ(x) = d/dx ln Γ(x),    ψ⁽ⁿ⁾(x) = dⁿ/dxⁿ ψ(x)
//! ```
//!
//! Digamma and trigamma use rational fits on a reduced interval plus the
//! recurrence ψ⁽ⁿ⁾(x+1) = ψ⁽ⁿ⁾(x) + (−1)ⁿ n!/xⁿ⁺¹. Higher orders pick one of
//!
//! | Region              | Method                                          |
//! |---------------------|-------------------------------------------------|
//! | x < min(5/n, ¼)     | alternating series in ζ(n+k+1) about x = 0      |
//! | x > 6 + 4n          | asymptotic series in B₂ₖ/x²ᵏ                    |
//! | otherwise           | recur up to x ≥ 6 + 4n, then the asymptotic form |
//!
//! and reflect negative arguments through the n-th derivative of π·cot(πx).

use std::sync::OnceLock;

use log::debug;
use parking_lot::RwLock;

use crate::algorithm::polynomial::{EvenPolynomial, Polynomial};
use crate::algorithm::special::polygamma_coefficients::*;
use crate::constants::{DIGITS10, EPSILON, MAX_FACTORIAL, MAX_LOG, PI, SERIES_ITERATIONS_MAX};
use crate::error::{Error, Result, convergence_failure};

use super::elementary::{bernoulli_b2n, cos_pi, factorial, sin_pi};
use super::gamma_functions::lgamma;
use super::zeta::zeta;

/// Lower limit of the digamma asymptotic expansion.
const DIGAMMA_LARGE_LIMIT: f64 = 10.0;

// ============================================================================
// Digamma
// ============================================================================

fn digamma_large(x: f64) -> f64 {
    // ψ(x) = ψ(y + 1) with y = x − 1
    let y = x - 1.0;
    let z = 1.0 / (y * y);
    y.ln() + 1.0 / (2.0 * y) - z * Polynomial::new(&DIGAMMA_LARGE).eval(z)
}

fn digamma_1_2(x: f64) -> f64 {
    let g = x - DIGAMMA_ROOT[0] - DIGAMMA_ROOT[1] - DIGAMMA_ROOT[2];
    let r = Polynomial::new(&DIGAMMA_1_2_P).eval(x - 1.0)
        / Polynomial::new(&DIGAMMA_1_2_Q).eval(x - 1.0);
    g * DIGAMMA_1_2_Y + g * r
}

/// Digamma function ψ(x) = Γ′(x)/Γ(x).
///
/// NaN at the poles x = 0, −1, −2, …
pub fn digamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let mut x = x;
    let mut result = 0.0;

    if x <= -1.0 {
        // ψ(1 − x) − ψ(x) = π·cot(πx)
        x = 1.0 - x;
        let mut remainder = x - x.floor();
        if remainder > 0.5 {
            remainder -= 1.0;
        }
        if remainder == 0.0 {
            return f64::NAN;
        }
        result = PI / (PI * remainder).tan();
    }
    if x == 0.0 {
        return f64::NAN;
    }

    if x >= DIGAMMA_LARGE_LIMIT {
        return result + digamma_large(x);
    }
    while x > 2.0 {
        x -= 1.0;
        result += 1.0 / x;
    }
    while x < 1.0 {
        result -= 1.0 / x;
        x += 1.0;
    }
    result + digamma_1_2(x)
}

// ============================================================================
// Trigamma
// ============================================================================

fn trigamma_positive(x: f64) -> f64 {
    let rational =
        |p: &[f64], q: &[f64], z: f64| Polynomial::new(p).eval(z) / Polynomial::new(q).eval(z);
    if x <= 2.0 {
        (TRIGAMMA_1_2_OFFSET + rational(&TRIGAMMA_1_2_P, &TRIGAMMA_1_2_Q, x)) / (x * x)
    } else if x <= 4.0 {
        (1.0 + rational(&TRIGAMMA_2_4_P, &TRIGAMMA_2_4_Q, 1.0 / x)) / x
    } else {
        (1.0 + rational(&TRIGAMMA_4_INF_P, &TRIGAMMA_4_INF_Q, 1.0 / x)) / x
    }
}

/// Trigamma function ψ₁(x) = ψ′(x).
///
/// NaN at the poles x = 0, −1, −2, …
pub fn trigamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 {
        if x.floor() == x {
            return f64::NAN;
        }
        // ψ₁(1 − x) + ψ₁(x) = π²/sin²(πx)
        let z = 1.0 - x;
        let s = if x.abs() < z.abs() { sin_pi(x) } else { sin_pi(z) };
        return -trigamma(z) + PI * PI / (s * s);
    }
    if x < 1.0 {
        1.0 / (x * x) + trigamma_positive(x + 1.0)
    } else {
        trigamma_positive(x)
    }
}

// ============================================================================
// Polygamma Regions
// ============================================================================

/// x from which the asymptotic series is used directly (0.4·digits + 4n).
fn asymptotic_threshold(n: i32) -> f64 {
    (0.4 * DIGITS10 as f64).trunc() + 4.0 * f64::from(n)
}

/// Sign (−1)ⁿ⁺¹ shared by every ψ⁽ⁿ⁾ expansion.
#[inline]
fn odd_positive(n: i32, value: f64) -> f64 {
    if n & 1 == 1 { value } else { -value }
}

/// The infinite limit of ψ⁽ⁿ⁾ at a pole approached from both sides: +∞ for
/// odd n; for even n the one-sided limits differ in sign, so NaN.
#[inline]
fn pole_value(n: i32, odd: f64) -> f64 {
    if n & 1 == 1 { odd } else { f64::NAN }
}

/// ψ⁽ⁿ⁾(x) for large x:
///
/// ```text
/// (−1)ⁿ⁺¹ [ (n−1)!/xⁿ + n!/(2xⁿ⁺¹) + Σₖ B₂ₖ (2k+n−1)!/((2k)! x²ᵏ⁺ⁿ) ]
/// ```
fn polygamma_at_infinity(n: i32, x: f64) -> f64 {
    let nf = f64::from(n);

    if nf + x == x {
        // Only the leading term survives
        if n == 1 {
            return 1.0 / x;
        }
        let nlx = nf * x.ln();
        let magnitude = if nlx < MAX_LOG && n < MAX_FACTORIAL as i32 {
            factorial((n - 1) as u32) * x.powf(-nf)
        } else {
            (lgamma(nf) - nf * x.ln()).exp()
        };
        return odd_positive(n, magnitude);
    }

    // part_term starts as (n−1)!/xⁿ⁺¹, common to the leading pair and the
    // first Bernoulli term
    let x_squared = x * x;
    let mut part_term = if n > MAX_FACTORIAL as i32 && nf * nf > MAX_LOG {
        0.0
    } else {
        factorial((n - 1) as u32) * x.powf(-nf - 1.0)
    };
    let mut sum;
    if part_term == 0.0 {
        // n! overflows or the power underflows; set up the first terms in logs
        let log_part = lgamma(nf) - (nf + 1.0) * x.ln();
        sum = (log_part + (nf + 2.0 * x).ln() - 2f64.ln()).exp();
        part_term = (log_part + (nf * (nf + 1.0)).ln() - 2f64.ln() - x.ln()).exp();
    } else {
        sum = part_term * (nf + 2.0 * x) / 2.0;
        part_term *= nf * (nf + 1.0) / 2.0;
        part_term /= x;
    }
    if sum == 0.0 {
        return sum;
    }

    let mut k = 1usize;
    loop {
        let term = part_term * bernoulli_b2n(k);
        sum += term;
        if (term / sum).abs() < EPSILON {
            break;
        }
        k += 1;
        let kf = k as f64;
        part_term *= (nf + 2.0 * kf - 2.0) * (nf - 1.0 + 2.0 * kf);
        part_term /= (2.0 * kf - 1.0) * 2.0 * kf;
        part_term /= x_squared;
        if k > SERIES_ITERATIONS_MAX {
            convergence_failure("polygamma_at_infinity", SERIES_ITERATIONS_MAX);
        }
    }
    odd_positive(n, sum)
}

/// ψ⁽ⁿ⁾(x) by forward recurrence to x + m ≥ 6 + 4n, then the asymptotic form.
fn polygamma_transition(n: i32, x: f64) -> f64 {
    let iterations = (asymptotic_threshold(n) - x.trunc()).max(0.0) as usize;
    if iterations > SERIES_ITERATIONS_MAX {
        convergence_failure("polygamma_transition", iterations);
    }

    let exponent = -f64::from(n) - 1.0;
    let mut z = x;
    let mut sum0 = 0.0;
    if (z + iterations as f64).ln() * exponent > -MAX_LOG {
        for _ in 0..iterations {
            sum0 += z.powf(exponent);
            z += 1.0;
        }
        sum0 *= factorial(n as u32);
    } else {
        let log_factorial = lgamma(f64::from(n) + 1.0);
        for _ in 0..iterations {
            sum0 += (z.ln() * exponent + log_factorial).exp();
            z += 1.0;
        }
    }
    odd_positive(n, sum0) + polygamma_at_infinity(n, z)
}

/// ψ⁽ⁿ⁾(x) for small positive x:
///
/// ```text
/// (−1)ⁿ⁺¹ n! [ 1/xⁿ⁺¹ + Σₖ (−x)ᵏ (n+k)!/(n! k!) ζ(n+k+1) ]
/// ```
///
/// with the n! scale applied last to avoid spurious overflow.
fn polygamma_near_zero(n: i32, x: f64) -> f64 {
    let scale = factorial(n as u32);
    let overflow = pole_value(n, f64::INFINITY);

    let prefix = 1.0 / x.powi(n + 1);
    // The series is bounded by ζ(2) < 2, so it is negligible against a
    // prefix this large
    if prefix > 2.0 / EPSILON {
        if f64::MAX / prefix < scale {
            return overflow;
        }
        return odd_positive(n, prefix * scale);
    }

    let mut sum = prefix;
    let mut factorial_part = 1.0;
    let mut k = 0usize;
    loop {
        let term = factorial_part * zeta((k as i32 + n + 1) as f64);
        sum += term;
        if term.abs() < (sum * EPSILON).abs() {
            break;
        }
        k += 1;
        let kf = k as f64;
        factorial_part *= (-x * (f64::from(n) + kf)) / kf;
        if k > SERIES_ITERATIONS_MAX {
            convergence_failure("polygamma_near_zero", SERIES_ITERATIONS_MAX);
        }
    }

    if f64::MAX / scale < sum {
        return overflow;
    }
    odd_positive(n, sum * scale)
}

// ============================================================================
// Derivatives of cot(πx)
// ============================================================================

/// Rows of the generated cosine-polynomial table, starting with n = 1.
///
/// Row n−1 holds the even-power coefficients of the polynomial in c = cos(πx)
/// such that dⁿ/dxⁿ cot(πx) = πⁿ (n−1)! [c·]P(c²)/sⁿ⁺¹. It grows on demand
/// for orders above the fixed tables.
fn cot_pi_table() -> &'static RwLock<Vec<Vec<f64>>> {
    static TABLE: OnceLock<RwLock<Vec<Vec<f64>>>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(vec![vec![-1.0]]))
}

/// Extend `table` until it has a row at `index`.
///
/// Each step differentiates Σ C[k]·cᵏ/sʲ once more, using
/// d/dx cᵏ/sʲ = π(−k·cᵏ⁻¹/sʲ⁻¹ + (k − j)·cᵏ⁺¹/sʲ⁺¹) and dividing by the row
/// order to keep the magnitudes in range.
fn grow_cot_pi_table(table: &mut Vec<Vec<f64>>, index: usize) {
    if table.len() > index {
        return;
    }
    debug!("extending cot(πx) derivative table from {} to {} rows", table.len(), index + 1);
    for i in table.len() - 1..index {
        let offset = i & 1;
        let sin_order = i + 2;
        let max_cos_order = sin_order - 1;
        let max_columns = (max_cos_order - offset) / 2;
        let next_max_columns = (max_cos_order + 1) / 2;

        let mut next = vec![0.0; next_max_columns + 1];
        for column in 0..=max_columns {
            let cos_order = 2 * column + offset;
            let c = table[i][column];
            let divisor = (sin_order - 1) as f64;
            next[(cos_order + 1) / 2] += (cos_order as f64 - sin_order as f64) * c / divisor;
            if cos_order != 0 {
                next[(cos_order - 1) / 2] += -(cos_order as f64) * c / divisor;
            }
        }
        table.push(next);
    }
}

/// Polynomial part of a generated row evaluated at c.
fn cot_pi_generated_sum(index: usize, c: f64) -> f64 {
    {
        let table = cot_pi_table().read();
        if let Some(row) = table.get(index) {
            return EvenPolynomial::new(row).eval(c);
        }
    }
    let mut table = cot_pi_table().write();
    grow_cot_pi_table(&mut table, index);
    EvenPolynomial::new(&table[index]).eval(c)
}

/// dⁿ/dxⁿ cot(πx), given x and its complement xc = 1 − x (whichever is
/// smaller in magnitude gives the more accurate sine).
fn poly_cot_pi(n: i32, x: f64, xc: f64) -> f64 {
    let s = if x.abs() < xc.abs() { sin_pi(x) } else { sin_pi(xc) };
    let c = cos_pi(x);
    let nf = f64::from(n);

    match n {
        1 => return -PI / (s * s),
        2 => return 2.0 * PI * PI * c / s.powi(3),
        3..=20 => {
            let p = EvenPolynomial::new(COT_PI_DERIVATIVES[(n - 3) as usize]).eval(c);
            let value = PI.powi(n) * p / s.powi(n + 1);
            return if n & 1 == 0 { c * value } else { value };
        }
        _ => {}
    }

    let index = (n - 1) as usize;
    let mut sum = cot_pi_generated_sum(index, c);
    if index & 1 == 1 {
        // First coefficient is order 1: the polynomial is odd
        sum *= c;
    }
    if sum == 0.0 {
        return sum;
    }

    // πⁿ (n−1)! |sum| / |s|ⁿ⁺¹ overflows quickly, so assemble it in logs
    let overflow = if n & 1 == 1 { f64::NEG_INFINITY } else { f64::NAN };
    if s == 0.0 {
        return overflow;
    }
    let log_magnitude = nf * PI.ln() - s.abs().ln() * (nf + 1.0) + lgamma(nf) + sum.abs().ln();
    if log_magnitude > MAX_LOG {
        return overflow;
    }
    let mut result = log_magnitude.exp();
    if sum < 0.0 {
        result = -result;
    }
    if s < 0.0 && (n + 1) & 1 == 1 {
        result = -result;
    }
    result
}

// ============================================================================
// Public Functions
// ============================================================================

fn polygamma_imp(n: i32, x: f64) -> f64 {
    if x < 0.0 {
        if x.floor() == x {
            return pole_value(n, f64::INFINITY);
        }
        // ψ⁽ⁿ⁾(1 − x) + (−1)ⁿ⁺¹ ψ⁽ⁿ⁾(x) = (−1)ⁿ π dⁿ/dxⁿ cot(πx)
        let z = 1.0 - x;
        let result = polygamma_imp(n, z) + PI * poly_cot_pi(n, z, x);
        return if n & 1 == 1 { -result } else { result };
    }

    let nf = f64::from(n);
    let small_x_limit = (5.0 / nf).min(0.25);
    if x < small_x_limit {
        polygamma_near_zero(n, x)
    } else if x > asymptotic_threshold(n) {
        polygamma_at_infinity(n, x)
    } else if x == 1.0 {
        // ψ⁽ⁿ⁾(1) = (−1)ⁿ⁺¹ n! ζ(n+1)
        odd_positive(n, factorial(n as u32) * zeta(nf + 1.0))
    } else if x == 0.5 {
        // ψ⁽ⁿ⁾(½) = (−1)ⁿ⁺¹ n! (2ⁿ⁺¹ − 1) ζ(n+1)
        let result = odd_positive(n, factorial(n as u32) * zeta(nf + 1.0));
        if result.abs() >= f64::MAX * 2f64.powf(-nf - 1.0) {
            return if result < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        result * (2f64.powf(nf + 1.0) - 1.0)
    } else {
        polygamma_transition(n, x)
    }
}

/// Polygamma function ψ⁽ⁿ⁾(x), the n-th derivative of the digamma function.
///
/// Orders 0 and 1 defer to [`digamma`] and [`trigamma`]. For n ≥ 2 the
/// poles x = 0, −1, −2, … give +∞ for odd n and NaN for even n, where the
/// two one-sided limits have opposite signs.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `n < 0`.
///
/// # Example
///
/// ```
/// use specfun::prelude::*;
///
/// // ψ₂(1) = −2ζ(3)
/// let v = polygamma(2, 1.0).unwrap();
/// assert!((v + 2.0 * 1.2020569031595942).abs() < 1e-14);
/// assert!(polygamma(-1, 1.0).is_err());
/// ```
pub fn polygamma(n: i32, x: f64) -> Result<f64> {
    if n < 0 {
        return Err(Error::invalid_argument(
            "polygamma",
            "n",
            format!("order must be >= 0, got {n}"),
        ));
    }
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    Ok(match n {
        0 => digamma(x),
        1 => trigamma(x),
        _ => polygamma_imp(n, x),
    })
}
