//! Elementary helpers shared by the special function engines
//!
//! Factorials, Bernoulli numbers, exact-at-integer trigonometry, aᶻ − 1,
//! the multivariate gamma function and ln erfc.

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use crate::algorithm::polynomial::Polynomial;
use crate::constants::{PI, SQRT_PI};

// ============================================================================
// Factorial
// ============================================================================

/// n! for n ≤ 20, exactly representable.
const FACTORIALS: [f64; 21] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    121645100408832000.0,
    2432902008176640000.0,
];

/// n! as a double.
///
/// Exact from the table up to 20!, then rounded Γ(n+1). Overflows to +∞ for
/// n > 170.
pub fn factorial(n: u32) -> f64 {
    match FACTORIALS.get(n as usize) {
        Some(&f) => f,
        None => (libm::tgamma(f64::from(n) + 1.0) + 0.5).floor(),
    }
}

// ============================================================================
// Bernoulli Numbers
// ============================================================================

/// Largest index k for which B₂ₖ is kept in the precomputed table.
const MAX_TABULATED_B2N: usize = 60;

/// B₀, B₂, …, B₁₂₀ as doubles, built once with exact rational arithmetic.
fn b2n_table() -> &'static [f64] {
    static TABLE: OnceLock<Vec<f64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        log::debug!("building Bernoulli table up to B_{}", 2 * MAX_TABULATED_B2N);
        let all = bernoulli_recurrence(2 * MAX_TABULATED_B2N);
        all.iter()
            .step_by(2)
            .map(|b| b.to_f64().unwrap_or(f64::NAN))
            .collect()
    })
}

/// B₀..=Bₘ by Σⱼ₌₀ᵐ C(m+1, j)·Bⱼ = 0 (B₁ = −½ in this form).
fn bernoulli_recurrence(m: usize) -> Vec<BigRational> {
    let mut b: Vec<BigRational> = Vec::with_capacity(m + 1);
    b.push(BigRational::from_integer(BigInt::from(1)));
    for k in 1..=m {
        let mut sum = BigRational::zero();
        let mut binom = BigInt::from(1);
        for (j, bj) in b.iter().enumerate() {
            sum += BigRational::from_integer(binom.clone()) * bj;
            binom = binom * BigInt::from(k + 1 - j) / BigInt::from(j + 1);
        }
        b.push(-sum / BigRational::from_integer(BigInt::from(k + 1)));
    }
    b
}

/// Bₙ by the Akiyama–Tanigawa algorithm (B₁ = +½).
fn akiyama_tanigawa(n: usize) -> BigRational {
    let mut a: Vec<BigRational> = Vec::with_capacity(n + 1);
    for m in 0..=n {
        a.push(BigRational::new(BigInt::from(1), BigInt::from(m + 1)));
        for j in (1..=m).rev() {
            let diff = &a[j - 1] - &a[j];
            a[j - 1] = BigRational::from_integer(BigInt::from(j)) * diff;
        }
    }
    a.swap_remove(0)
}

/// The n-th Bernoulli number, with the convention B₁ = +½.
///
/// Even indices up to 120 come from a cached table; larger even indices are
/// computed exactly on demand. Odd indices above 1 are zero.
pub fn bernoulli_number(n: u32) -> f64 {
    match n {
        1 => 0.5,
        n if n % 2 == 1 => 0.0,
        n => bernoulli_b2n(n as usize / 2),
    }
}

/// B₂ₖ as a double.
pub(crate) fn bernoulli_b2n(k: usize) -> f64 {
    match b2n_table().get(k) {
        Some(&b) => b,
        None => akiyama_tanigawa(2 * k).to_f64().unwrap_or(f64::NAN),
    }
}

// ============================================================================
// Trigonometric Functions of πx
// ============================================================================

/// sin(πx), exactly zero at integers and ±1 at half-integers.
pub fn sin_pi(x: f64) -> f64 {
    if x < 0.0 {
        return -sin_pi(-x);
    }
    if x < 0.5 {
        return (PI * x).sin();
    }
    // Reduce to [0, 0.5] tracking the sign of the half period we land in
    let (mut invert, x) = if x < 1.0 { (true, -x) } else { (false, x) };
    let fl = x.floor();
    if fl % 2.0 != 0.0 {
        invert = !invert;
    }
    let mut rem = x - fl;
    if rem > 0.5 {
        rem = 1.0 - rem;
    }
    let s = if rem == 0.5 { 1.0 } else { (PI * rem).sin() };
    if invert { -s } else { s }
}

/// cos(πx), exactly zero at half-integers and ±1 at integers.
pub fn cos_pi(x: f64) -> f64 {
    if x.abs() < 0.25 {
        return (PI * x).cos();
    }
    let x = x.abs();
    let fl = x.floor();
    let mut invert = fl % 2.0 != 0.0;
    let mut rem = x - fl;
    if rem > 0.5 {
        rem = 1.0 - rem;
        invert = !invert;
    }
    if rem == 0.5 {
        return 0.0;
    }
    let c = if rem > 0.25 {
        (PI * (0.5 - rem)).sin()
    } else {
        (PI * rem).cos()
    };
    if invert { -c } else { c }
}

// ============================================================================
// Powers
// ============================================================================

/// aᶻ − 1 without cancellation when aᶻ is close to 1.
pub fn powm1(a: f64, z: f64) -> f64 {
    if a.abs() < 1.0 || z.abs() < 1.0 {
        let p = a.ln() * z;
        if p.abs() < 2.0 {
            return p.exp_m1();
        }
    }
    a.powf(z) - 1.0
}

// ============================================================================
// Multivariate Gamma
// ============================================================================

/// Multivariate gamma function Γₖ(x) = π^{k(k−1)/4} ∏ᵢ₌₁ᵏ Γ(x + (1−i)/2).
pub fn mgamma(x: f64, k: u32) -> f64 {
    let kf = f64::from(k);
    (1..=k).fold(PI.powf(kf * (kf - 1.0) / 4.0), |acc, i| {
        acc * libm::tgamma((2.0 * x + 1.0 - f64::from(i)) / 2.0)
    })
}

/// ln Γₖ(x), the logarithm of [`mgamma`].
pub fn mlgamma(x: f64, k: u32) -> f64 {
    let kf = f64::from(k);
    (1..=k).fold(kf * (kf - 1.0) / 4.0 * PI.ln(), |acc, i| {
        acc + libm::lgamma((2.0 * x + 1.0 - f64::from(i)) / 2.0)
    })
}

// ============================================================================
// Logarithm of erfc
// ============================================================================

/// Below this x², ln erfc(x) is a power series in x/√π.
const LOG_ERFC_SERIES_LIMIT: f64 = 2.460_783_300_575_925_1e-2;

/// Series coefficients for −½·ln erfc(√π·y).
const LOG_ERFC_SMALL: [f64; 15] = [
    0.0,
    1.0,
    1.0,
    (4.0 - PI) / 3.0,
    2.0 * (1.0 - PI / 3.0),
    -0.001829764677455021,
    0.026296515210574650,
    -0.016215753788354040,
    0.001259939617621160,
    0.005569646491380000,
    -0.004556333980200000,
    0.000946158903200000,
    0.001320024317400000,
    -0.001429060000000000,
    0.000482040000000000,
];

/// Hart et al. (1968) rational approximation of erfc(x)·e^{x²} for x > 8.
const LOG_ERFC_LARGE_P: [f64; 6] = [
    2.9788656263939928886200000000,
    7.4097406059647417944250000000,
    6.1602098531096305440906000000,
    5.0190497267842674634500580000,
    1.2753666447299659524795852640,
    0.5641895835477550741253201704,
];

const LOG_ERFC_LARGE_Q: [f64; 7] = [
    3.3690752069827527677000000000,
    9.6089653271927878706980000000,
    17.081440747466004315710950000,
    12.048951927855129036034049100,
    9.3960340162350541504305796480,
    2.2605285207673269695918669450,
    1.0000000000000000000000000000,
];

/// ln erfc(x), finite for large x where erfc(x) itself underflows.
pub fn log_erfc(x: f64) -> f64 {
    if x * x < LOG_ERFC_SERIES_LIMIT {
        -2.0 * Polynomial::new(&LOG_ERFC_SMALL).eval(x / SQRT_PI)
    } else if x > 8.0 {
        let ratio =
            Polynomial::new(&LOG_ERFC_LARGE_P).eval(x) / Polynomial::new(&LOG_ERFC_LARGE_Q).eval(x);
        ratio.ln() - x * x
    } else {
        libm::erfc(x).ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() <= tol * b.abs().max(1.0),
            "expected {b}, got {a}"
        );
    }

    #[test]
    fn test_factorial_table_and_gamma() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(10), 3628800.0);
        assert_eq!(factorial(20), 2432902008176640000.0);
        assert_close(factorial(25), 1.5511210043330986e25, 1e-14);
        assert!(factorial(170).is_finite());
        assert_eq!(factorial(171), f64::INFINITY);
    }

    #[test]
    fn test_bernoulli_small() {
        assert_eq!(bernoulli_number(0), 1.0);
        assert_eq!(bernoulli_number(1), 0.5);
        assert_close(bernoulli_number(2), 1.0 / 6.0, 1e-15);
        assert_eq!(bernoulli_number(3), 0.0);
        assert_close(bernoulli_number(4), -1.0 / 30.0, 1e-15);
        assert_close(bernoulli_number(12), -691.0 / 2730.0, 1e-15);
        assert_close(bernoulli_number(24), -86580.253113553113553, 1e-14);
    }

    #[test]
    fn test_table_matches_akiyama_tanigawa() {
        for k in [1usize, 5, 17, 30] {
            let exact = akiyama_tanigawa(2 * k).to_f64().unwrap();
            assert_close(bernoulli_b2n(k), exact, 1e-15);
        }
        // Beyond the table
        let b122 = bernoulli_b2n(61);
        let b120 = bernoulli_b2n(60);
        assert!(b122.is_finite() && b120.is_finite());
        assert!(b122.signum() == -b120.signum());
    }

    #[test]
    fn test_sin_cos_pi_exact_points() {
        assert_eq!(sin_pi(1.0), 0.0);
        assert_eq!(sin_pi(0.5), 1.0);
        assert_eq!(sin_pi(1.5), -1.0);
        assert_eq!(sin_pi(-2.5), -1.0);
        assert_eq!(cos_pi(0.5), 0.0);
        assert_eq!(cos_pi(1.0), -1.0);
        assert_eq!(cos_pi(2.0), 1.0);
        assert_eq!(cos_pi(-3.5), 0.0);
    }

    #[test]
    fn test_sin_cos_pi_values() {
        for &x in &[0.1, 0.3, 0.7, 1.25, 2.9, -0.6, -4.3] {
            assert_close(sin_pi(x), (PI * x).sin(), 1e-14);
            assert_close(cos_pi(x), (PI * x).cos(), 1e-14);
        }
    }

    #[test]
    fn test_powm1() {
        assert_close(powm1(2.0, 3.0), 7.0, 1e-15);
        // aᶻ close to 1: relative accuracy is kept
        let r = powm1(1.5, 1e-12);
        let expected = 1.5f64.ln() * 1e-12;
        assert!(((r - expected) / expected).abs() < 1e-10);
        let r = powm1(0.5, 1e-12);
        let expected = 0.5f64.ln() * 1e-12;
        assert!(((r - expected) / expected).abs() < 1e-10);
        assert_eq!(powm1(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_mgamma() {
        assert!((mgamma(12.0, 2) - 8.418923e14).abs() < 1e10);
        assert!((mgamma(12.0, 3) - 9.597751e21).abs() < 1e15);
        assert!((mlgamma(12.0, 2) - 8.418923e14f64.ln()).abs() < 1e-4);
        assert!((mlgamma(12.0, 3) - 9.597751e21f64.ln()).abs() < 1e-4);
        // Γ₁ is the ordinary gamma function
        assert_close(mgamma(4.5, 1), libm::tgamma(4.5), 1e-15);
    }

    #[test]
    fn test_log_erfc_regimes() {
        // tiny argument series
        assert_close(log_erfc(0.01), libm::erfc(0.01).ln(), 1e-13);
        assert_close(log_erfc(-0.1), libm::erfc(-0.1).ln(), 1e-13);
        // direct
        assert_close(log_erfc(3.0), libm::erfc(3.0).ln(), 1e-13);
        // large argument: erfc(30) underflows
        assert!(libm::erfc(30.0) == 0.0);
        let asym = -900.0 - 30.0f64.ln() - 0.5 * PI.ln() + (1.0 - 1.0 / 1800.0f64).ln();
        assert_close(log_erfc(30.0), asym, 1e-8);
    }
}
