//! Integration tests for the helper functions shared by the special function
//! engines

mod common;

use common::{assert_close, assert_rel};
use specfun::algorithm::special::{gamma, lgamma, tgamma1pm1};
use specfun::prelude::*;
use std::f64::consts::PI;

// ============================================================================
// Factorial and Bernoulli Numbers
// ============================================================================

#[test]
fn test_factorial() {
    assert_eq!(factorial(0), 1.0);
    assert_eq!(factorial(5), 120.0);
    assert_rel(factorial(25), 1.5511210043330986e25, 1e-15, "25!");
    assert!(factorial(170).is_finite());
    assert_eq!(factorial(171), f64::INFINITY);
}

#[test]
fn test_bernoulli_numbers() {
    assert_eq!(bernoulli_number(1), 0.5);
    assert_eq!(bernoulli_number(7), 0.0);
    assert_rel(bernoulli_number(6), 1.0 / 42.0, 1e-15, "B6");
    assert_rel(bernoulli_number(30), 601580873.9006424, 1e-15, "B30");
    // Past the cached table
    assert_rel(bernoulli_number(200), -3.647077264519136e215, 1e-14, "B200");
}

// ============================================================================
// Gamma Helpers
// ============================================================================

#[test]
fn test_gamma_and_lgamma() {
    assert_rel(gamma(5.0), 24.0, 1e-14, "Γ(5)");
    assert_rel(gamma(0.5), PI.sqrt(), 1e-14, "Γ(0.5)");
    assert_rel(lgamma(100.0), 359.1342053695754, 1e-14, "ln Γ(100)");
    assert_close(tgamma1pm1(1e-10), -0.5772156649015329e-10, 1e-9, 0.0, "Γ(1+ε) − 1");
    assert_rel(tgamma1pm1(0.5), PI.sqrt() / 2.0 - 1.0, 1e-14, "Γ(1.5) − 1");
}

#[test]
fn test_multivariate_gamma() {
    // Γ₃(2.5) = π^{3/2} Γ(2.5) Γ(2) Γ(1.5)
    assert_rel(mgamma(2.5, 3), 6.560031872859324, 1e-14, "Γ₃(2.5)");
    assert_rel(mgamma(4.0, 1), 6.0, 1e-14, "Γ₁(4)");
    assert_close(mgamma(12.0, 2), 8.418923e14, 0.0, 1e10, "Γ₂(12)");
    for &(x, k) in &[(2.5, 3), (7.0, 4), (40.0, 10)] {
        assert_rel(mlgamma(x, k), mgamma(x, k).ln(), 1e-13, &format!("ln Γ{k}({x})"));
    }
}

// ============================================================================
// Trigonometry and Powers
// ============================================================================

#[test]
fn test_sin_cos_pi_exact_points() {
    for k in -6..=6 {
        let x = f64::from(k);
        assert_eq!(sin_pi(x), 0.0, "sin(π·{k})");
        assert_eq!(cos_pi(x + 0.5), 0.0, "cos(π·({k} + ½))");
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        assert_eq!(cos_pi(x), sign, "cos(π·{k})");
        assert_eq!(sin_pi(x + 0.5), sign, "sin(π·({k} + ½))");
    }
}

#[test]
fn test_sin_cos_pi_values() {
    for &x in &[0.1, 0.3, -0.7, 2.25, 13.8] {
        assert_close(sin_pi(x), (PI * x).sin(), 1e-13, 1e-14, &format!("sin(π·{x})"));
        assert_close(cos_pi(x), (PI * x).cos(), 1e-13, 1e-14, &format!("cos(π·{x})"));
    }
}

#[test]
fn test_powm1() {
    assert_rel(powm1(1.0000001, 100.0), 1.000004950600043e-5, 1e-14, "1.0000001^100 − 1");
    assert_rel(powm1(2.0, 10.0), 1023.0, 1e-15, "2^10 − 1");
    assert_rel(powm1(0.5, -1e-9), 2f64.ln() * 1e-9, 1e-8, "0.5^(−1e−9) − 1");
    assert_eq!(powm1(3.0, 0.0), 0.0);
}

// ============================================================================
// ln erfc
// ============================================================================

#[test]
fn test_log_erfc() {
    assert_rel(log_erfc(-3.0), 0.6931361352504468, 1e-14, "ln erfc(−3)");
    assert_rel(log_erfc(0.5), -0.7350111298370844, 1e-14, "ln erfc(0.5)");
    // erfc(30) ≈ 1e−393 underflows
    assert_rel(log_erfc(30.0), -903.9741171106439, 1e-14, "ln erfc(30)");
    assert_eq!(log_erfc(0.0), 0.0);
}

#[test]
fn test_log_erfc_continuous_across_branches() {
    let limit = 2.460_783_300_575_925_1e-2f64.sqrt();
    for &x in &[limit, 8.0] {
        let below = log_erfc(x - 1e-12);
        let above = log_erfc(x + 1e-12);
        assert_close(below, above, 1e-12, 1e-12, &format!("ln erfc across {x}"));
    }
}
