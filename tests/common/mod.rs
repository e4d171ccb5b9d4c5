//! Common test utilities
#![allow(dead_code)]

/// Assert a value is close to its reference within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_close(actual: f64, expected: f64, rtol: f64, atol: f64, msg: &str) {
    let diff = (actual - expected).abs();
    let tol = atol + rtol * expected.abs();
    assert!(
        diff <= tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        actual,
        expected,
        diff,
        tol
    );
}

/// Assert a value matches its reference to a relative tolerance
pub fn assert_rel(actual: f64, expected: f64, rtol: f64, msg: &str) {
    assert_close(actual, expected, rtol, 0.0, msg);
}
