//! Fixed-coefficient polynomial evaluation by Horner's rule.
//!
//! # Coefficient Convention
//!
//! Coefficients are stored in ascending power order:
//! - `coeffs[0]` = constant term (c₀)
//! - `coeffs[n]` = leading coefficient (cₙ)
//! - Polynomial: p(z) = c₀ + c₁z + c₂z² + ... + cₙzⁿ
//!
//! The rational approximations in the special function engines are written as
//! `P.eval(z) / Q.eval(z)` over pairs of these.

use super::log_space::log_add;

/// A polynomial with coefficients in ascending power order.
///
/// Borrows its coefficients, so approximation tables can live in `const`
/// arrays and be wrapped at the call site without allocation.
#[derive(Debug, Clone, Copy)]
pub struct Polynomial<'a> {
    coefficients: &'a [f64],
}

impl<'a> Polynomial<'a> {
    /// Wrap a non-empty coefficient slice.
    pub const fn new(coefficients: &'a [f64]) -> Self {
        assert!(
            !coefficients.is_empty(),
            "polynomial needs at least one coefficient"
        );
        Self { coefficients }
    }

    /// Degree of the polynomial (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate Σ cᵢ·zⁱ with n-1 multiply-adds.
    pub fn eval(&self, z: f64) -> f64 {
        let n = self.coefficients.len() - 1;
        self.coefficients[..n]
            .iter()
            .rev()
            .fold(self.coefficients[n], |sum, &c| sum * z + c)
    }
}

/// A polynomial in even powers only: p(z) = c₀ + c₁z² + c₂z⁴ + ...
///
/// Stores only the non-zero coefficients and evaluates the underlying
/// [`Polynomial`] at z².
#[derive(Debug, Clone, Copy)]
pub struct EvenPolynomial<'a> {
    inner: Polynomial<'a>,
}

impl<'a> EvenPolynomial<'a> {
    /// Wrap the coefficients of z⁰, z², z⁴, ...
    pub const fn new(coefficients: &'a [f64]) -> Self {
        Self {
            inner: Polynomial::new(coefficients),
        }
    }

    /// Evaluate at `z` by evaluating the dense polynomial at `z²`.
    pub fn eval(&self, z: f64) -> f64 {
        self.inner.eval(z * z)
    }
}

/// A polynomial with positive coefficients held as logarithms.
///
/// `eval(ln z)` returns ln p(z), with each Horner step carried out as a
/// log-add. Used where both the argument and the result would overflow in the
/// linear domain.
#[derive(Debug, Clone)]
pub struct LogPolynomial {
    log_coefficients: Vec<f64>,
}

impl LogPolynomial {
    /// Build from ln(cᵢ) values in ascending power order.
    pub fn new(log_coefficients: Vec<f64>) -> Self {
        assert!(
            !log_coefficients.is_empty(),
            "polynomial needs at least one coefficient"
        );
        Self { log_coefficients }
    }

    /// Build from linear-domain coefficients, all of which must be positive.
    pub fn from_coefficients(coefficients: &[f64]) -> Self {
        debug_assert!(coefficients.iter().all(|&c| c > 0.0));
        Self::new(coefficients.iter().map(|c| c.ln()).collect())
    }

    /// Evaluate ln p(z) given `log_z` = ln z.
    pub fn eval(&self, log_z: f64) -> f64 {
        let n = self.log_coefficients.len() - 1;
        self.log_coefficients[..n]
            .iter()
            .rev()
            .fold(self.log_coefficients[n], |sum, &c| log_add(sum + log_z, c))
    }
}
