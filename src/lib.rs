//! # specfun
//!
//! **Numerically robust special functions for double precision.**
//!
//! specfun evaluates the transcendental functions that probability
//! distributions and statistical estimators lean on, across their full real
//! domain: small and large arguments, near poles, and negative (reflected)
//! arguments.
//!
//! ## Features
//!
//! - **Incomplete gamma**: P, Q, γ, Γ and ∂P/∂x, ∂²P/∂x²
//! - **Modified Bessel**: Iᵥ(x) and Kᵥ(x) for real order, plus log-domain
//!   twins that never overflow
//! - **Riemann zeta**: ζ(s) for all real s
//! - **Polygamma**: ψ, ψ₁ and ψₙ for any order n ≥ 0
//! - **Helpers**: factorial, Bernoulli numbers, sin(πx), cos(πx), aᶻ−1,
//!   multivariate gamma, ln erfc
//!
//! ## Building Blocks
//!
//! Every engine is assembled from three primitives in [`algorithm`]:
//! Horner polynomial evaluation, series summation, and the modified Lentz
//! continued fraction evaluator.
//!
//! ## Quick Start
//!
//! ```rust
//! use specfun::prelude::*;
//!
//! let p = gamma_p(2.0, 1.0);
//! assert!((p - 0.26424111765711533).abs() < 1e-14);
//!
//! let i0 = bessel_i(0.0, 1.0)?;
//! assert!((i0 - 1.2660658777520082).abs() < 1e-14);
//! # Ok::<(), specfun::error::Error>(())
//! ```
//!
//! ## Errors and Special Values
//!
//! Poles and undefined points return NaN or ±∞. Arguments outside a
//! function's real domain (a non-integer Bessel order at negative x, a
//! negative polygamma order) return [`error::Error::InvalidArgument`].
//!
//! ## Thread Safety
//!
//! All functions are pure. The few lookup tables are built lazily on first use
//! behind `OnceLock`, so every entry point may be called from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod constants;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::algorithm::special::{
        bernoulli_number, bessel_i, bessel_k, cos_pi, digamma, factorial, gamma_lower, gamma_p,
        gamma_p_derivative, gamma_p_second_derivative, gamma_q, gamma_upper, log_bessel_i,
        log_bessel_k, log_erfc, mgamma, mlgamma, polygamma, powm1, sin_pi, trigamma, zeta,
    };
}
