//! Scalar implementations of the special functions
//!
//! # Algorithms
//!
//! - **factorial / bernoulli_number**: table lookup, exact rational
//!   arithmetic beyond the table
//! - **tgamma1pm1**: rational ln Γ fits on [1, 3) with `exp_m1`
//! - **gamma_p / gamma_q / gamma_lower / gamma_upper**: finite sums, power
//!   series, Legendre continued fraction (Lentz), Temme expansion
//! - **bessel_i / bessel_k**: rational fits for orders 0 and 1; Temme series,
//!   CF1, CF2 (Steed) and forward recurrence for general order; Debye
//!   expansion for |v| ≥ 10⁴
//! - **log_bessel_i / log_bessel_k**: the same engine with log-space sums
//! - **zeta**: Bernoulli closed forms, Borwein series, banded rational fits,
//!   functional equation for s < 0
//! - **digamma / trigamma**: rational fits plus recurrence and reflection
//! - **polygamma**: ζ series near 0, Bernoulli asymptotic series, reflection
//!   through derivatives of cot(πx)

mod bessel;
mod bessel_log;
mod elementary;
pub mod gamma_functions;
mod incomplete_gamma;
mod polygamma;
mod zeta;

pub use bessel::*;
pub use bessel_log::*;
pub use elementary::*;
pub use gamma_functions::*;
pub use incomplete_gamma::*;
pub use polygamma::*;
pub use zeta::*;
