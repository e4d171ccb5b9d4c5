//! Numerical building blocks and the special function engines built on them
//!
//! # Primitives
//!
//! - [`polynomial`] - Horner evaluation of fixed-coefficient polynomials,
//!   including even-power and log-coefficient variants
//! - [`series`] - Summation drivers for convergent series (linear and log
//!   domain)
//! - [`continued_fraction`] - Modified Lentz evaluation of continued fractions
//! - [`log_space`] - `log_add` / `log_sub` for values stored as logarithms
//!
//! # Engines
//!
//! - [`special`] - Incomplete gamma, modified Bessel, zeta and polygamma
//!   functions, composed from the primitives above
//!
//! ```text
//! ┌──────────────┐  ┌──────────────┐  ┌─────────────────────┐
//! │  Polynomial  │  │    Series    │  │ Continued fraction  │
//! └──────┬───────┘  └──────┬───────┘  └──────────┬──────────┘
//!        └─────────────────┼─────────────────────┘
//!                          ▼
//!          ┌──────────────────────────────┐
//!          │  special::scalar engines     │
//!          │  (regime selection per call) │
//!          └──────────────────────────────┘
//! ```

pub mod continued_fraction;
pub mod log_space;
pub mod polynomial;
pub mod series;
pub mod special;

pub use continued_fraction::eval_continued_fraction;
pub use log_space::{log_add, log_sub};
pub use polynomial::{EvenPolynomial, LogPolynomial, Polynomial};
pub use series::{sum_log_series, sum_series};
