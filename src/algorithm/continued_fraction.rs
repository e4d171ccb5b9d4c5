//! Continued fraction evaluation by the modified Lentz algorithm.
//!
//! A continued fraction is any iterator of `(aₙ, bₙ)` pairs. The evaluator
//! returns
//!
//! ```text
//!            a₁
//! f = ─────────────────
//!     b₁ +     a₂
//!          ───────────
//!          b₂ +  a₃
//!               ──────
//!               b₃ + …
//! ```
//!
//! Lentz's method keeps the ratios of successive convergents `C` and `D`
//! instead of the convergents themselves, replacing an exact zero in either
//! with a tiny sentinel so that no step divides by zero.

use crate::error::convergence_failure;

/// Sentinel substituted for exact zeros in the convergent ratios.
const TINY: f64 = f64::MIN_POSITIVE;

/// Evaluate the continued fraction `a₁/(b₁ + a₂/(b₂ + …))`.
///
/// Stops when the per-step update `δ = C·D` satisfies `|δ − 1| ≤ factor`.
///
/// # Panics
///
/// If `max_terms` pairs are consumed without convergence, or the iterator
/// ends before converging. Either means the fraction was applied outside the
/// region where it converges.
pub fn eval_continued_fraction<F>(fraction: F, factor: f64, max_terms: usize) -> f64
where
    F: IntoIterator<Item = (f64, f64)>,
{
    let mut fraction = fraction.into_iter();
    let Some((a0, b0)) = fraction.next() else {
        convergence_failure("continued fraction", 0);
    };

    let mut f = if b0 == 0.0 { TINY } else { b0 };
    let mut c = f;
    let mut d = 0.0;

    for _ in 0..max_terms {
        let Some((a, b)) = fraction.next() else {
            break;
        };
        d = b + a * d;
        if d == 0.0 {
            d = TINY;
        }
        c = b + a / c;
        if c == 0.0 {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = c * d;
        f *= delta;
        if (delta - 1.0).abs() <= factor {
            return a0 / f;
        }
    }
    convergence_failure("continued fraction", max_terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EPSILON, SERIES_ITERATIONS_MAX};

    #[test]
    fn test_golden_ratio() {
        // 1/(1 + 1/(1 + …)) = 1/φ
        let f = eval_continued_fraction(
            std::iter::repeat((1.0, 1.0)),
            EPSILON,
            SERIES_ITERATIONS_MAX,
        );
        let phi = (1.0 + 5f64.sqrt()) / 2.0;
        assert!((f - 1.0 / phi).abs() < 1e-15);
    }

    #[test]
    fn test_sqrt_two() {
        // √2 − 1 = 1/(2 + 1/(2 + …))
        let f = eval_continued_fraction(
            std::iter::repeat((1.0, 2.0)),
            EPSILON,
            SERIES_ITERATIONS_MAX,
        );
        assert!((f - (2f64.sqrt() - 1.0)).abs() < 1e-15);
    }

    #[test]
    fn test_zero_leading_denominator() {
        // tan(1) = 1/(1 − 1/(3 − 1/(5 − …))), with the leading b₀ = 0 term
        // exercising the sentinel.
        let terms = std::iter::once((1.0, 0.0))
            .chain(std::iter::once((1.0, 1.0)))
            .chain((1..).map(|k| (-1.0, (2 * k + 1) as f64)));
        let f = eval_continued_fraction(terms, EPSILON, SERIES_ITERATIONS_MAX);
        // a₀/f with f = 0 + 1/(1 − …) = tan(1), so the result is 1/tan(1)
        assert!((f - 1.0 / 1f64.tan()).abs() < 1e-14);
    }

    #[test]
    #[should_panic(expected = "exceeded maximum series evaluations")]
    fn test_divergent_fraction_panics() {
        // Alternating partial denominators never settle.
        let terms = (0..).map(|k| (1.0, if k % 2 == 0 { 1.0 } else { -1.0 }));
        eval_continued_fraction(terms, EPSILON, 50);
    }
}
