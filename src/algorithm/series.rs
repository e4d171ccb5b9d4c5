//! Summation of convergent infinite series.
//!
//! A series is any iterator producing successive terms. The concrete series
//! used by the special function engines are small structs holding the running
//! state (term index, accumulated product) and implementing [`Iterator`].
//!
//! Both drivers stop on the first of:
//! - the newest term is negligible relative to the running sum
//! - `max_terms` terms have been consumed
//! - the iterator is exhausted
//!
//! Hitting the cap is not an error here; the partial sum is returned. Call
//! sites that require guaranteed convergence check the count themselves.

use super::log_space::log_add;

/// Sum `series` starting from `init_value`.
///
/// Stops once `|factor · result| ≥ |term|`, so `factor` is the relative
/// tolerance (typically machine epsilon).
pub fn sum_series<S>(series: S, init_value: f64, factor: f64, max_terms: usize) -> f64
where
    S: IntoIterator<Item = f64>,
{
    let mut result = init_value;
    for term in series.into_iter().take(max_terms) {
        result += term;
        if (factor * result).abs() >= term.abs() {
            break;
        }
    }
    result
}

/// Sum a series whose terms are given as logarithms, returning the log of the
/// sum.
///
/// Terms are accumulated with [`log_add`]; summation stops once
/// `log_factor + result ≥ term`, i.e. the newest term is below the relative
/// tolerance e^`log_factor`.
pub fn sum_log_series<S>(series: S, log_factor: f64, max_terms: usize) -> f64
where
    S: IntoIterator<Item = f64>,
{
    let mut result = f64::NEG_INFINITY;
    for term in series.into_iter().take(max_terms) {
        result = log_add(result, term);
        if log_factor + result >= term {
            break;
        }
    }
    result
}
