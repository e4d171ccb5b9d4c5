//! Error types for specfun

use thiserror::Error;

/// Result type alias using specfun's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when evaluating a special function.
///
/// Poles and indeterminate forms are not errors: they are reported as NaN or
/// ±∞ in the returned value. Only arguments the caller must never pass end up
/// here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Argument outside the domain of a real-valued function
    #[error("Invalid argument '{arg}' to {function}: {reason}")]
    InvalidArgument {
        /// The function that rejected the argument
        function: &'static str,
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(
        function: &'static str,
        arg: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            function,
            arg,
            reason: reason.into(),
        }
    }
}

/// Abort the current evaluation after a series or continued fraction ran out
/// of iterations.
///
/// Reaching the cap means the regime selection sent an argument to a method
/// that cannot converge there, so no value is returned.
#[cold]
#[track_caller]
pub(crate) fn convergence_failure(routine: &'static str, iterations: usize) -> ! {
    log::error!("{routine}: no convergence after {iterations} terms");
    panic!("exceeded maximum series evaluations in {routine} ({iterations} terms)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::invalid_argument("polygamma", "n", "order must be >= 0, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'n' to polygamma: order must be >= 0, got -1"
        );
    }

    #[test]
    #[should_panic(expected = "exceeded maximum series evaluations")]
    fn test_convergence_failure_panics() {
        convergence_failure("test", 3);
    }
}
