// File: crates/trend-core/src/error.rs
// Summary: Error type shared by the estimator and the series model.

use thiserror::Error;

pub type TrendResult<T> = Result<T, TrendError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendError {
    /// No observations at all; the mean has no denominator.
    #[error("empty observation sequence")]
    EmptyData,

    /// Too few observations for the requested statistic.
    #[error("need at least {required} observations, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// Category labels and values disagree in length.
    #[error("expected {expected} values to match the categories, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}
