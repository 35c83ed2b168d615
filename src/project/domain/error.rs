//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating project values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectDomainError {
    /// A scorer produced a value outside `[0, upper_bound)`.
    #[error("score {score} is outside [0, {upper_bound})")]
    ScoreOutOfRange {
        /// The rejected score.
        score: f64,
        /// Exclusive upper bound of the scorer.
        upper_bound: f64,
    },
}

/// Error returned while parsing a move direction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown move direction: {0}")]
pub struct ParseMoveDirectionError(pub String);
