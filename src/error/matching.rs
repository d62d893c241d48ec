//! Matching error module.
//!
//! This module defines the errors a search can produce. An empty
//! [`MatchSet`](crate::matchers::MatchSet) is never an error: it is the valid
//! answer "no occurrences". These variants cover the cases where no answer
//! could be computed at all.

use crate::matchers::AlgorithmId;
use thiserror::Error;

/// Errors that can occur while dispatching or running a matcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The algorithm is registered but has no implementation yet.
    #[error("Algorithm {0} is registered but not implemented")]
    NotImplemented(AlgorithmId),

    /// A required text or pattern was absent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No matcher is registered under the requested identifier.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Two implemented algorithms produced different match sets for the same input.
    #[error("Algorithms {reference} and {other} disagree on the match set")]
    Disagreement {
        /// The algorithm whose result was taken as reference
        reference: AlgorithmId,
        /// The algorithm whose result differed
        other: AlgorithmId,
    },

    /// A comparison was requested but no implemented matcher is registered.
    #[error("No implemented algorithm is registered")]
    EmptyRegistry,

    /// A comparison task panicked or was cancelled before producing a result.
    #[error("Comparison worker failed: {0}")]
    Worker(String),
}

/// Result type for matching operations.
pub type MatchResult<T> = Result<T, MatchError>;
