//! Algorithm selection.
//!
//! A [`Selector`] looks at a text/pattern pair and suggests which matcher to
//! run. Its answer is advisory: every matcher returns the same result, so a
//! poor choice only costs time. [`AlgorithmChoice::NoPreference`] asks the
//! engine to run everything and cross-check instead.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::selector::SelectorConfig;
use crate::matchers::AlgorithmId;

pub mod analysis;
pub mod baseline;
pub mod heuristic;
pub mod simple;

pub use analysis::PatternProfile;
pub use baseline::BaselineSelector;
pub use heuristic::{HeuristicSelector, HeuristicThresholds};
pub use simple::SimpleSelector;

/// A selector's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmChoice {
    /// Run this algorithm.
    Algorithm(AlgorithmId),
    /// Run every algorithm and compare.
    NoPreference,
}

impl fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(id) => write!(f, "{id}"),
            Self::NoPreference => f.write_str("no preference"),
        }
    }
}

/// Chooses a matcher for a text/pattern pair.
#[cfg_attr(test, mockall::automock)]
pub trait Selector: Send + Sync {
    /// Suggests an algorithm for searching `pattern` in `text`.
    fn choose(&self, text: &[char], pattern: &[char]) -> AlgorithmChoice;

    /// Human-readable description of the strategy, for reporting only.
    fn strategy_description(&self) -> String;
}

/// Available selection strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStrategy {
    /// [`HeuristicSelector`]
    #[default]
    Heuristic,
    /// [`SimpleSelector`]
    Simple,
    /// [`BaselineSelector`]
    Baseline,
}

/// Builds the selector described by `config`.
pub fn from_config(config: &SelectorConfig) -> Arc<dyn Selector> {
    match config.strategy {
        SelectorStrategy::Heuristic => Arc::new(HeuristicSelector::new(config.thresholds.clone())),
        SelectorStrategy::Simple => Arc::new(SimpleSelector),
        SelectorStrategy::Baseline => Arc::new(BaselineSelector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let text: Vec<char> = "0123456789".chars().collect();
        let pattern: Vec<char> = "345".chars().collect();

        let mut config = SelectorConfig::default();
        let selector = from_config(&config);
        assert_eq!(
            selector.choose(&text, &pattern),
            AlgorithmChoice::Algorithm(AlgorithmId::Naive)
        );

        config.strategy = SelectorStrategy::Baseline;
        let selector = from_config(&config);
        assert_eq!(selector.choose(&text, &pattern), AlgorithmChoice::NoPreference);
    }

    #[test]
    fn test_choice_display() {
        assert_eq!(AlgorithmChoice::Algorithm(AlgorithmId::Kmp).to_string(), "KMP");
        assert_eq!(AlgorithmChoice::NoPreference.to_string(), "no preference");
    }
}
