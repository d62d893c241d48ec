//! Selector configuration module.
//!
//! Chooses the selection strategy and carries the heuristic thresholds.

use super::{ConfigResult, Validate};
use crate::selector::{HeuristicThresholds, SelectorStrategy};
use serde::{Deserialize, Serialize};

/// Algorithm selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorConfig {
    /// Strategy used when the caller does not request an algorithm
    pub strategy: SelectorStrategy,

    /// Thresholds for the heuristic strategy
    pub thresholds: HeuristicThresholds,
}

impl Validate for SelectorConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.thresholds.validate()
    }
}
