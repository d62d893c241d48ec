//! Engine configuration module.
//!
//! Controls what the match engine does when a selected algorithm cannot run
//! and how multi-algorithm comparisons are executed.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matchers::AlgorithmId;
use serde::{Deserialize, Serialize};

/// Match engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Algorithm run when the selected one is unavailable or not implemented
    pub fallback: AlgorithmId,

    /// Whether comparison runs execute on separate blocking tasks
    pub parallel_comparison: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback: AlgorithmId::Kmp,
            parallel_comparison: true,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !self.fallback.is_builtin() {
            return Err(ConfigError::ValidationError(format!(
                "engine.fallback must be a built-in algorithm, got {}",
                self.fallback
            )));
        }
        Ok(())
    }
}
