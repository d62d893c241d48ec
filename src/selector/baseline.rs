//! Strategy that never prefers an algorithm.
//!
//! Used to benchmark and cross-check: the engine runs every registered
//! matcher and verifies that they agree.

use super::{AlgorithmChoice, Selector};

/// Always answers [`AlgorithmChoice::NoPreference`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineSelector;

impl Selector for BaselineSelector {
    fn choose(&self, _text: &[char], _pattern: &[char]) -> AlgorithmChoice {
        AlgorithmChoice::NoPreference
    }

    fn strategy_description(&self) -> String {
        "Baseline strategy: no preference, every algorithm runs and results are cross-checked."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_no_preference() {
        let text: Vec<char> = "a".repeat(1000).chars().collect();
        assert_eq!(BaselineSelector.choose(&text, &['a']), AlgorithmChoice::NoPreference);
        assert_eq!(BaselineSelector.choose(&[], &[]), AlgorithmChoice::NoPreference);
    }
}
