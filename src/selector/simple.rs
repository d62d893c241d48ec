//! Minimal length-based strategy.
//!
//! Kept as a lightweight alternative to the heuristic: it only looks at the
//! two lengths and the first few pattern characters.

use super::{AlgorithmChoice, Selector};
use crate::matchers::AlgorithmId;

/// Patterns up to this length use the naive scan.
pub const SIMPLE_SHORT_PATTERN_LEN: usize = 3;
/// Pattern characters inspected for a repeating first character.
pub const SIMPLE_PREFIX_SAMPLE_LEN: usize = 5;
/// Occurrences of the first character that make a prefix "repeating".
pub const SIMPLE_PREFIX_MIN_REPEATS: usize = 3;
/// Patterns longer than this may use rolling hash.
pub const SIMPLE_LONG_PATTERN_LEN: usize = 10;
/// Texts longer than this may use rolling hash.
pub const SIMPLE_LONG_TEXT_LEN: usize = 1000;

/// Short patterns → Naive, repeating prefix → KMP, long pattern in long text → RabinKarp.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSelector;

fn has_repeating_prefix(pattern: &[char]) -> bool {
    if pattern.len() < 2 {
        return false;
    }
    let first = pattern[0];
    let sample = &pattern[..pattern.len().min(SIMPLE_PREFIX_SAMPLE_LEN)];
    sample.iter().filter(|&&c| c == first).count() >= SIMPLE_PREFIX_MIN_REPEATS
}

impl Selector for SimpleSelector {
    fn choose(&self, text: &[char], pattern: &[char]) -> AlgorithmChoice {
        let (n, m) = (text.len(), pattern.len());
        let algorithm = if m <= SIMPLE_SHORT_PATTERN_LEN {
            AlgorithmId::Naive
        } else if has_repeating_prefix(pattern) {
            AlgorithmId::Kmp
        } else if m > SIMPLE_LONG_PATTERN_LEN && n > SIMPLE_LONG_TEXT_LEN {
            AlgorithmId::RabinKarp
        } else {
            AlgorithmId::Naive
        };
        tracing::debug!(n, m, %algorithm, "simple selection");
        AlgorithmChoice::Algorithm(algorithm)
    }

    fn strategy_description(&self) -> String {
        format!(
            "Simple selection strategy: Naive for patterns of at most {SIMPLE_SHORT_PATTERN_LEN} \
             characters, KMP when the first character repeats at least \
             {SIMPLE_PREFIX_MIN_REPEATS} times in the first {SIMPLE_PREFIX_SAMPLE_LEN}, RabinKarp \
             for patterns over {SIMPLE_LONG_PATTERN_LEN} characters in texts over \
             {SIMPLE_LONG_TEXT_LEN}, Naive otherwise."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_rules() {
        let long_text: Vec<char> = "x".repeat(2000).chars().collect();
        let cases = [
            ("abc", AlgorithmId::Naive),
            ("aabab", AlgorithmId::Kmp),
            ("abcdefghijkl", AlgorithmId::RabinKarp),
            ("abcdef", AlgorithmId::Naive),
        ];
        for (pattern, expected) in cases {
            assert_eq!(
                SimpleSelector.choose(&long_text, &chars(pattern)),
                AlgorithmChoice::Algorithm(expected),
                "pattern {pattern}"
            );
        }
    }

    #[test]
    fn test_long_pattern_short_text_is_naive() {
        assert_eq!(
            SimpleSelector.choose(&chars("short text"), &chars("abcdefghijkl")),
            AlgorithmChoice::Algorithm(AlgorithmId::Naive)
        );
    }
}
