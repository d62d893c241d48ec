//! Length and alphabet heuristic.
//!
//! The thresholds below are calibration choices, not derived from a cost
//! model. They are named so they can be tuned through configuration, and the
//! defaults must stay as they are.

use serde::{Deserialize, Serialize};

use super::analysis::PatternProfile;
use super::{AlgorithmChoice, Selector};
use crate::config::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matchers::AlgorithmId;

/// Texts shorter than this always go to the naive scan.
pub const TINY_TEXT_LEN: usize = 20;
/// Texts at most this much longer than the pattern always go to the naive scan.
pub const TINY_TEXT_SLACK: usize = 5;
/// Pattern characters sampled by the small-alphabet probe.
pub const ALPHABET_SAMPLE_LEN: usize = 10;
/// Most distinct characters a small alphabet may have.
pub const SMALL_ALPHABET_MAX: usize = 4;
/// Pattern characters sampled by the repetition probe.
pub const REPETITION_SAMPLE_LEN: usize = 8;
/// Patterns up to this length count as short.
pub const SHORT_PATTERN_LEN: usize = 3;
/// Short patterns switch to rolling hash above this text length.
pub const SHORT_PATTERN_LONG_TEXT_LEN: usize = 400;
/// Texts shorter than this count as medium-short.
pub const SHORT_TEXT_LEN: usize = 150;
/// Texts longer than this count as long.
pub const LONG_TEXT_LEN: usize = 250;
/// Patterns at least this long prefer Boyer-Moore on long texts.
pub const LONG_PATTERN_LEN: usize = 25;

/// Tunable thresholds for [`HeuristicSelector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicThresholds {
    /// See [`TINY_TEXT_LEN`]
    pub tiny_text_len: usize,
    /// See [`TINY_TEXT_SLACK`]
    pub tiny_text_slack: usize,
    /// See [`ALPHABET_SAMPLE_LEN`]
    pub alphabet_sample_len: usize,
    /// See [`SMALL_ALPHABET_MAX`]
    pub small_alphabet_max: usize,
    /// See [`REPETITION_SAMPLE_LEN`]
    pub repetition_sample_len: usize,
    /// See [`SHORT_PATTERN_LEN`]
    pub short_pattern_len: usize,
    /// See [`SHORT_PATTERN_LONG_TEXT_LEN`]
    pub short_pattern_long_text_len: usize,
    /// See [`SHORT_TEXT_LEN`]
    pub short_text_len: usize,
    /// See [`LONG_TEXT_LEN`]
    pub long_text_len: usize,
    /// See [`LONG_PATTERN_LEN`]
    pub long_pattern_len: usize,
}

impl Default for HeuristicThresholds {
    fn default() -> Self {
        Self {
            tiny_text_len: TINY_TEXT_LEN,
            tiny_text_slack: TINY_TEXT_SLACK,
            alphabet_sample_len: ALPHABET_SAMPLE_LEN,
            small_alphabet_max: SMALL_ALPHABET_MAX,
            repetition_sample_len: REPETITION_SAMPLE_LEN,
            short_pattern_len: SHORT_PATTERN_LEN,
            short_pattern_long_text_len: SHORT_PATTERN_LONG_TEXT_LEN,
            short_text_len: SHORT_TEXT_LEN,
            long_text_len: LONG_TEXT_LEN,
            long_pattern_len: LONG_PATTERN_LEN,
        }
    }
}

impl Validate for HeuristicThresholds {
    fn validate(&self) -> ConfigResult<()> {
        let non_zero = [
            ("alphabet_sample_len", self.alphabet_sample_len),
            ("small_alphabet_max", self.small_alphabet_max),
            ("repetition_sample_len", self.repetition_sample_len),
        ];
        for (key, value) in non_zero {
            if value == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "selector.thresholds.{key} must be greater than 0"
                )));
            }
        }

        if self.short_text_len > self.long_text_len {
            return Err(ConfigError::ValueOutOfRange {
                key: "selector.thresholds.short_text_len".to_string(),
                message: format!(
                    "must not exceed long_text_len ({})",
                    self.long_text_len
                ),
            });
        }

        Ok(())
    }
}

/// Picks an algorithm from input lengths and a sample of the pattern.
///
/// Rules, first match wins:
///
/// 1. tiny input → Naive
/// 2. small alphabet → RabinKarp if repetitive, else BoyerMoore
/// 3. short pattern → RabinKarp on long text, else Naive
/// 4. medium-short text → Naive
/// 5. long text → RabinKarp for shorter patterns, else BoyerMoore
/// 6. repetitive pattern → KMP
/// 7. otherwise → Naive
#[derive(Debug, Clone, Default)]
pub struct HeuristicSelector {
    thresholds: HeuristicThresholds,
}

impl HeuristicSelector {
    /// Creates a selector with the given thresholds.
    pub fn new(thresholds: HeuristicThresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds in use.
    pub fn thresholds(&self) -> &HeuristicThresholds {
        &self.thresholds
    }

    fn decide(&self, profile: &PatternProfile) -> (AlgorithmId, &'static str) {
        let t = &self.thresholds;
        let (n, m) = (profile.text_len, profile.pattern_len);

        if n <= m.saturating_add(t.tiny_text_slack) || n < t.tiny_text_len {
            return (AlgorithmId::Naive, "tiny input");
        }

        if profile.small_alphabet {
            return if profile.repetitive {
                (AlgorithmId::RabinKarp, "small alphabet, repetitive pattern")
            } else {
                (AlgorithmId::BoyerMoore, "small alphabet")
            };
        }

        if m <= t.short_pattern_len {
            return if n > t.short_pattern_long_text_len {
                (AlgorithmId::RabinKarp, "short pattern, long text")
            } else {
                (AlgorithmId::Naive, "short pattern")
            };
        }

        if n < t.short_text_len {
            return (AlgorithmId::Naive, "medium-short text");
        }

        if n > t.long_text_len {
            return if m < t.long_pattern_len {
                (AlgorithmId::RabinKarp, "long text")
            } else {
                (AlgorithmId::BoyerMoore, "long text, long pattern")
            };
        }

        if profile.repetitive {
            return (AlgorithmId::Kmp, "repetitive pattern");
        }

        (AlgorithmId::Naive, "default")
    }
}

impl Selector for HeuristicSelector {
    fn choose(&self, text: &[char], pattern: &[char]) -> AlgorithmChoice {
        let t = &self.thresholds;
        let profile = PatternProfile::analyze(
            text,
            pattern,
            t.alphabet_sample_len,
            t.small_alphabet_max,
            t.repetition_sample_len,
        );
        let (algorithm, rule) = self.decide(&profile);
        tracing::debug!(
            n = profile.text_len,
            m = profile.pattern_len,
            small_alphabet = profile.small_alphabet,
            repetitive = profile.repetitive,
            %algorithm,
            rule,
            "heuristic selection"
        );
        AlgorithmChoice::Algorithm(algorithm)
    }

    fn strategy_description(&self) -> String {
        let t = &self.thresholds;
        format!(
            "Heuristic selection strategy\n\
             1. Naive for tiny inputs (n < {tiny} or n <= m + {slack}); no preprocessing to amortize.\n\
             2. Small pattern alphabet (<= {alpha} distinct in the first {sample}): \
             RabinKarp when the pattern is repetitive, BoyerMoore otherwise.\n\
             3. Short patterns (m <= {short_m}): RabinKarp when n > {short_long_n}, Naive otherwise.\n\
             4. Naive for medium-short texts (n < {short_n}).\n\
             5. Long texts (n > {long_n}): RabinKarp when m < {long_m}, BoyerMoore otherwise.\n\
             6. KMP for repetitive patterns (AAAB... or ABAB...).\n\
             7. Naive otherwise.",
            tiny = t.tiny_text_len,
            slack = t.tiny_text_slack,
            alpha = t.small_alphabet_max,
            sample = t.alphabet_sample_len,
            short_m = t.short_pattern_len,
            short_long_n = t.short_pattern_long_text_len,
            short_n = t.short_text_len,
            long_n = t.long_text_len,
            long_m = t.long_pattern_len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Text of `n` characters over a wide alphabet.
    fn wide_text(n: usize) -> Vec<char> {
        (0..n).map(|i| char::from(b'a' + (i % 26) as u8)).collect()
    }

    fn choose(text: &[char], pattern: &str) -> AlgorithmChoice {
        HeuristicSelector::default().choose(text, &chars(pattern))
    }

    #[test]
    fn test_tiny_text_is_naive() {
        assert_eq!(
            choose(&chars("0123456789"), "abc"),
            AlgorithmChoice::Algorithm(AlgorithmId::Naive)
        );
    }

    #[test]
    fn test_text_barely_longer_than_pattern_is_naive() {
        let text = wide_text(40);
        let pattern: String = wide_text(35).into_iter().collect();
        assert_eq!(choose(&text, &pattern), AlgorithmChoice::Algorithm(AlgorithmId::Naive));
    }

    #[test_case(100, "ACGTTGCA", AlgorithmId::BoyerMoore; "dna pattern")]
    #[test_case(100, "AAAAAAAB", AlgorithmId::RabinKarp; "small alphabet and repetitive")]
    #[test_case(100, "ABABABXY", AlgorithmId::RabinKarp; "period two small alphabet")]
    #[test_case(500, "xyq", AlgorithmId::BoyerMoore; "three characters are always a small alphabet")]
    #[test_case(500, "xy", AlgorithmId::RabinKarp; "short pattern long text")]
    #[test_case(300, "xy", AlgorithmId::Naive; "short pattern medium text")]
    #[test_case(120, "qwertyui", AlgorithmId::Naive; "medium short text")]
    #[test_case(300, "qwertyui", AlgorithmId::RabinKarp; "long text short pattern")]
    #[test_case(300, "abcdefghijklmnopqrstuvwxyz", AlgorithmId::BoyerMoore; "long text long pattern")]
    #[test_case(200, "qqqqwertyu", AlgorithmId::Kmp; "repetitive pattern in band")]
    #[test_case(200, "qwertyuiop", AlgorithmId::Naive; "fallback")]
    fn test_rules(n: usize, pattern: &str, expected: AlgorithmId) {
        assert_eq!(
            choose(&wide_text(n), pattern),
            AlgorithmChoice::Algorithm(expected)
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let selector = HeuristicSelector::new(HeuristicThresholds {
            long_pattern_len: 5,
            ..HeuristicThresholds::default()
        });
        assert_eq!(
            selector.choose(&wide_text(300), &chars("qwertyui")),
            AlgorithmChoice::Algorithm(AlgorithmId::BoyerMoore)
        );
    }

    #[test]
    fn test_threshold_validation() {
        assert!(HeuristicThresholds::default().validate().is_ok());

        let invalid = HeuristicThresholds {
            short_text_len: 300,
            ..HeuristicThresholds::default()
        };
        assert!(invalid.validate().is_err());

        let invalid = HeuristicThresholds {
            alphabet_sample_len: 0,
            ..HeuristicThresholds::default()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_description_mentions_thresholds() {
        let description = HeuristicSelector::default().strategy_description();
        assert!(description.contains("n < 150"));
        assert!(description.contains("m < 25"));
    }
}
