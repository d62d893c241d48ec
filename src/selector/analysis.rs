//! Cheap structural probes of a pattern.
//!
//! These look at a bounded prefix of the pattern so that selection stays
//! O(1)-ish regardless of input size. They are approximations: a periodic
//! pattern with period 3 is not reported as repetitive, for example. A wrong
//! answer only costs speed, never correctness.

use hashbrown::HashSet;

use crate::matchers::kmp::FailureTable;

/// Patterns shorter than this are never classified as small-alphabet.
pub const SMALL_ALPHABET_MIN_PATTERN_LEN: usize = 3;

/// Patterns shorter than this are never classified as repetitive.
pub const REPETITION_MIN_PATTERN_LEN: usize = 4;

/// Whether the first `sample_len` pattern characters use at most
/// `max_distinct` distinct characters (DNA, binary and similar inputs).
pub fn is_likely_small_alphabet(pattern: &[char], sample_len: usize, max_distinct: usize) -> bool {
    if pattern.len() < SMALL_ALPHABET_MIN_PATTERN_LEN {
        return false;
    }
    let sample = &pattern[..pattern.len().min(sample_len)];
    let distinct: HashSet<char> = sample.iter().copied().collect();
    distinct.len() <= max_distinct
}

/// Whether the pattern starts with an obvious repetition.
///
/// Either the first character fills all but at most one of the first
/// `sample_len` characters (`AAAB…`), or the pattern starts with a period-2
/// block (`ABAB…`).
pub fn has_simple_repetition(pattern: &[char], sample_len: usize) -> bool {
    if pattern.len() < REPETITION_MIN_PATTERN_LEN {
        return false;
    }

    let check_len = pattern.len().min(sample_len);
    let first = pattern[0];
    let same = pattern[..check_len].iter().filter(|&&c| c == first).count();
    if same + 1 >= check_len {
        return true;
    }

    pattern[0] == pattern[2] && pattern[1] == pattern[3]
}

/// Number of distinct characters across the text and the pattern.
pub fn alphabet_size(text: &[char], pattern: &[char]) -> usize {
    text.iter().chain(pattern).collect::<HashSet<_>>().len()
}

/// Whether some proper prefix of the pattern is also a suffix.
pub fn has_border(pattern: &[char]) -> bool {
    match pattern.len() {
        0 => false,
        m => FailureTable::new(pattern).border(m - 1) > 0,
    }
}

/// Summary of the probes for one text/pattern pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternProfile {
    /// Text length in characters
    pub text_len: usize,
    /// Pattern length in characters
    pub pattern_len: usize,
    /// Result of [`is_likely_small_alphabet`]
    pub small_alphabet: bool,
    /// Result of [`has_simple_repetition`]
    pub repetitive: bool,
}

impl PatternProfile {
    /// Runs the selection probes with the given sample sizes.
    pub fn analyze(
        text: &[char],
        pattern: &[char],
        alphabet_sample_len: usize,
        small_alphabet_max: usize,
        repetition_sample_len: usize,
    ) -> Self {
        Self {
            text_len: text.len(),
            pattern_len: pattern.len(),
            small_alphabet: is_likely_small_alphabet(pattern, alphabet_sample_len, small_alphabet_max),
            repetitive: has_simple_repetition(pattern, repetition_sample_len),
        }
    }
}
