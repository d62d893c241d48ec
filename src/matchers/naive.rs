// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute-force matcher.
//!
//! Compares the pattern against every candidate window. No preprocessing, so
//! it is the cheapest choice for tiny inputs and the reference the other
//! matchers are checked against.

use super::{AlgorithmId, MatchSet, Matcher};
use crate::error::MatchResult;

/// O(n·m) window-by-window scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMatcher;

impl Matcher for NaiveMatcher {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Naive
    }

    fn find_all(&self, text: &[char], pattern: &[char]) -> MatchResult<MatchSet> {
        let mut matches = MatchSet::new();
        let Some(last_start) = text.len().checked_sub(pattern.len()) else {
            return Ok(matches);
        };

        // An empty pattern compares zero characters, so every offset matches.
        for i in 0..=last_start {
            if text[i..i + pattern.len()]
                .iter()
                .zip(pattern)
                .all(|(t, p)| t == p)
            {
                matches.push(i);
            }
        }

        tracing::trace!(n = text.len(), m = pattern.len(), found = matches.len(), "naive scan done");
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_overlapping_matches() {
        let result = NaiveMatcher.find_all(&chars("ABABABA"), &chars("ABA")).unwrap();
        assert_eq!(result, vec![0, 2, 4]);
    }

    #[test]
    fn test_empty_pattern_matches_every_offset() {
        let result = NaiveMatcher.find_all(&chars("abc"), &[]).unwrap();
        assert_eq!(result, vec![0, 1, 2, 3]);
        let result = NaiveMatcher.find_all(&[], &[]).unwrap();
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let result = NaiveMatcher.find_all(&chars("ABC"), &chars("ABCD")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unicode_offsets_are_character_offsets() {
        let result = NaiveMatcher
            .find_all(&chars("café au café"), &chars("café"))
            .unwrap();
        assert_eq!(result, vec![0, 8]);
    }
}
