// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matcher.
//!
//! The failure table records, for every prefix of the pattern, the length of
//! its longest proper border (a proper prefix that is also a suffix). On a
//! mismatch the scan falls back along that table instead of re-reading text,
//! so each text character is examined a bounded number of times and the whole
//! search runs in O(n + m).

use super::{trivial_matches, AlgorithmId, MatchSet, Matcher};
use crate::error::MatchResult;

/// Longest-proper-prefix-suffix table for a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureTable {
    lps: Vec<usize>,
}

impl FailureTable {
    /// Builds the table with the standard border-function construction.
    ///
    /// `lps[0]` is always 0. For an empty pattern the table is empty.
    pub fn new(pattern: &[char]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0; m];
        let mut len = 0;
        let mut i = 1;

        while i < m {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len > 0 {
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Self { lps }
    }

    /// Border length of `pattern[0..=i]`.
    pub fn border(&self, i: usize) -> usize {
        self.lps[i]
    }

    /// The raw table.
    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }
}

/// Linear-time matcher driven by a [`FailureTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KmpMatcher;

impl Matcher for KmpMatcher {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Kmp
    }

    fn find_all(&self, text: &[char], pattern: &[char]) -> MatchResult<MatchSet> {
        if let Some(matches) = trivial_matches(text, pattern) {
            return Ok(matches);
        }

        let table = FailureTable::new(pattern);
        let (n, m) = (text.len(), pattern.len());
        let mut matches = MatchSet::new();
        let mut i = 0;
        let mut j = 0;

        while i < n {
            if text[i] == pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    matches.push(i - j);
                    // Keep the border so overlapping occurrences are found.
                    j = table.border(j - 1);
                }
            } else if j > 0 {
                j = table.border(j - 1);
            } else {
                i += 1;
            }
        }

        tracing::trace!(n, m, found = matches.len(), "kmp scan done");
        Ok(matches)
    }
}
