// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the scan itself, exposed as a lazy iterator over the
//! occurrences of a preprocessed pattern, and the stateless
//! [`BoyerMooreMatcher`] that plugs it into the common [`Matcher`] interface.

use std::iter::FusedIterator;

use super::preprocess::PreprocessedPattern;
use crate::error::MatchResult;
use crate::matchers::{trivial_matches, AlgorithmId, MatchSet, Matcher};

/// Iterator over the start offsets of a pattern in a text, in ascending order.
///
/// Overlapping occurrences are included: after a match the window moves by
/// the widest-border shift, not by the pattern length.
#[derive(Debug)]
pub struct Matches<'a> {
    /// The preprocessed pattern
    pattern: &'a PreprocessedPattern,

    /// The text being searched
    text: &'a [char],

    /// Start of the current alignment
    shift: usize,
}

impl<'a> Iterator for Matches<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let pattern = self.pattern.pattern();
        let m = pattern.len();

        while self.shift + m <= self.text.len() {
            let window = &self.text[self.shift..self.shift + m];

            // Compare right to left; `j` counts the characters still unmatched.
            let mut j = m;
            while j > 0 && pattern[j - 1] == window[j - 1] {
                j -= 1;
            }

            let start = self.shift;
            if j == 0 {
                self.shift += self.pattern.match_shift();
                return Some(start);
            }
            self.shift += self.pattern.mismatch_shift(window[j - 1], j - 1);
        }

        None
    }
}

// The alignment only moves forward, so exhaustion is permanent.
impl<'a> FusedIterator for Matches<'a> {}

impl PreprocessedPattern {
    /// Returns an iterator over all occurrences of the pattern in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a [char]) -> Matches<'a> {
        Matches {
            pattern: self,
            text,
            shift: 0,
        }
    }

    /// Finds the first occurrence of the pattern in `text`.
    pub fn find_first(&self, text: &[char]) -> Option<usize> {
        self.find_iter(text).next()
    }
}

/// Boyer-Moore matcher using both the bad-character and strong good-suffix rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMooreMatcher;

impl Matcher for BoyerMooreMatcher {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BoyerMoore
    }

    fn find_all(&self, text: &[char], pattern: &[char]) -> MatchResult<MatchSet> {
        if let Some(matches) = trivial_matches(text, pattern) {
            return Ok(matches);
        }

        let preprocessed = PreprocessedPattern::new(pattern);
        let matches: MatchSet = preprocessed.find_iter(text).collect();

        tracing::trace!(
            n = text.len(),
            m = pattern.len(),
            found = matches.len(),
            "boyer-moore scan done"
        );
        Ok(matches)
    }
}
