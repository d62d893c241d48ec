// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! The preprocessing step analyzes the pattern once and produces the lookup
//! tables the scan consults on every mismatch.

use super::tables::{BadCharTable, GoodSuffixTable};

/// A pattern together with its Boyer-Moore lookup tables.
#[derive(Debug, Clone)]
pub struct PreprocessedPattern {
    /// The pattern being searched for
    pattern: Vec<char>,

    /// Bad character rule table
    bad_char_table: BadCharTable,

    /// Good suffix rule table
    good_suffix_table: GoodSuffixTable,
}

impl PreprocessedPattern {
    /// Preprocesses a pattern for use in the Boyer-Moore algorithm.
    pub fn new(pattern: &[char]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            bad_char_table: BadCharTable::new(pattern),
            good_suffix_table: GoodSuffixTable::new(pattern),
        }
    }

    /// The pattern characters.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    /// The length of the pattern in characters.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Returns `true` for the empty pattern.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The bad character table.
    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char_table
    }

    /// The good suffix table.
    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.good_suffix_table
    }

    /// Shift applied after a full match.
    pub fn match_shift(&self) -> usize {
        self.good_suffix_table.shift(0)
    }

    /// Shift applied when text character `mismatched` failed to match pattern
    /// index `pos`: the larger of the bad-character and good-suffix shifts.
    ///
    /// The good-suffix shift is at least 1 for every slot, so the result is
    /// always at least 1 even when the bad-character shift is not positive.
    pub fn mismatch_shift(&self, mismatched: char, pos: usize) -> usize {
        let good_suffix = self.good_suffix_table.shift(pos + 1);
        let bad_char = self.bad_char_table.shift(mismatched, pos);
        usize::try_from(bad_char).map_or(good_suffix, |bad_char| bad_char.max(good_suffix))
    }
}
