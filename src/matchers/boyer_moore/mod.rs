// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore pattern matcher.
//!
//! This module provides an implementation of the Boyer-Moore string search
//! algorithm, which is particularly efficient for longer patterns over larger
//! alphabets. The implementation combines the bad character rule with the
//! strong good suffix rule and reports every occurrence, overlapping ones
//! included.
//!
//! # Example
//!
//! ```
//! use huli_match_lib::matchers::boyer_moore::PreprocessedPattern;
//!
//! let pattern: Vec<char> = "needle".chars().collect();
//! let text: Vec<char> = "Finding a needle in a haystack, then another needle."
//!     .chars()
//!     .collect();
//!
//! let pattern = PreprocessedPattern::new(&pattern);
//! let matches: Vec<usize> = pattern.find_iter(&text).collect();
//! assert_eq!(matches, vec![10, 45]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m + σ) where m is the pattern length and σ is the alphabet size
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Worst case: O(n·m) comparisons when reporting every occurrence of a highly
//!   periodic pattern
//!
//! # Progress
//!
//! On a mismatch the window moves by `max(bad_char, good_suffix)`. The
//! bad-character shift can be zero or negative when the mismatching character
//! occurs at or right of the mismatch position, but every good-suffix slot
//! holds a shift of at least 1, so the scan always advances.

mod matcher;
mod preprocess;
mod tables;

#[cfg(test)]
mod tests;

pub use matcher::{BoyerMooreMatcher, Matches};
pub use preprocess::PreprocessedPattern;
pub use tables::{BadCharTable, GoodSuffixTable};
