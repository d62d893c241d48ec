// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact substring matchers.
//!
//! Every matcher answers the same question: at which character offsets does
//! `pattern` occur in `text`? All of them return the same [`MatchSet`] for the
//! same input, overlapping occurrences included. They differ only in how much
//! work they do to get there:
//!
//! - [`NaiveMatcher`]: brute force, O(n·m)
//! - [`KmpMatcher`]: prefix-failure table, O(n + m)
//! - [`RabinKarpMatcher`]: rolling hash with verification, O(n + m) expected
//! - [`BoyerMooreMatcher`]: bad-character and good-suffix skips, sublinear on average
//!
//! Matchers hold no state between calls. Auxiliary tables are built at the
//! start of each call and dropped at its end, so a matcher can be shared
//! freely across threads.
//!
//! # Example
//!
//! ```
//! use huli_match_lib::matchers::{KmpMatcher, Matcher};
//!
//! let text: Vec<char> = "ABABABA".chars().collect();
//! let pattern: Vec<char> = "ABA".chars().collect();
//!
//! let matches = KmpMatcher.find_all(&text, &pattern).unwrap();
//! assert_eq!(matches, vec![0, 2, 4]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, MatchResult};

pub mod boyer_moore;
pub mod experimental;
pub mod kmp;
mod match_set;
pub mod naive;
pub mod rabin_karp;

pub use boyer_moore::BoyerMooreMatcher;
pub use experimental::ExperimentalMatcher;
pub use kmp::KmpMatcher;
pub use match_set::{MatchSet, EMPTY_MATCH_SET};
pub use naive::NaiveMatcher;
pub use rabin_karp::RabinKarpMatcher;

/// Stable identifier of a matching algorithm.
///
/// The string forms (`"Naive"`, `"KMP"`, `"RabinKarp"`, `"BoyerMoore"`) are
/// used for dispatch, configuration and output. Any other non-empty name is a
/// custom entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AlgorithmId {
    /// Brute-force scan
    Naive,
    /// Knuth-Morris-Pratt
    Kmp,
    /// Rabin-Karp rolling hash
    RabinKarp,
    /// Boyer-Moore with both skip rules
    BoyerMoore,
    /// Additional named algorithm
    Custom(String),
}

impl AlgorithmId {
    /// The four built-in algorithms, in registry order.
    pub const BUILTIN: [AlgorithmId; 4] = [
        AlgorithmId::Naive,
        AlgorithmId::Kmp,
        AlgorithmId::RabinKarp,
        AlgorithmId::BoyerMoore,
    ];

    /// The identifier's dispatch string.
    pub fn name(&self) -> &str {
        match self {
            Self::Naive => "Naive",
            Self::Kmp => "KMP",
            Self::RabinKarp => "RabinKarp",
            Self::BoyerMoore => "BoyerMoore",
            Self::Custom(name) => name,
        }
    }

    /// Returns `true` for the four built-in algorithms.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(MatchError::UnknownAlgorithm(s.to_string()));
        }
        let builtin = Self::BUILTIN
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name));
        Ok(builtin.unwrap_or_else(|| Self::Custom(name.to_string())))
    }
}

impl From<AlgorithmId> for String {
    fn from(id: AlgorithmId) -> Self {
        id.name().to_string()
    }
}

impl TryFrom<String> for AlgorithmId {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The single capability every algorithm provides.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// The identifier this matcher is registered under.
    fn id(&self) -> AlgorithmId;

    /// Finds every start offset of `pattern` in `text`.
    ///
    /// An empty pattern matches at every offset `0..=text.len()`. A pattern
    /// longer than the text matches nowhere. Neither case is an error.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotImplemented`] when the algorithm is only a
    /// registered placeholder.
    fn find_all(&self, text: &[char], pattern: &[char]) -> MatchResult<MatchSet>;
}

/// Answers the inputs every matcher short-circuits on.
///
/// Returns `Some` for an empty pattern or a pattern longer than the text.
pub(crate) fn trivial_matches(text: &[char], pattern: &[char]) -> Option<MatchSet> {
    if pattern.is_empty() {
        Some(MatchSet::every_offset(text.len()))
    } else if pattern.len() > text.len() {
        Some(MatchSet::new())
    } else {
        None
    }
}
