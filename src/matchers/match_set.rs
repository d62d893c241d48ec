// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordered set of match offsets.

use std::fmt;

use serde::Serialize;

/// Rendering used when a search found nothing.
pub const EMPTY_MATCH_SET: &str = "none";

/// Start offsets of every occurrence of a pattern, strictly ascending.
///
/// Offsets count characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<usize>);

impl MatchSet {
    /// Creates an empty match set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Every offset `0..=text_len`, the answer for an empty pattern.
    pub fn every_offset(text_len: usize) -> Self {
        Self((0..=text_len).collect())
    }

    /// Appends an offset. Offsets must arrive in strictly ascending order.
    pub(crate) fn push(&mut self, offset: usize) {
        debug_assert!(
            self.0.last().map_or(true, |&last| last < offset),
            "match offsets must be strictly ascending"
        );
        self.0.push(offset);
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the pattern does not occur.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The offsets as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterates over the offsets in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Consumes the set, returning the underlying offsets.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl FromIterator<usize> for MatchSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for offset in iter {
            set.push(offset);
        }
        set
    }
}

impl IntoIterator for MatchSet {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<Vec<usize>> for MatchSet {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

impl PartialEq<[usize]> for MatchSet {
    fn eq(&self, other: &[usize]) -> bool {
        self.0 == other
    }
}

impl fmt::Display for MatchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(EMPTY_MATCH_SET);
        }
        for (i, offset) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let set: MatchSet = vec![0, 2, 4].into_iter().collect();
        assert_eq!(set.to_string(), "0, 2, 4");
        assert_eq!(MatchSet::new().to_string(), "none");
    }

    #[test]
    fn test_every_offset() {
        assert_eq!(MatchSet::every_offset(0), vec![0]);
        assert_eq!(MatchSet::every_offset(3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_serializes_as_array() {
        let set: MatchSet = vec![1, 5].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,5]");
    }
}
