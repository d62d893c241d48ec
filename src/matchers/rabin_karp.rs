// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Rabin-Karp matcher.
//!
//! Hashes the pattern and each text window with a polynomial hash under a
//! small prime modulus. Windows are re-hashed incrementally in O(1). The
//! modulus is deliberately small, so equal hashes are frequent and every one
//! is verified character by character before it counts as a match.

use super::{trivial_matches, AlgorithmId, MatchSet, Matcher};
use crate::error::MatchResult;

/// Polynomial radix (size of a byte alphabet).
pub const RADIX: i64 = 256;

/// Hash modulus.
pub const PRIME: i64 = 101;

/// Rolling hash state for a fixed-width window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    pattern_hash: i64,
    window_hash: i64,
    radix: i64,
    modulus: i64,
    /// `radix^(m-1) mod modulus`, the weight of the outgoing character.
    high_order: i64,
}

impl RollingHash {
    /// Hashes `pattern` and the first `pattern.len()` characters of `text`.
    ///
    /// Callers guarantee `text.len() >= pattern.len()`.
    pub fn new(pattern: &[char], text: &[char]) -> Self {
        let (radix, modulus) = (RADIX, PRIME);
        let m = pattern.len();

        let mut high_order = 1;
        for _ in 1..m {
            high_order = (high_order * radix) % modulus;
        }

        let mut pattern_hash = 0;
        let mut window_hash = 0;
        for (&p, &t) in pattern.iter().zip(&text[..m]) {
            pattern_hash = (radix * pattern_hash + code(p)) % modulus;
            window_hash = (radix * window_hash + code(t)) % modulus;
        }

        Self {
            pattern_hash,
            window_hash,
            radix,
            modulus,
            high_order,
        }
    }

    /// Whether the current window may equal the pattern.
    pub fn is_candidate(&self) -> bool {
        self.pattern_hash == self.window_hash
    }

    /// Slides the window one position: drops `outgoing`, appends `incoming`.
    pub fn roll(&mut self, outgoing: char, incoming: char) {
        let mut hash = (self.radix * (self.window_hash - code(outgoing) * self.high_order)
            + code(incoming))
            % self.modulus;
        if hash < 0 {
            hash += self.modulus;
        }
        self.window_hash = hash;
    }

    /// Hash of the pattern.
    pub fn pattern_hash(&self) -> i64 {
        self.pattern_hash
    }

    /// Hash of the current window.
    pub fn window_hash(&self) -> i64 {
        self.window_hash
    }
}

fn code(c: char) -> i64 {
    i64::from(u32::from(c))
}

/// Rolling-hash matcher with full verification on hash equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct RabinKarpMatcher;

impl Matcher for RabinKarpMatcher {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RabinKarp
    }

    fn find_all(&self, text: &[char], pattern: &[char]) -> MatchResult<MatchSet> {
        if let Some(matches) = trivial_matches(text, pattern) {
            return Ok(matches);
        }

        let (n, m) = (text.len(), pattern.len());
        let mut hash = RollingHash::new(pattern, text);
        let mut matches = MatchSet::new();
        let mut collisions = 0usize;

        for i in 0..=n - m {
            if hash.is_candidate() {
                if text[i..i + m] == *pattern {
                    matches.push(i);
                } else {
                    collisions += 1;
                }
            }
            if i < n - m {
                hash.roll(text[i], text[i + m]);
            }
        }

        tracing::trace!(n, m, found = matches.len(), collisions, "rabin-karp scan done");
        Ok(matches)
    }
}
