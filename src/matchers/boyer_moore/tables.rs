// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the lookup tables used by the Boyer-Moore algorithm
//! to skip alignments that cannot match:
//!
//! 1. Bad Character Table: the rightmost index of each pattern character, so a
//!    mismatching text character can be lined up with its last occurrence in
//!    the pattern (or skipped over entirely when it does not occur).
//!
//! 2. Good Suffix Table: for every length of matched suffix, the smallest
//!    shift that lines the matched text up with another occurrence of that
//!    suffix, or with a border of the pattern.
//!
//! Both tables depend only on the pattern and never change once built.

use fnv::FnvHashMap;

/// Rightmost occurrence of each pattern character.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    last: FnvHashMap<char, usize>,
}

impl BadCharTable {
    /// Creates a new bad character table for the given pattern.
    pub fn new(pattern: &[char]) -> Self {
        let mut last = FnvHashMap::default();
        // Later indices overwrite earlier ones, leaving the rightmost.
        for (i, &ch) in pattern.iter().enumerate() {
            last.insert(ch, i);
        }
        Self { last }
    }

    /// The rightmost index of `ch` in the pattern, if it occurs at all.
    pub fn last_index(&self, ch: char) -> Option<usize> {
        self.last.get(&ch).copied()
    }

    /// Bad-character shift for a mismatch of `ch` at pattern index `pos`.
    ///
    /// Absent characters use the sentinel index -1, giving `pos + 1`. The
    /// result is zero or negative when the last occurrence of `ch` lies at
    /// or right of `pos`; the good-suffix rule covers that case.
    pub fn shift(&self, ch: char, pos: usize) -> isize {
        let last = self.last_index(ch).map_or(-1, |idx| idx as isize);
        pos as isize - last
    }

    /// Number of distinct characters in the pattern.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    /// Returns `true` for the table of an empty pattern.
    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Strong good-suffix shifts, indexed `0..=m`.
///
/// `shift(k)` applies when the mismatch happened at pattern index `k - 1`,
/// i.e. the last `m - k` characters matched. `shift(0)` is the shift after a
/// full match.
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    shift: Vec<usize>,
    border: Vec<usize>,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    pub fn new(pattern: &[char]) -> Self {
        let m = pattern.len();
        let mut shift = vec![0; m + 1];
        let border = Self::compute_border(pattern, &mut shift);
        Self::fill_from_prefix_borders(&mut shift, &border);
        Self { shift, border }
    }

    /// First pass: right to left over the pattern, recording for every suffix
    /// the start of its widest border. Whenever a border cannot be extended,
    /// the suffix it belonged to reappears `j - i` positions to the left with
    /// a different preceding character, which is exactly the strong rule.
    fn compute_border(pattern: &[char], shift: &mut [usize]) -> Vec<usize> {
        let m = pattern.len();
        let mut border = vec![0; m + 1];

        let mut i = m;
        let mut j = m + 1;
        border[i] = j;

        while i > 0 {
            while j <= m && pattern[i - 1] != pattern[j - 1] {
                if shift[j] == 0 {
                    shift[j] = j - i;
                }
                j = border[j];
            }
            i -= 1;
            j -= 1;
            border[i] = j;
        }

        border
    }

    /// Second pass: slots the first pass left unset only have a matching
    /// pattern prefix to align with. Walk the border chain of the whole
    /// pattern, switching to the next narrower border once `i` passes the
    /// current one.
    fn fill_from_prefix_borders(shift: &mut [usize], border: &[usize]) {
        let mut j = border[0];
        for i in 0..shift.len() {
            if shift[i] == 0 {
                shift[i] = j;
            }
            if i == j {
                j = border[j];
            }
        }
    }

    /// Shift for a mismatch leaving `m - k` matched characters.
    ///
    /// # Panics
    ///
    /// Panics if `k` exceeds the pattern length.
    pub fn shift(&self, k: usize) -> usize {
        self.shift[k]
    }

    /// The full shift table.
    pub fn as_slice(&self) -> &[usize] {
        &self.shift
    }

    /// Start positions of the widest border of each suffix.
    pub fn border_positions(&self) -> &[usize] {
        &self.border
    }
}
