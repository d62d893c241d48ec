// Copyright (c) 2025 Huli Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Placeholder slot for a custom algorithm.
//!
//! The entry is registered so it shows up in listings and can be requested by
//! name, but every call reports [`MatchError::NotImplemented`]. That keeps
//! "could not compute" distinct from an empty result.

use super::{AlgorithmId, MatchSet, Matcher};
use crate::error::{MatchError, MatchResult};

/// Default name of the experimental entry.
pub const EXPERIMENTAL_NAME: &str = "Experimental";

/// A named matcher without an implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentalMatcher {
    name: String,
}

impl ExperimentalMatcher {
    /// Creates a placeholder registered under `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ExperimentalMatcher {
    fn default() -> Self {
        Self::new(EXPERIMENTAL_NAME)
    }
}

impl Matcher for ExperimentalMatcher {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Custom(self.name.clone())
    }

    fn find_all(&self, _text: &[char], _pattern: &[char]) -> MatchResult<MatchSet> {
        Err(MatchError::NotImplemented(self.id()))
    }
}
