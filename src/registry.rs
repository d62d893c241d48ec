//! Explicit matcher registry.
//!
//! Maps algorithm identifiers to matcher instances. The registry is built by
//! plain function calls at startup; nothing registers itself, and building it
//! has no side effects. Iteration order is the [`AlgorithmId`] order: the four
//! built-ins first, then custom entries by name.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::matchers::{
    AlgorithmId, BoyerMooreMatcher, ExperimentalMatcher, KmpMatcher, Matcher, NaiveMatcher,
    RabinKarpMatcher,
};

/// Identifier → matcher lookup.
#[derive(Debug, Clone, Default)]
pub struct MatcherRegistry {
    matchers: BTreeMap<AlgorithmId, Arc<dyn Matcher>>,
}

impl MatcherRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in matchers plus the experimental placeholder.
    pub fn standard() -> Self {
        let mut registry = Self::builtin();
        registry.register(Arc::new(ExperimentalMatcher::default()));
        registry
    }

    /// Only the four built-in matchers.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(NaiveMatcher));
        registry.register(Arc::new(KmpMatcher));
        registry.register(Arc::new(RabinKarpMatcher));
        registry.register(Arc::new(BoyerMooreMatcher));
        registry
    }

    /// Registers `matcher` under its own identifier.
    ///
    /// Returns the matcher previously registered under that identifier, if any.
    pub fn register(&mut self, matcher: Arc<dyn Matcher>) -> Option<Arc<dyn Matcher>> {
        self.matchers.insert(matcher.id(), matcher)
    }

    /// Looks up a matcher.
    pub fn get(&self, id: &AlgorithmId) -> Option<Arc<dyn Matcher>> {
        self.matchers.get(id).cloned()
    }

    /// Whether a matcher is registered under `id`.
    pub fn contains(&self, id: &AlgorithmId) -> bool {
        self.matchers.contains_key(id)
    }

    /// Registered identifiers, in registry order.
    pub fn ids(&self) -> impl Iterator<Item = &AlgorithmId> {
        self.matchers.keys()
    }

    /// Registered matchers, in registry order.
    pub fn matchers(&self) -> impl Iterator<Item = &Arc<dyn Matcher>> {
        self.matchers.values()
    }

    /// Number of registered matchers.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}
