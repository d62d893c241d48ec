//! Huli Match Library
//!
//! Exact substring search with interchangeable algorithms. Given a text and
//! a pattern, every algorithm reports the same thing: the ascending set of
//! character offsets where the pattern occurs, overlaps included.
//!
//! # Architecture
//!
//! - [`matchers`]: Naive, KMP, Rabin–Karp and Boyer–Moore behind one trait
//! - [`selector`]: pattern/text heuristics that pick an algorithm
//! - [`registry`]: explicit identifier → matcher lookup
//! - [`engine`]: dispatch, fallback and cross-algorithm comparison
//! - [`config`] and [`error`]: layered configuration and the error model

// Re-export public modules
pub mod config;
pub mod engine;
pub mod error;
pub mod matchers;
pub mod registry;
pub mod selector;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Huli Match.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
