//! Crate-level test modules for Huli Match.
//!
//! Per-file unit tests live next to the code they test. The modules here
//! cover behaviour that spans components:
//! - Configuration loading from files and environment variables
//! - Error conversion and reporting
//! - Engine dispatch, fallback and comparison with a mocked selector

pub mod engine_tests;
pub mod error_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{chars, reference_find_all, small_alphabet_strategy, TestFixture};
