//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::{
    config::ConfigError, get_error_reporting, set_error_reporter, ErrorContext, ErrorReporter,
    HuliError, MatchError, TracingErrorReporter,
};
use crate::matchers::AlgorithmId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = MatchError::NotImplemented(AlgorithmId::Custom("Experimental".to_string()));
    let context = ErrorContext::new(error, "engine").with_details("selected by heuristic");

    let display_string = format!("{context}");
    assert!(display_string.starts_with("Error in engine: "));
    assert!(display_string.contains("Experimental"));
    assert!(display_string.contains("selected by heuristic"));
}

/// Test conversions into the top-level error.
#[test]
fn test_error_conversions() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let huli_error: HuliError = io_error.into();
    assert!(format!("{huli_error}").contains("file not found"));

    let huli_error: HuliError = MatchError::InvalidInput("pattern is required".to_string()).into();
    assert!(matches!(huli_error, HuliError::Match(MatchError::InvalidInput(_))));

    let huli_error: HuliError = ConfigError::NotInitialized.into();
    assert!(matches!(huli_error, HuliError::Config(ConfigError::NotInitialized)));
}

/// Test the messages that name algorithms.
#[test]
fn test_match_error_messages() {
    let disagreement = MatchError::Disagreement {
        reference: AlgorithmId::Naive,
        other: AlgorithmId::BoyerMoore,
    };
    assert_eq!(
        disagreement.to_string(),
        "Algorithms Naive and BoyerMoore disagree on the match set"
    );

    let unknown = MatchError::UnknownAlgorithm("Zalgo".to_string());
    assert_eq!(unknown.to_string(), "Unknown algorithm: Zalgo");
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let context = ErrorContext::new(HuliError::Custom("test error".to_string()), "test_component");
    get_error_reporting().report(context);

    assert_eq!(reporter.reported_count.load(Ordering::SeqCst), 1);
}

/// Test that the default tracing error reporter can be used without a subscriber.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let context = ErrorContext::new(HuliError::Custom("test error".to_string()), "test_component");
    reporter.report(context);
}
