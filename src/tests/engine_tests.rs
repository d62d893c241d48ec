//! Tests for the match engine.
//!
//! The selector is mocked so that each dispatch path can be driven directly.

use crate::config::engine::EngineConfig;
use crate::config::HuliConfig;
use crate::engine::{Decision, MatchEngine, SearchRequest};
use crate::error::{MatchError, MatchResult};
use crate::matchers::{AlgorithmId, MatchSet, Matcher, NaiveMatcher};
use crate::registry::MatcherRegistry;
use crate::selector::{AlgorithmChoice, MockSelector};
use crate::tests::{chars, reference_find_all, small_alphabet_strategy};
use proptest::prelude::*;
use std::sync::Arc;

fn experimental() -> AlgorithmId {
    AlgorithmId::Custom("Experimental".to_string())
}

fn selector_choosing(choice: AlgorithmChoice) -> Arc<MockSelector> {
    let mut selector = MockSelector::new();
    selector
        .expect_choose()
        .times(1)
        .returning(move |_, _| choice.clone());
    Arc::new(selector)
}

/// An engine whose selector must not be consulted.
fn engine_without_selection() -> MatchEngine {
    let mut selector = MockSelector::new();
    selector.expect_choose().never();
    MatchEngine::new(
        MatcherRegistry::standard(),
        Arc::new(selector),
        EngineConfig::default(),
    )
}

fn engine_with(choice: AlgorithmChoice, parallel_comparison: bool) -> MatchEngine {
    MatchEngine::new(
        MatcherRegistry::standard(),
        selector_choosing(choice),
        EngineConfig {
            parallel_comparison,
            ..EngineConfig::default()
        },
    )
}

/// A matcher that reports a match at offset 0 whatever the input.
#[derive(Debug)]
struct AlwaysZeroMatcher;

impl Matcher for AlwaysZeroMatcher {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Custom("AlwaysZero".to_string())
    }

    fn find_all(&self, _text: &[char], _pattern: &[char]) -> MatchResult<MatchSet> {
        Ok(std::iter::once(0).collect())
    }
}

#[tokio::test]
async fn test_requested_algorithm_skips_selector() {
    let engine = engine_without_selection();
    let outcome = engine
        .search("ABABDABACDABABCABAB", "ABABCABAB", Some(AlgorithmId::RabinKarp))
        .await
        .unwrap();
    assert_eq!(outcome.algorithm, AlgorithmId::RabinKarp);
    assert_eq!(outcome.decision, Decision::Requested);
    assert_eq!(outcome.matches, vec![10]);
    assert_eq!(outcome.runs.len(), 1);
}

#[tokio::test]
async fn test_requested_stub_is_an_error() {
    let engine = engine_without_selection();
    let err = engine
        .search("AAAA", "AA", Some(experimental()))
        .await
        .unwrap_err();
    assert_eq!(err, MatchError::NotImplemented(experimental()));

    let err = engine
        .search("AAAA", "AA", Some(AlgorithmId::Custom("Zalgo".to_string())))
        .await
        .unwrap_err();
    assert_eq!(err, MatchError::UnknownAlgorithm("Zalgo".to_string()));
}

#[tokio::test]
async fn test_selected_algorithm_runs() {
    let engine = engine_with(AlgorithmChoice::Algorithm(AlgorithmId::BoyerMoore), true);
    let outcome = engine.search("AABAACAADAABAABA", "AABA", None).await.unwrap();
    assert_eq!(outcome.algorithm, AlgorithmId::BoyerMoore);
    assert_eq!(outcome.decision, Decision::Selected);
    assert_eq!(outcome.matches, vec![0, 9, 12]);
}

#[tokio::test]
async fn test_selected_stub_falls_back() {
    let engine = engine_with(AlgorithmChoice::Algorithm(experimental()), true);
    let outcome = engine.search("AAAA", "AA", None).await.unwrap();
    assert_eq!(outcome.algorithm, AlgorithmId::Kmp);
    assert_eq!(outcome.matches, vec![0, 1, 2]);
    assert!(matches!(
        outcome.decision,
        Decision::Fallback { ref attempted, .. } if *attempted == experimental()
    ));
}

#[tokio::test]
async fn test_selected_unknown_falls_back() {
    let unknown = AlgorithmId::Custom("Zalgo".to_string());
    let engine = engine_with(AlgorithmChoice::Algorithm(unknown.clone()), true);
    let outcome = engine.search("GEEKS FOR GEEKS", "GEEKS", None).await.unwrap();
    assert_eq!(outcome.algorithm, AlgorithmId::Kmp);
    assert_eq!(outcome.matches, vec![0, 10]);
    match outcome.decision {
        Decision::Fallback { attempted, reason } => {
            assert_eq!(attempted, unknown);
            assert!(reason.contains("Zalgo"));
        }
        other => panic!("expected fallback, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_preference_compares_in_parallel() {
    let engine = engine_with(AlgorithmChoice::NoPreference, true);
    let outcome = engine.search("AAAAA", "AA", None).await.unwrap();

    assert_eq!(outcome.decision, Decision::Compared);
    assert_eq!(outcome.matches, vec![0, 1, 2, 3]);
    assert_eq!(outcome.skipped, vec![experimental()]);

    let ran: Vec<AlgorithmId> = outcome.runs.iter().map(|run| run.algorithm.clone()).collect();
    assert_eq!(ran, AlgorithmId::BUILTIN.to_vec());
    assert!(ran.contains(&outcome.algorithm));
    assert!(outcome.runs.iter().all(|run| run.matches == outcome.matches));
}

#[tokio::test]
async fn test_no_preference_compares_sequentially() {
    let engine = engine_with(AlgorithmChoice::NoPreference, false);
    let outcome = engine.search("xyz", "abc", None).await.unwrap();
    assert_eq!(outcome.decision, Decision::Compared);
    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.runs.len(), 4);
}

#[tokio::test]
async fn test_comparison_detects_disagreement() {
    let mut registry = MatcherRegistry::builtin();
    registry.register(Arc::new(AlwaysZeroMatcher));
    let engine = MatchEngine::new(
        registry,
        selector_choosing(AlgorithmChoice::NoPreference),
        EngineConfig::default(),
    );

    let err = engine.search("abcabc", "bc", None).await.unwrap_err();
    assert_eq!(
        err,
        MatchError::Disagreement {
            reference: AlgorithmId::Naive,
            other: AlgorithmId::Custom("AlwaysZero".to_string()),
        }
    );
}

#[tokio::test]
async fn test_comparison_needs_an_implemented_matcher() {
    let engine = MatchEngine::new(
        MatcherRegistry::new(),
        selector_choosing(AlgorithmChoice::NoPreference),
        EngineConfig::default(),
    );
    let err = engine.search("abc", "b", None).await.unwrap_err();
    assert_eq!(err, MatchError::EmptyRegistry);
}

#[tokio::test]
async fn test_single_matcher_comparison() {
    let mut registry = MatcherRegistry::new();
    registry.register(Arc::new(NaiveMatcher));
    let engine = MatchEngine::new(
        registry,
        selector_choosing(AlgorithmChoice::NoPreference),
        EngineConfig::default(),
    );
    let outcome = engine.search("banana", "ana", None).await.unwrap();
    assert_eq!(outcome.algorithm, AlgorithmId::Naive);
    assert_eq!(outcome.matches, vec![1, 3]);
}

#[tokio::test]
async fn test_execute_validates_request() {
    let engine = MatchEngine::from_config(&HuliConfig::default());

    let missing_pattern = SearchRequest {
        text: Some("abc".to_string()),
        ..SearchRequest::default()
    };
    assert!(matches!(
        engine.execute(&missing_pattern).await,
        Err(MatchError::InvalidInput(_))
    ));

    let missing_text = SearchRequest {
        pattern: Some("abc".to_string()),
        ..SearchRequest::default()
    };
    assert!(matches!(
        engine.execute(&missing_text).await,
        Err(MatchError::InvalidInput(_))
    ));

    let empty_name = SearchRequest::new("abc", "b").with_algorithm("");
    assert!(matches!(
        engine.execute(&empty_name).await,
        Err(MatchError::UnknownAlgorithm(_))
    ));
}

#[tokio::test]
async fn test_execute_runs_request() {
    let engine = MatchEngine::from_config(&HuliConfig::default());

    let request = SearchRequest::new("café au café", "café").with_algorithm("kmp");
    let outcome = engine.execute(&request).await.unwrap();
    assert_eq!(outcome.algorithm, AlgorithmId::Kmp);
    assert_eq!(outcome.matches, vec![0, 8]);

    let request = SearchRequest::new("AABAACAADAABAABA", "AABA");
    let outcome = engine.execute(&request).await.unwrap();
    assert_eq!(outcome.matches, vec![0, 9, 12]);
}

#[test]
fn test_run_algorithm_is_strict() {
    let engine = engine_without_selection();
    let text = chars("abab");
    let pattern = chars("ab");

    let run = engine
        .run_algorithm(&AlgorithmId::Naive, &text, &pattern)
        .unwrap();
    assert_eq!(run.matches, vec![0, 2]);

    assert!(matches!(
        engine.run_algorithm(&experimental(), &text, &pattern),
        Err(MatchError::NotImplemented(_))
    ));
}

#[test]
fn test_outcome_serializes() {
    let engine = MatchEngine::from_config(&HuliConfig::default());
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let outcome = runtime
        .block_on(engine.search("abab", "ab", Some(AlgorithmId::Naive)))
        .unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["algorithm"], "Naive");
    assert_eq!(json["matches"], serde_json::json!([0, 2]));
    assert_eq!(json["decision"]["kind"], "requested");
}

proptest! {
    #[test]
    fn prop_every_builtin_run_matches_reference(
        text in small_alphabet_strategy(48),
        pattern in small_alphabet_strategy(4),
    ) {
        let engine = MatchEngine::from_config(&HuliConfig::default());
        let expected = reference_find_all(&text, &pattern);
        for id in AlgorithmId::BUILTIN {
            let run = engine.run_algorithm(&id, &text, &pattern).unwrap();
            prop_assert_eq!(run.matches.into_vec(), expected.clone(), "algorithm {}", id);
        }
    }
}
