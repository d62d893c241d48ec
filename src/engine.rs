//! Match engine.
//!
//! The composition root: it owns the registry and the selector, and turns a
//! text/pattern pair into a [`SearchOutcome`]. Three paths lead there:
//!
//! - the caller names an algorithm: it runs, and its errors are returned;
//! - the selector names one: it runs, falling back to the configured
//!   algorithm if the choice is unknown or not implemented, since selection
//!   is an optimization and must not turn into a user-facing failure;
//! - the selector has no preference: every registered matcher runs as an
//!   independent blocking task and all results must agree.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::config::engine::EngineConfig;
use crate::config::HuliConfig;
use crate::error::{MatchError, MatchResult};
use crate::matchers::{AlgorithmId, MatchSet, Matcher};
use crate::registry::MatcherRegistry;
use crate::selector::{self, AlgorithmChoice, Selector};

/// A search as submitted by an outer layer.
///
/// Text and pattern are optional so that absent values can be rejected with
/// [`MatchError::InvalidInput`] rather than silently treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Text to search in
    pub text: Option<String>,
    /// Pattern to search for
    pub pattern: Option<String>,
    /// Algorithm to use instead of asking the selector
    pub algorithm: Option<String>,
}

impl SearchRequest {
    /// Creates a request without an algorithm preference.
    pub fn new<T: Into<String>, P: Into<String>>(text: T, pattern: P) -> Self {
        Self {
            text: Some(text.into()),
            pattern: Some(pattern.into()),
            algorithm: None,
        }
    }

    /// Requests a specific algorithm by name.
    pub fn with_algorithm<S: Into<String>>(mut self, algorithm: S) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }
}

/// How the engine arrived at its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decision {
    /// The caller named the algorithm.
    Requested,
    /// The selector named the algorithm.
    Selected,
    /// The selector's algorithm could not run; the fallback ran instead.
    Fallback {
        /// What the selector chose
        attempted: AlgorithmId,
        /// Why it could not run
        reason: String,
    },
    /// Every algorithm ran and the results were compared.
    Compared,
}

/// One algorithm's result and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmRun {
    /// Algorithm that ran
    pub algorithm: AlgorithmId,
    /// Its matches
    pub matches: MatchSet,
    /// Wall time of the call, including table construction
    pub elapsed: Duration,
}

/// The answer to a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Algorithm whose result is reported (the fastest one when comparing)
    pub algorithm: AlgorithmId,
    /// How the algorithm was chosen
    pub decision: Decision,
    /// Match offsets
    pub matches: MatchSet,
    /// Every run that completed
    pub runs: Vec<AlgorithmRun>,
    /// Registered algorithms skipped as not implemented
    pub skipped: Vec<AlgorithmId>,
}

impl SearchOutcome {
    fn single(run: AlgorithmRun, decision: Decision) -> Self {
        Self {
            algorithm: run.algorithm.clone(),
            decision,
            matches: run.matches.clone(),
            runs: vec![run],
            skipped: Vec::new(),
        }
    }
}

fn timed_run(matcher: &dyn Matcher, text: &[char], pattern: &[char]) -> MatchResult<AlgorithmRun> {
    let started = Instant::now();
    let matches = matcher.find_all(text, pattern)?;
    let elapsed = started.elapsed();
    tracing::debug!(
        algorithm = %matcher.id(),
        found = matches.len(),
        elapsed_us = elapsed.as_micros() as u64,
        "algorithm run complete"
    );
    Ok(AlgorithmRun {
        algorithm: matcher.id(),
        matches,
        elapsed,
    })
}

/// Checks that every run produced the same match set as the first one.
fn verify_agreement(runs: &[AlgorithmRun]) -> MatchResult<()> {
    let Some((reference, rest)) = runs.split_first() else {
        return Ok(());
    };
    match rest.iter().find(|run| run.matches != reference.matches) {
        Some(other) => {
            tracing::error!(
                reference = %reference.algorithm,
                other = %other.algorithm,
                "algorithms disagree"
            );
            Err(MatchError::Disagreement {
                reference: reference.algorithm.clone(),
                other: other.algorithm.clone(),
            })
        }
        None => Ok(()),
    }
}

/// Dispatches searches to matchers.
pub struct MatchEngine {
    registry: MatcherRegistry,
    selector: Arc<dyn Selector>,
    config: EngineConfig,
}

impl MatchEngine {
    /// Creates an engine from its parts.
    pub fn new(registry: MatcherRegistry, selector: Arc<dyn Selector>, config: EngineConfig) -> Self {
        Self {
            registry,
            selector,
            config,
        }
    }

    /// Creates an engine with the standard registry and the configured selector.
    pub fn from_config(config: &HuliConfig) -> Self {
        Self::new(
            MatcherRegistry::standard(),
            selector::from_config(&config.selector),
            config.engine.clone(),
        )
    }

    /// The matcher registry.
    pub fn registry(&self) -> &MatcherRegistry {
        &self.registry
    }

    /// The selector's description, for reporting.
    pub fn strategy_description(&self) -> String {
        self.selector.strategy_description()
    }

    /// Asks the selector for a choice without running anything.
    pub fn choose(&self, text: &str, pattern: &str) -> AlgorithmChoice {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.selector.choose(&text, &pattern)
    }

    /// Runs one algorithm.
    ///
    /// # Errors
    ///
    /// [`MatchError::UnknownAlgorithm`] when nothing is registered under `id`,
    /// or whatever the matcher itself reports.
    pub fn run_algorithm(
        &self,
        id: &AlgorithmId,
        text: &[char],
        pattern: &[char],
    ) -> MatchResult<AlgorithmRun> {
        let matcher = self
            .registry
            .get(id)
            .ok_or_else(|| MatchError::UnknownAlgorithm(id.to_string()))?;
        timed_run(matcher.as_ref(), text, pattern)
    }

    /// Validates and runs a [`SearchRequest`].
    ///
    /// # Errors
    ///
    /// [`MatchError::InvalidInput`] when text or pattern is absent, plus
    /// everything [`MatchEngine::search`] can return.
    pub async fn execute(&self, request: &SearchRequest) -> MatchResult<SearchOutcome> {
        let text = request
            .text
            .as_deref()
            .ok_or_else(|| MatchError::InvalidInput("text is required".to_string()))?;
        let pattern = request
            .pattern
            .as_deref()
            .ok_or_else(|| MatchError::InvalidInput("pattern is required".to_string()))?;
        let requested = request
            .algorithm
            .as_deref()
            .map(str::parse::<AlgorithmId>)
            .transpose()?;
        self.search(text, pattern, requested).await
    }

    /// Searches `pattern` in `text`.
    ///
    /// With `requested` set, exactly that algorithm runs and its errors are
    /// returned. Otherwise the selector decides; see the module docs.
    ///
    /// Comparison mode spawns blocking tasks and must run inside a Tokio runtime.
    pub async fn search(
        &self,
        text: &str,
        pattern: &str,
        requested: Option<AlgorithmId>,
    ) -> MatchResult<SearchOutcome> {
        let text: Arc<[char]> = text.chars().collect();
        let pattern: Arc<[char]> = pattern.chars().collect();

        if let Some(id) = requested {
            let run = self.run_algorithm(&id, &text, &pattern)?;
            return Ok(SearchOutcome::single(run, Decision::Requested));
        }

        match self.selector.choose(&text, &pattern) {
            AlgorithmChoice::Algorithm(id) => self.run_selected(id, &text, &pattern),
            AlgorithmChoice::NoPreference => self.compare_all(text, pattern).await,
        }
    }

    fn run_selected(
        &self,
        id: AlgorithmId,
        text: &[char],
        pattern: &[char],
    ) -> MatchResult<SearchOutcome> {
        match self.run_algorithm(&id, text, pattern) {
            Ok(run) => Ok(SearchOutcome::single(run, Decision::Selected)),
            Err(err @ (MatchError::NotImplemented(_) | MatchError::UnknownAlgorithm(_))) => {
                tracing::warn!(
                    selected = %id,
                    fallback = %self.config.fallback,
                    error = %err,
                    "selected algorithm unavailable, falling back"
                );
                let run = self.run_algorithm(&self.config.fallback, text, pattern)?;
                Ok(SearchOutcome::single(
                    run,
                    Decision::Fallback {
                        attempted: id,
                        reason: err.to_string(),
                    },
                ))
            }
            Err(err) => Err(err),
        }
    }

    /// Runs every registered matcher and checks that they agree.
    ///
    /// Matchers reporting [`MatchError::NotImplemented`] are skipped. The
    /// fastest run becomes the reported algorithm.
    ///
    /// # Errors
    ///
    /// [`MatchError::Disagreement`] when two results differ,
    /// [`MatchError::EmptyRegistry`] when nothing ran, and
    /// [`MatchError::Worker`] when a task could not be joined.
    pub async fn compare_all(
        &self,
        text: Arc<[char]>,
        pattern: Arc<[char]>,
    ) -> MatchResult<SearchOutcome> {
        let results: Vec<MatchResult<AlgorithmRun>> = if self.config.parallel_comparison {
            let tasks = self.registry.matchers().map(|matcher| {
                let matcher = Arc::clone(matcher);
                let text = Arc::clone(&text);
                let pattern = Arc::clone(&pattern);
                async move {
                    let id = matcher.id();
                    let handle =
                        tokio::task::spawn_blocking(move || timed_run(matcher.as_ref(), &text, &pattern));
                    match handle.await {
                        Ok(result) => result,
                        Err(join_error) => Err(MatchError::Worker(format!("{id}: {join_error}"))),
                    }
                }
            });
            join_all(tasks).await
        } else {
            self.registry
                .matchers()
                .map(|matcher| timed_run(matcher.as_ref(), &text, &pattern))
                .collect()
        };

        let mut runs = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();
        for result in results {
            match result {
                Ok(run) => runs.push(run),
                Err(MatchError::NotImplemented(id)) => {
                    tracing::debug!(algorithm = %id, "skipping unimplemented algorithm");
                    skipped.push(id);
                }
                Err(err) => return Err(err),
            }
        }

        verify_agreement(&runs)?;

        let fastest = runs
            .iter()
            .min_by_key(|run| run.elapsed)
            .ok_or(MatchError::EmptyRegistry)?;

        Ok(SearchOutcome {
            algorithm: fastest.algorithm.clone(),
            decision: Decision::Compared,
            matches: fastest.matches.clone(),
            runs,
            skipped,
        })
    }
}
