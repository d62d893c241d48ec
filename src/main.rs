//! Huli Match - Main entrypoint.
//!
//! Command-line front end for the match engine. It initializes logging,
//! loads configuration, and renders search results.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Args as ClapArgs, Parser, Subcommand};
use huli_match_lib::config::{self, ConfigLoader, HuliConfig, LogConfig, ENV_PREFIX};
use huli_match_lib::engine::{MatchEngine, SearchOutcome};
use huli_match_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, HuliError, HuliResult,
    TracingErrorReporter,
};
use huli_match_lib::matchers::AlgorithmId;
use huli_match_lib::selector::analysis;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Huli Match.
#[derive(Parser, Debug)]
#[clap(name = "Huli Match", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Text and pattern shared by the search commands.
#[derive(ClapArgs, Debug)]
struct InputArgs {
    /// Pattern to search for
    #[clap(short, long)]
    pattern: String,

    /// Text to search in
    #[clap(short, long, conflicts_with = "text_file")]
    text: Option<String>,

    /// Read the text from a file instead
    #[clap(long, value_parser)]
    text_file: Option<PathBuf>,
}

impl InputArgs {
    fn read_text(&self) -> anyhow::Result<String> {
        match (&self.text, &self.text_file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .map_err(HuliError::Io)
                .with_context(|| format!("failed to read text from {}", path.display())),
            (None, None) => bail!("either --text or --text-file is required"),
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Find every occurrence of a pattern
    Search {
        #[clap(flatten)]
        input: InputArgs,

        /// Algorithm to use instead of the selector's choice
        #[clap(short, long)]
        algorithm: Option<String>,

        /// Print the full outcome as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show which algorithm the selector would choose
    Select {
        #[clap(flatten)]
        input: InputArgs,
    },

    /// Run every registered algorithm and compare the results
    Compare {
        #[clap(flatten)]
        input: InputArgs,

        /// Print the full outcome as JSON
        #[clap(long)]
        json: bool,
    },

    /// List the registered algorithms
    Algorithms,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> HuliResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| HuliError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<HuliConfig> {
    let config = match path {
        Some(path) => ConfigLoader::new(Some(path), ENV_PREFIX).load(),
        None => config::load_default_config(),
    };
    config.context("failed to load configuration")
}

fn print_outcome(outcome: &SearchOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(outcome).map_err(HuliError::Serialization)?;
        println!("{rendered}");
        return Ok(());
    }

    println!("Algorithm: {}", outcome.algorithm);
    println!("Matches: {}", outcome.matches);
    if outcome.runs.len() > 1 {
        for run in &outcome.runs {
            println!("  {:<12} {:>10.3?}  {}", run.algorithm.name(), run.elapsed, run.matches);
        }
    }
    for id in &outcome.skipped {
        println!("  {:<12} not implemented", id.name());
    }
    Ok(())
}

async fn run(args: Args, config: HuliConfig) -> anyhow::Result<()> {
    let engine = MatchEngine::from_config(&config);

    match args.command {
        Command::Search {
            input,
            algorithm,
            json,
        } => {
            let text = input.read_text()?;
            let requested = algorithm
                .as_deref()
                .map(str::parse::<AlgorithmId>)
                .transpose()?;
            let outcome = engine.search(&text, &input.pattern, requested).await?;
            print_outcome(&outcome, json)
        }
        Command::Select { input } => {
            let text = input.read_text()?;
            let text_chars: Vec<char> = text.chars().collect();
            let pattern_chars: Vec<char> = input.pattern.chars().collect();
            println!("Strategy: {}", engine.strategy_description());
            println!("Choice: {}", engine.choose(&text, &input.pattern));
            println!(
                "Text: {} chars, pattern: {} chars, alphabet: {} distinct, border: {}",
                text_chars.len(),
                pattern_chars.len(),
                analysis::alphabet_size(&text_chars, &pattern_chars),
                if analysis::has_border(&pattern_chars) { "yes" } else { "no" },
            );
            Ok(())
        }
        Command::Compare { input, json } => {
            let text = input.read_text()?;
            let outcome = engine
                .compare_all(text.chars().collect(), input.pattern.chars().collect())
                .await?;
            print_outcome(&outcome, json)
        }
        Command::Algorithms => {
            for id in engine.registry().ids() {
                let status = if id.is_builtin() { "built-in" } else { "custom" };
                println!("{:<12} {status}", id.name());
            }
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = HuliConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(HuliError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| HuliError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml).map_err(HuliError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    config::init_global_config(config);
    let config = config::get_global_config()?.get().clone();

    info!(
        strategy = ?config.selector.strategy,
        fallback = %config.engine.fallback,
        "Huli Match starting"
    );

    let result = run(args, config).await;
    if let Err(e) = &result {
        if let Some(error) = e.downcast_ref::<huli_match_lib::error::MatchError>() {
            get_error_reporting().report(
                ErrorContext::new(error.clone(), "engine").with_details(format!("{e:#}")),
            );
        }
    }
    result
}
