//! CLI entrypoint for Classifier Degrade
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use degrade_application::{DegradationOrchestrator, FallbackNotifier, NoProgress, ResultCache};
use degrade_domain::{OutputFormat as DomainOutputFormat, StrategyUsed};
use degrade_infrastructure::{
    ConfigLoader, FileLoggingConfig, InMemoryResultCache, JsonlOutcomeLogger,
    ScriptedClassifier, ScriptedResponse,
};
use degrade_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Failure text of the simulated primary classifier when none is given
const DEFAULT_PRIMARY_FAILURE: &str = "primary classifier unavailable";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, &config.logging)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    // Refuse to run with a configuration that cannot work as intended
    for issue in config.ensure_valid()? {
        warn!("{}", issue.message);
    }

    info!("Starting Classifier Degrade");

    // === Dependency Injection ===
    let (policy, _) = config.to_policy();
    let cache = Arc::new(InMemoryResultCache::new(config.cache.ttl()));
    let mut orchestrator = DegradationOrchestrator::new(
        policy,
        cache.clone(),
        Arc::new(config.reference_store()),
        Arc::new(config.scorer()),
    )
    .with_params(config.to_engine_params());

    if let Some(path) = &config.logging.outcome_log {
        match JsonlOutcomeLogger::new(path) {
            Some(logger) => orchestrator = orchestrator.with_logger(Arc::new(logger)),
            None => warn!("Outcome log disabled: cannot open {}", path.display()),
        }
    }

    if cli.stats {
        println!("{}", ConsoleFormatter::format_stats(&orchestrator.stats()));
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.has_input() {
        bail!("A query is required. Pass QUERY, --field KEY=VALUE or --company NAME.");
    }

    let cancellation = CancellationToken::new();
    let sweeper = config
        .cache
        .sweep_interval()
        .map(|interval| Arc::clone(&cache).spawn_sweeper(interval, cancellation.clone()));

    let payload = cli.payload();
    let classifier = simulated_classifier(&cli);
    let progress: Box<dyn FallbackNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if config.output.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = orchestrator
        .execute_classifier(&classifier, &payload, progress.as_ref())
        .await;

    // Commit primary answers so later failures can be served from cache
    if outcome.strategy_used == StrategyUsed::Primary
        && let Some(classification) = &outcome.classification
    {
        orchestrator.cache_result(
            payload.query(),
            classification.clone(),
            classification.confidence,
        );
        info!("Cache now holds {} entries", cache.len());
    }

    let format = cli
        .output
        .map(DomainOutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", ConsoleFormatter.render(&outcome, format));

    cancellation.cancel();
    if let Some(handle) = sweeper
        && let Err(e) = handle.await
    {
        warn!("Cache sweeper ended abnormally: {}", e);
    }

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

/// Build the stand-in for the external primary classifier from CLI flags.
fn simulated_classifier(cli: &Cli) -> ScriptedClassifier {
    let classifier = if cli.primary_empty {
        ScriptedClassifier::new(ScriptedResponse::Empty)
    } else if let Some(code) = &cli.primary_code {
        ScriptedClassifier::succeeding(code)
    } else {
        ScriptedClassifier::failing(
            cli.fail_with
                .as_deref()
                .unwrap_or(DEFAULT_PRIMARY_FAILURE),
        )
    };
    classifier.with_latency(Duration::from_millis(cli.primary_latency_ms))
}

/// Install the tracing subscriber.
///
/// `-v` flags pick the level; without them `RUST_LOG` and then
/// `[logging] level` apply. With `[logging] file` set, events are also
/// written there through a non-blocking appender.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(logging.level.as_deref().unwrap_or("warn"))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let Some(path) = &logging.file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(Some(guard))
}
