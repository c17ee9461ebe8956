//! CLI entrypoint for Legal Analyzer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use legal_application::{
    AnalysisProgressNotifier, AnalyzeDocumentUseCase, EntitySource, NoProgress, Summarizer,
};
use legal_domain::{ErrorKind, OutputFormat, SummaryBounds};
use legal_infrastructure::{ConfigLoader, FileConfig, RuleBasedRecognizer, SummarizerBackend};
use legal_presentation::{Cli, ConsoleFormatter, InputSource, ProgressReporter, TuiApp};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Exit code when the document was rejected as too short
const EXIT_INPUT_TOO_SHORT: u8 = 2;

/// Log file used by the interactive form when `--log-file` is not given
const TUI_LOG_FILE: &str = "legal-analyzer.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    info!("Starting Legal Analyzer");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let recognizer = Arc::new(RuleBasedRecognizer::from_config(&config.recognizer)?);
    let summarizer = Arc::new(SummarizerBackend::from_config(&config.summarizer)?);

    // Interactive form
    if cli.tui {
        let bounds = active_bounds(&cli, config.interactive.bounds()?)?;
        let backends = format!(
            "{} + {} (bounds {})",
            recognizer.name(),
            summarizer.name(),
            bounds
        );
        let use_case = AnalyzeDocumentUseCase::new(recognizer, summarizer).with_bounds(bounds);

        let mut app = TuiApp::new(Arc::new(use_case))
            .with_timeout(config.interactive.timeout())
            .with_backends(backends);
        app.run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    // One-shot console run - input is required
    let source = InputSource::resolve(cli.input.as_deref(), cli.sample)?;
    let text = source.read()?;
    info!("Read {} bytes from {}", text.len(), source.describe());

    let bounds = active_bounds(&cli, config.console.bounds()?)?;
    let use_case = AnalyzeDocumentUseCase::new(recognizer, summarizer).with_bounds(bounds);

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    // Spinners would interleave with machine-readable output
    let reporter = ProgressReporter::new();
    let progress: &dyn AnalysisProgressNotifier = if cli.quiet || format == OutputFormat::Json {
        &NoProgress
    } else {
        &reporter
    };

    let report = use_case.execute_detailed(&text, progress).await?;

    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&report),
        OutputFormat::Brief => ConsoleFormatter::format_brief(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };
    println!("{}", output);

    if report.result.error_kind() == Some(ErrorKind::InputTooShort) {
        return Ok(ExitCode::from(EXIT_INPUT_TOO_SHORT));
    }
    Ok(ExitCode::SUCCESS)
}

/// Install the tracing subscriber; logs go to a file in TUI mode or with `--log-file`
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_path = match (&cli.log_file, cli.tui) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(std::env::temp_dir().join(TUI_LOG_FILE)),
        (None, false) => None,
    };

    let Some(path) = log_path else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("invalid log file path: {}", path.display()))?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Load and validate configuration according to `--config` / `--no-config`
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("config file not found: {}", path.display());
    }

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow!("failed to load configuration: {}", e))?;

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            warn!("{}", issue);
        }
        bail!(
            "invalid configuration:\n  {}",
            issues
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join("\n  ")
        );
    }

    Ok(config)
}

/// Apply `--min-length` / `--max-length` to the preset for this mode
fn active_bounds(cli: &Cli, preset: SummaryBounds) -> Result<SummaryBounds> {
    preset
        .with_overrides(cli.min_length, cli.max_length)
        .context("invalid --min-length / --max-length")
}
