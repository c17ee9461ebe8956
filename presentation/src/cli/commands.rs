//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for console runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Entities, parties, clauses and summary
    Full,
    /// Parties, clauses and summary only
    Brief,
    /// JSON report
    Json,
}

impl From<OutputFormat> for legal_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => legal_domain::OutputFormat::Full,
            OutputFormat::Brief => legal_domain::OutputFormat::Brief,
            OutputFormat::Json => legal_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for legal-analyzer
#[derive(Parser, Debug)]
#[command(name = "legal-analyzer")]
#[command(author, version, about = "Extract parties, clause headings and a summary from legal agreements")]
#[command(long_about = r#"
Legal Analyzer reads a contract and reports:
1. Extracted Parties: the company (first organization) and the consultant (first person)
2. Key Clauses Found: numbered headings such as "1. Services"
3. Auto-Generated Summary

Configuration files are loaded from (in priority order):
1. LEGAL_ANALYZER_<SECTION>__<KEY> environment variables
2. --config <path>             Explicit config file
3. ./legal-analyzer.toml       Project-level config
4. ~/.config/legal-analyzer/config.toml   Global config

Example:
  legal-analyzer contract.txt
  cat contract.txt | legal-analyzer - -o json
  legal-analyzer --sample
  legal-analyzer --tui
"#)]
pub struct Cli {
    /// Agreement to analyze (`-` reads standard input)
    #[arg(value_name = "FILE", conflicts_with = "sample")]
    pub input: Option<PathBuf>,

    /// Analyze the built-in sample consulting agreement
    #[arg(long)]
    pub sample: bool,

    /// Open the interactive form instead of printing a report
    #[arg(long, conflicts_with = "output")]
    pub tui: bool,

    /// Output format (defaults to `[output] format`, then `full`)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Minimum summary length (overrides the active preset)
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Maximum summary length (overrides the active preset)
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
