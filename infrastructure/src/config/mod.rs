//! Configuration file loading for legal-analyzer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LEGAL_ANALYZER_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./legal-analyzer.toml` or `./.legal-analyzer.toml`
//! 4. Global: `~/.config/legal-analyzer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileConsoleConfig, FileInteractiveConfig,
    FileOutputConfig, FileRecognizerConfig, FileSummarizerConfig, SummarizerKind,
};
pub use loader::ConfigLoader;
