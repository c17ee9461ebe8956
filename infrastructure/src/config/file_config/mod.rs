//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod bounds;
mod output;
mod recognizer;
mod summarizer;

pub use bounds::{FileConsoleConfig, FileInteractiveConfig};
pub use output::FileOutputConfig;
pub use recognizer::FileRecognizerConfig;
pub use summarizer::{FileSummarizerConfig, SummarizerKind};

use legal_domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("[{section}] {source}")]
    InvalidBounds {
        section: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("summarizer.backend: unknown value '{value}' (expected one of: {})", SummarizerKind::VALID_VALUES.join(", "))]
    UnknownBackend { value: String },

    #[error("{field} cannot be 0")]
    ZeroTimeout { field: &'static str },

    #[error("summarizer.model cannot be empty")]
    EmptyModelName,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Entity recognizer word lists
    pub recognizer: FileRecognizerConfig,
    /// Summarizer backend selection
    pub summarizer: FileSummarizerConfig,
    /// Bounds for one-shot console runs
    pub console: FileConsoleConfig,
    /// Bounds and timeout for the interactive form
    pub interactive: FileInteractiveConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Err(source) = self.console.bounds() {
            issues.push(ConfigValidationError::InvalidBounds {
                section: "console",
                source,
            });
        }
        if let Err(source) = self.interactive.bounds() {
            issues.push(ConfigValidationError::InvalidBounds {
                section: "interactive",
                source,
            });
        }

        if let Err(value) = self.summarizer.parse_backend() {
            issues.push(ConfigValidationError::UnknownBackend { value });
        }
        if self.summarizer.timeout_seconds == 0 {
            issues.push(ConfigValidationError::ZeroTimeout {
                field: "summarizer.timeout_seconds",
            });
        }
        if self.summarizer.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.interactive.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::ZeroTimeout {
                field: "interactive.timeout_seconds",
            });
        }

        issues
    }
}
