//! Infrastructure layer for legal-analyzer
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

mod abbreviations;
pub mod config;
pub mod recognizer;
pub mod summarizer;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileConsoleConfig, FileInteractiveConfig,
    FileOutputConfig, FileRecognizerConfig, FileSummarizerConfig, SummarizerKind,
};
pub use recognizer::RuleBasedRecognizer;
#[cfg(feature = "remote-summarizer")]
pub use summarizer::HuggingFaceSummarizer;
pub use summarizer::{ExtractiveSummarizer, SummarizerBackend};
