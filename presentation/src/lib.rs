//! Presentation layer for legal-analyzer
//!
//! This crate contains the CLI definition, input reading, report
//! formatters, progress reporters and the interactive form.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use cli::input::{InputError, InputSource};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::TuiApp;
