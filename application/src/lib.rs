//! Application layer for legal-analyzer
//!
//! This crate contains the analysis use case and the port definitions
//! (recognizer, summarizer, progress) that infrastructure and presentation
//! adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    entity_source::{EntitySource, RecognitionError},
    progress::{AnalysisProgressNotifier, AnalysisStage, NoProgress},
    summarizer::{SummarizationError, Summarizer},
};
pub use use_cases::analyze_document::{AnalysisReport, AnalyzeDocumentUseCase, AnalyzeError};
