//! Summarizer port
//!
//! Defines the interface for producing an abstractive summary of a document.

use async_trait::async_trait;
use legal_domain::SummaryBounds;
use thiserror::Error;

/// Errors that can occur during summarization
///
/// These never abort an analysis; the use case records them in the result.
#[derive(Error, Debug)]
pub enum SummarizationError {
    #[error("Nothing to summarize")]
    EmptyInput,

    #[error("Summarizer backend unavailable: {0}")]
    Unavailable(String),

    #[error("Summarizer request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid summarizer response: {0}")]
    InvalidResponse(String),

    #[error("Summarizer timed out")]
    Timeout,
}

/// Summarization model
///
/// Potentially slow (seconds). Called at most once per analysis.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Short identifier for logs and reports
    fn name(&self) -> &str;

    /// Summarize `text` within the given length bounds
    async fn summarize(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizationError>;
}
