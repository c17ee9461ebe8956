//! Entity source port
//!
//! Defines the interface for tokenizing a document and recognizing its
//! named entities.

use legal_domain::AnnotatedDocument;
use thiserror::Error;

/// Errors that can occur while tokenizing / recognizing a document
///
/// Any of these is fatal to the analysis that triggered it: without tokens
/// and entities no partial result can be produced.
#[derive(Error, Debug)]
pub enum RecognitionError {
    #[error("Recognizer model not available: {0}")]
    ModelUnavailable(String),

    #[error("Recognition failed: {0}")]
    Failed(String),
}

/// Tokenizer + named-entity recognizer
///
/// Implementations (adapters) live in the infrastructure layer. A single
/// instance is built at startup and shared; `recognize` must be stateless
/// per call.
pub trait EntitySource: Send + Sync {
    /// Short identifier for logs and reports
    fn name(&self) -> &str;

    /// Produce entities and tokens for `text` in one pass
    fn recognize(&self, text: &str) -> Result<AnnotatedDocument, RecognitionError>;
}
