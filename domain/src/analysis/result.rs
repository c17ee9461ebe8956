//! Analysis result aggregate

use crate::clauses::detector::ClauseSpan;
use crate::parties::resolver::PartyMap;
use serde::{Deserialize, Serialize};

/// Inputs whose trimmed length is below this many characters are rejected
/// before any recognizer or summarizer call.
pub const MIN_INPUT_CHARS: usize = 50;

/// Whether `raw_text` is too short to be worth analyzing
pub fn is_too_short(raw_text: &str) -> bool {
    raw_text.trim().chars().count() < MIN_INPUT_CHARS
}

/// Kind of failure captured in a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input rejected by local validation; the caller should re-prompt
    InputTooShort,
    /// The summarizer failed; parties and clauses are still valid
    SummarizationFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InputTooShort => "input_too_short",
            ErrorKind::SummarizationFailed => "summarization_failed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recoverable failure recorded in the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisError {
    pub kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AnalysisError {
    pub fn input_too_short() -> Self {
        Self {
            kind: ErrorKind::InputTooShort,
            detail: None,
        }
    }

    pub fn summarization_failed(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::SummarizationFailed,
            detail: Some(detail.into()),
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.kind, detail),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Output of one analysis run (Aggregate)
///
/// For accepted input exactly one of `summary` and `error` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parties: PartyMap,
    pub clauses: Vec<ClauseSpan>,
    pub summary: Option<String>,
    pub error: Option<AnalysisError>,
}

impl AnalysisResult {
    /// Result for input rejected by validation
    pub fn input_too_short() -> Self {
        Self {
            parties: PartyMap::default(),
            clauses: Vec::new(),
            summary: None,
            error: Some(AnalysisError::input_too_short()),
        }
    }

    /// Result of a run where every step succeeded
    pub fn completed(parties: PartyMap, clauses: Vec<ClauseSpan>, summary: String) -> Self {
        Self {
            parties,
            clauses,
            summary: Some(summary),
            error: None,
        }
    }

    /// Result of a run whose summarizer call failed
    pub fn summarization_failed(
        parties: PartyMap,
        clauses: Vec<ClauseSpan>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            parties,
            clauses,
            summary: None,
            error: Some(AnalysisError::summarization_failed(detail)),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}
