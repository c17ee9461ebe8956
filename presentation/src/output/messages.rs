//! User-facing report text shared by the console report and the interactive form

use legal_domain::{AnalysisResult, ErrorKind};

pub const PARTIES_TITLE: &str = "1. Extracted Parties";
pub const CLAUSES_TITLE: &str = "2. Key Clauses Found";
pub const SUMMARY_TITLE: &str = "3. Auto-Generated Summary";
pub const ENTITIES_TITLE: &str = "Named Entities";

pub const NOT_FOUND: &str = "Not Found";
pub const NO_CLAUSES: &str = "No clauses found with the current pattern.";
pub const NO_ENTITIES: &str = "No entities recognized.";
pub const SHORT_INPUT: &str = "Error: Please paste a legal document.";
pub const ANALYZING: &str = "Analyzing… (Summarization may take a moment)";

/// Line shown in place of the summary when the summarizer failed
pub fn summarization_error(detail: &str) -> String {
    format!("An error occurred during summarization: {}", detail)
}

/// Summary section body: the summary, or the captured failure
pub fn summary_text(result: &AnalysisResult) -> String {
    match (&result.summary, &result.error) {
        (Some(summary), _) => summary.clone(),
        (None, Some(error)) if error.kind == ErrorKind::SummarizationFailed => {
            summarization_error(error.detail.as_deref().unwrap_or("unknown error"))
        }
        _ => NOT_FOUND.to_string(),
    }
}

/// Value of a party field for display
pub fn party_or_not_found(party: Option<&str>) -> &str {
    party.unwrap_or(NOT_FOUND)
}

/// Whether the result only carries the short-input rejection
pub fn is_rejected(result: &AnalysisResult) -> bool {
    result.error_kind() == Some(ErrorKind::InputTooShort)
}
