//! Output formatter trait

use legal_application::AnalysisReport;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    /// Format the complete report, entity listing included
    fn format(&self, report: &AnalysisReport) -> String;

    /// Format as JSON
    fn format_json(&self, report: &AnalysisReport) -> String;

    /// Parties, clauses and summary only
    fn format_brief(&self, report: &AnalysisReport) -> String;
}
