//! Console output formatter for analysis reports

use crate::output::formatter::OutputFormatter;
use crate::output::messages::{
    CLAUSES_TITLE, ENTITIES_TITLE, NO_CLAUSES, NO_ENTITIES, PARTIES_TITLE, SHORT_INPUT,
    SUMMARY_TITLE, is_rejected, party_or_not_found, summary_text,
};
use colored::Colorize;
use legal_application::AnalysisReport;
use legal_domain::{AnalysisResult, truncate};

/// Wrap width for summary text
const WRAP_WIDTH: usize = 76;

/// Entity text column width in the listing
const ENTITY_COLUMN: usize = 40;

/// Formats analysis reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report, entity listing included
    pub fn format(report: &AnalysisReport) -> String {
        Self::render(report, true)
    }

    /// Parties, clauses and summary only
    pub fn format_brief(report: &AnalysisReport) -> String {
        Self::render(report, false)
    }

    /// Format as JSON
    pub fn format_json(report: &AnalysisReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn render(report: &AnalysisReport, with_entities: bool) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Legal Document Analysis"));
        output.push('\n');

        let result = &report.result;
        if is_rejected(result) {
            output.push_str(&format!("\n{}\n", SHORT_INPUT.red().bold()));
            output.push_str(&Self::footer());
            return output;
        }

        if with_entities {
            output.push_str(&Self::section_header(ENTITIES_TITLE));
            if report.entities.is_empty() {
                output.push_str(&format!("  {}\n", NO_ENTITIES.dimmed()));
            }
            for entity in &report.entities {
                output.push_str(&format!(
                    "  {:<width$} {}\n",
                    truncate(&entity.text, ENTITY_COLUMN),
                    entity.label.as_str().yellow(),
                    width = ENTITY_COLUMN
                ));
            }
        }

        output.push_str(&Self::parties_section(result));
        output.push_str(&Self::clauses_section(result));
        output.push_str(&Self::summary_section(result));

        output.push_str(&format!(
            "\n{} {} / {} (bounds {})\n",
            "Analyzed with:".dimmed(),
            report.recognizer,
            report.summarizer,
            report.bounds
        ));
        output.push_str(&Self::footer());

        output
    }

    fn parties_section(result: &AnalysisResult) -> String {
        let mut section = Self::section_header(PARTIES_TITLE);
        section.push_str(&format!(
            "  {} {}\n",
            "Company:   ".cyan().bold(),
            party_or_not_found(result.parties.company.as_deref())
        ));
        section.push_str(&format!(
            "  {} {}\n",
            "Consultant:".cyan().bold(),
            party_or_not_found(result.parties.consultant.as_deref())
        ));
        section
    }

    fn clauses_section(result: &AnalysisResult) -> String {
        let mut section = Self::section_header(CLAUSES_TITLE);
        if result.clauses.is_empty() {
            section.push_str(&format!("  {}\n", NO_CLAUSES));
        }
        for clause in &result.clauses {
            section.push_str(&format!("  - {}\n", clause.text));
        }
        section
    }

    fn summary_section(result: &AnalysisResult) -> String {
        let mut section = Self::section_header(SUMMARY_TITLE);
        let text = summary_text(result);
        if result.summary.is_some() {
            section.push_str(&Self::indent(&Self::wrap(&text, WRAP_WIDTH), "  "));
        } else {
            section.push_str(&format!("  {}", text.red()));
        }
        section.push('\n');
        section
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Greedy word wrap
    pub fn wrap(text: &str, width: usize) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &AnalysisReport) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &AnalysisReport) -> String {
        Self::format_json(report)
    }

    fn format_brief(&self, report: &AnalysisReport) -> String {
        Self::format_brief(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use legal_domain::{ClauseSpan, Entity, EntityLabel, PartyMap, SummaryBounds};

    fn entity(text: &str, label: EntityLabel) -> Entity {
        Entity::new(text, label, 0, text.len())
    }

    fn report(result: AnalysisResult) -> AnalysisReport {
        AnalysisReport {
            result,
            entities: vec![
                entity("Rogue Company Pvt. Ltd.", EntityLabel::Organization),
                entity("Prerna", EntityLabel::Person),
            ],
            recognizer: "rule-based".into(),
            summarizer: "extractive".into(),
            bounds: SummaryBounds::console(),
            analyzed_at: Utc::now(),
        }
    }

    fn parties() -> PartyMap {
        PartyMap {
            company: Some("Rogue Company Pvt. Ltd.".into()),
            consultant: None,
        }
    }

    fn clauses() -> Vec<ClauseSpan> {
        vec![ClauseSpan {
            text: "1. Services".into(),
            start_index: 0,
            end_index: 3,
        }]
    }

    #[test]
    fn test_full_report_sections() {
        let output = ConsoleFormatter::format(&report(AnalysisResult::completed(
            parties(),
            clauses(),
            "Prerna consults for Rogue Company.".into(),
        )));

        assert!(output.contains("Named Entities"));
        assert!(output.contains("PERSON"));
        assert!(output.contains("1. Extracted Parties"));
        assert!(output.contains("Rogue Company Pvt. Ltd."));
        assert!(output.contains("Not Found"));
        assert!(output.contains("  - 1. Services"));
        assert!(output.contains("Prerna consults for Rogue Company."));
    }

    #[test]
    fn test_brief_report_omits_entities() {
        let output = ConsoleFormatter::format_brief(&report(AnalysisResult::completed(
            parties(),
            vec![],
            "Summary.".into(),
        )));
        assert!(!output.contains("Named Entities"));
        assert!(output.contains("No clauses found with the current pattern."));
    }

    #[test]
    fn test_summarization_failure_keeps_parties() {
        let output = ConsoleFormatter::format(&report(AnalysisResult::summarization_failed(
            parties(),
            clauses(),
            "Summarizer timed out",
        )));
        assert!(output.contains("Rogue Company Pvt. Ltd."));
        assert!(output.contains("An error occurred during summarization: Summarizer timed out"));
    }

    #[test]
    fn test_short_input_shows_only_the_prompt() {
        let output = ConsoleFormatter::format(&report(AnalysisResult::input_too_short()));
        assert!(output.contains("Error: Please paste a legal document."));
        assert!(!output.contains("1. Extracted Parties"));
    }

    #[test]
    fn test_json_report() {
        let output = ConsoleFormatter::format_json(&report(AnalysisResult::completed(
            parties(),
            clauses(),
            "Summary.".into(),
        )));
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            json["result"]["parties"]["company"],
            "Rogue Company Pvt. Ltd."
        );
        assert_eq!(json["result"]["clauses"][0]["text"], "1. Services");
        assert_eq!(json["entities"][1]["label"], "PERSON");
        assert_eq!(json["bounds"]["max_length"], 100);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(ConsoleFormatter::wrap("a bb ccc dddd", 6), "a bb\nccc\ndddd");
        assert_eq!(ConsoleFormatter::wrap("", 10), "");
    }
}
