//! Output widget: analysis sections, the in-flight notice or an error

use crate::output::messages::{
    ANALYZING, CLAUSES_TITLE, NO_CLAUSES, PARTIES_TITLE, SHORT_INPUT, SUMMARY_TITLE, is_rejected,
    party_or_not_found, summary_text,
};
use crate::tui::state::{FormOutput, FormState};
use legal_domain::AnalysisResult;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct OutputWidget<'a> {
    state: &'a FormState,
}

impl<'a> OutputWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }
}

/// Lines shown for a given output state
pub fn output_lines(output: &FormOutput) -> Vec<Line<'static>> {
    match output {
        FormOutput::Empty => vec![Line::styled(
            "Results will appear here.",
            Style::default().fg(Color::DarkGray),
        )],
        FormOutput::Analyzing { stage } => {
            let mut lines = vec![Line::styled(ANALYZING, Style::default().fg(Color::Yellow))];
            if let Some(stage) = stage {
                lines.push(Line::styled(
                    format!("  {}", stage.display_name()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines
        }
        FormOutput::Report(result) if is_rejected(result) => {
            vec![Line::styled(SHORT_INPUT, Style::default().fg(Color::Red))]
        }
        FormOutput::Report(result) => report_lines(result),
        FormOutput::Failed(detail) => vec![Line::styled(
            format!("Error: {}", detail),
            Style::default().fg(Color::Red),
        )],
    }
}

fn report_lines(result: &AnalysisResult) -> Vec<Line<'static>> {
    let title = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        Line::styled(PARTIES_TITLE, title),
        Line::from(vec![
            Span::styled("  Company:    ", label),
            Span::raw(party_or_not_found(result.parties.company.as_deref()).to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Consultant: ", label),
            Span::raw(party_or_not_found(result.parties.consultant.as_deref()).to_string()),
        ]),
        Line::default(),
        Line::styled(CLAUSES_TITLE, title),
    ];

    if result.clauses.is_empty() {
        lines.push(Line::raw(format!("  {}", NO_CLAUSES)));
    }
    for clause in &result.clauses {
        lines.push(Line::raw(format!("  - {}", clause.text)));
    }

    lines.push(Line::default());
    lines.push(Line::styled(SUMMARY_TITLE, title));
    let summary_style = if result.summary.is_some() {
        Style::default()
    } else {
        Style::default().fg(Color::Red)
    };
    lines.push(Line::styled(format!("  {}", summary_text(result)), summary_style));

    lines
}

impl<'a> Widget for OutputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Analysis ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(output_lines(&self.state.output))
            .block(block)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((self.state.output_scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legal_domain::{ClauseSpan, PartyMap};

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_report_sections() {
        let result = AnalysisResult::completed(
            PartyMap {
                company: Some("Rogue Company Pvt. Ltd.".into()),
                consultant: Some("Prerna".into()),
            },
            vec![ClauseSpan {
                text: "2. Term".into(),
                start_index: 4,
                end_index: 6,
            }],
            "Six month engagement.".into(),
        );
        let text = plain(&output_lines(&FormOutput::Report(result)));

        assert_eq!(text[0], "1. Extracted Parties");
        assert_eq!(text[1], "  Company:    Rogue Company Pvt. Ltd.");
        assert_eq!(text[2], "  Consultant: Prerna");
        assert!(text.contains(&"2. Key Clauses Found".to_string()));
        assert!(text.contains(&"  - 2. Term".to_string()));
        assert_eq!(text.last().unwrap(), "  Six month engagement.");
    }

    #[test]
    fn test_missing_parties_and_clauses() {
        let result = AnalysisResult::summarization_failed(PartyMap::default(), vec![], "offline");
        let text = plain(&output_lines(&FormOutput::Report(result)));
        assert_eq!(text[1], "  Company:    Not Found");
        assert!(text.contains(&"  No clauses found with the current pattern.".to_string()));
        assert_eq!(
            text.last().unwrap(),
            "  An error occurred during summarization: offline"
        );
    }

    #[test]
    fn test_short_input_and_in_flight() {
        let text = plain(&output_lines(&FormOutput::Report(
            AnalysisResult::input_too_short(),
        )));
        assert_eq!(text, vec!["Error: Please paste a legal document."]);

        let text = plain(&output_lines(&FormOutput::Analyzing { stage: None }));
        assert_eq!(text, vec!["Analyzing… (Summarization may take a moment)"]);
    }
}
