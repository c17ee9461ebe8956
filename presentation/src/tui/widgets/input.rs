//! Input widget: the pasted agreement, scrolled to keep the cursor visible

use crate::tui::state::FormState;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a FormState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    /// First visible line so the cursor line fits in `inner_height` rows
    pub fn scroll_offset(cursor_line: usize, inner_height: usize) -> usize {
        if inner_height == 0 {
            return cursor_line;
        }
        (cursor_line + 1).saturating_sub(inner_height)
    }

    /// Terminal position of the cursor inside `area`, if visible
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;
        let (line, col) = self.state.cursor_line_col();
        let row = line - Self::scroll_offset(line, inner_height);
        if inner_height == 0 || col >= inner_width {
            return None;
        }
        Some(Position::new(
            area.x + 1 + col as u16,
            area.y + 1 + row as u16,
        ))
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.state.is_busy() {
            Color::DarkGray
        } else {
            Color::Green
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Paste Legal Document ")
            .style(Style::default().fg(color));

        let inner_height = area.height.saturating_sub(2) as usize;
        let (cursor_line, _) = self.state.cursor_line_col();
        let offset = Self::scroll_offset(cursor_line, inner_height);

        let text = if self.state.input.is_empty() {
            Text::from(Line::styled(
                "Paste or type an agreement, then press Ctrl+R (or F5) to analyze",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Text::from(
                self.state
                    .input
                    .split('\n')
                    .map(|l| Line::from(l.replace('\t', "    ")))
                    .collect::<Vec<_>>(),
            )
        };

        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::White))
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}
