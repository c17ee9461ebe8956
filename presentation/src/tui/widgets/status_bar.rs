//! Status bar widget: busy indicator + key hints + flash messages

use crate::tui::state::FormState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = "Ctrl+R/F5:analyze  Ctrl+L:clear  PgUp/PgDn:scroll  Esc:quit";

pub struct StatusBarWidget<'a> {
    state: &'a FormState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn indicator(&self) -> (String, Color) {
        match &self.state.in_flight {
            Some(flight) => (
                format!("BUSY {}s", flight.started.elapsed().as_secs()),
                Color::Yellow,
            ),
            None => ("READY".to_string(), Color::Green),
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = self.indicator();
        let indicator_width = indicator.chars().count() as u16 + 2;
        let indicator_line = Line::from(Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        let right_text = match &self.state.flash_message {
            Some((flash, _)) => flash.clone(),
            None => KEY_HINTS.to_string(),
        };
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(right_text, bg_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
