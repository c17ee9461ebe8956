//! Header widget: title plus the backends in use

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct HeaderWidget<'a> {
    backends: &'a str,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(backends: &'a str) -> Self {
        Self { backends }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                " Legal Document Analyzer ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.backends, Style::default().fg(Color::DarkGray)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
