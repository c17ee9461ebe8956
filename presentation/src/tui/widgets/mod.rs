//! TUI widgets for the analysis form
//!
//! Layout:
//! ┌── Header (1) ─────────────────────────────┐
//! ├── Input (45%) ────────────────────────────┤
//! ├── Output (flex) ──────────────────────────┤
//! └── StatusBar (1) ──────────────────────────┘

pub mod header;
pub mod input;
pub mod output;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout regions computed from the terminal area
pub struct FormLayout {
    pub header: Rect,
    pub input: Rect,
    pub output: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Percentage(45),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            input: chunks[1],
            output: chunks[2],
            status_bar: chunks[3],
        }
    }
}
