//! Interactive form state
//!
//! Owns the input buffer (byte-indexed cursor, always on a char boundary),
//! the output pane contents and the single in-flight analysis marker.

use legal_application::AnalysisStage;
use legal_domain::AnalysisResult;
use std::time::{Duration, Instant};

/// What the output pane shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormOutput {
    /// Nothing analyzed yet (or cleared)
    #[default]
    Empty,
    /// An analysis is in flight
    Analyzing { stage: Option<AnalysisStage> },
    /// Finished analysis (including short-input rejection and summarizer failure)
    Report(AnalysisResult),
    /// The analysis itself failed (recognizer error or timeout)
    Failed(String),
}

/// Analysis currently running in the background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub run_id: u64,
    pub started: Instant,
}

/// Complete form state
#[derive(Debug, Default)]
pub struct FormState {
    pub input: String,
    pub cursor_pos: usize,
    pub output: FormOutput,
    pub output_scroll: u16,
    pub in_flight: Option<InFlight>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    next_run_id: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Insert pasted text; `\r\n` and `\r` become `\n`
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.input.insert_str(self.cursor_pos, &normalized);
        self.cursor_pos += normalized.len();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        if let Some(len) = self.prev_char_len() {
            self.cursor_pos -= len;
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.input.remove(self.cursor_pos);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(len) = self.prev_char_len() {
            self.cursor_pos -= len;
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_pos..].chars().next() {
            self.cursor_pos += c.len_utf8();
        }
    }

    /// Start of the current line
    pub fn cursor_home(&mut self) {
        self.cursor_pos = self.input[..self.cursor_pos]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// End of the current line
    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input[self.cursor_pos..]
            .find('\n')
            .map(|i| self.cursor_pos + i)
            .unwrap_or(self.input.len());
    }

    /// Zero-based (line, column) of the cursor, column in chars
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.input[..self.cursor_pos];
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|s| s.chars().count())
            .unwrap_or(0);
        (line, col)
    }

    fn prev_char_len(&self) -> Option<usize> {
        self.input[..self.cursor_pos]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
    }

    // -- Form actions --

    /// Reset input and output; an in-flight analysis is forgotten
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
        self.output = FormOutput::Empty;
        self.output_scroll = 0;
        self.in_flight = None;
    }

    /// Mark a new analysis as started and return its id
    ///
    /// Returns `None` while another analysis is still running.
    pub fn begin_analysis(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            self.set_flash("An analysis is already running");
            return None;
        }

        self.next_run_id += 1;
        self.in_flight = Some(InFlight {
            run_id: self.next_run_id,
            started: Instant::now(),
        });
        self.output = FormOutput::Analyzing { stage: None };
        self.output_scroll = 0;
        Some(self.next_run_id)
    }

    /// Record a stage change for the given run
    pub fn stage_started(&mut self, run_id: u64, stage: AnalysisStage) {
        if self.is_current(run_id) {
            self.output = FormOutput::Analyzing { stage: Some(stage) };
        }
    }

    /// Store the outcome of `run_id`; stale runs are ignored
    pub fn finish_analysis(&mut self, run_id: u64, output: FormOutput) -> bool {
        if !self.is_current(run_id) {
            return false;
        }
        self.in_flight = None;
        self.output = output;
        true
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    fn is_current(&self, run_id: u64) -> bool {
        self.in_flight.is_some_and(|f| f.run_id == run_id)
    }

    // -- Output scrolling --

    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= max_age
        {
            self.flash_message = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing() {
        let mut state = FormState::new();
        state.insert_char('h');
        state.insert_char('₹');
        assert_eq!(state.input, "h₹");
        assert_eq!(state.cursor_pos, 1 + '₹'.len_utf8());

        state.delete_char();
        assert_eq!(state.input, "h");
        assert_eq!(state.cursor_pos, 1);
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut state = FormState::new();
        state.insert_str("1. Services.\r\n2. Term.\r");
        assert_eq!(state.input, "1. Services.\n2. Term.\n");
        assert_eq!(state.cursor_pos, state.input.len());
    }

    #[test]
    fn test_cursor_movement_by_line() {
        let mut state = FormState::new();
        state.insert_str("ab\ncde");
        assert_eq!(state.cursor_line_col(), (1, 3));

        state.cursor_home();
        assert_eq!(state.cursor_pos, 3);
        assert_eq!(state.cursor_line_col(), (1, 0));

        state.cursor_left();
        assert_eq!(state.cursor_line_col(), (0, 2));

        state.cursor_home();
        state.cursor_end();
        assert_eq!(state.cursor_pos, 2);

        state.cursor_right();
        state.cursor_right();
        state.delete_forward();
        assert_eq!(state.input, "ab\nce");
    }

    #[test]
    fn test_single_analysis_in_flight() {
        let mut state = FormState::new();
        let first = state.begin_analysis().unwrap();
        assert_eq!(state.output, FormOutput::Analyzing { stage: None });
        assert!(state.begin_analysis().is_none());
        assert!(state.flash_message.is_some());

        state.stage_started(first, AnalysisStage::Summarizing);
        assert_eq!(
            state.output,
            FormOutput::Analyzing {
                stage: Some(AnalysisStage::Summarizing)
            }
        );

        assert!(state.finish_analysis(first, FormOutput::Failed("boom".into())));
        assert!(!state.is_busy());
        assert_eq!(state.output, FormOutput::Failed("boom".into()));

        let second = state.begin_analysis().unwrap();
        assert!(second > first);
    }

    #[test]
    fn test_clear_drops_stale_results() {
        let mut state = FormState::new();
        state.insert_str("text");
        let run = state.begin_analysis().unwrap();
        state.clear();

        assert!(state.input.is_empty());
        assert_eq!(state.output, FormOutput::Empty);
        assert!(!state.finish_analysis(run, FormOutput::Failed("late".into())));
        assert_eq!(state.output, FormOutput::Empty);
    }

    #[test]
    fn test_flash_message() {
        let mut state = FormState::new();
        state.set_flash("hello");
        state.expire_flash(Duration::from_secs(60));
        assert!(state.flash_message.is_some());
        state.expire_flash(Duration::ZERO);
        assert!(state.flash_message.is_none());
    }
}
