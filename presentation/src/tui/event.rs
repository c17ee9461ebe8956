//! TUI event types
//!
//! Key bindings map terminal input to [`FormAction`]s; background analysis
//! tasks report back through [`TuiEvent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use legal_application::{AnalysisProgressNotifier, AnalysisStage};
use std::time::Duration;
use tokio::sync::mpsc;

use super::state::FormOutput;

/// What a key press asks the form to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Analyze,
    Clear,
    Quit,
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ScrollUp,
    ScrollDown,
    None,
}

/// Map a key press to an action
///
/// Ctrl+R / F5 analyze, Ctrl+L clears, Esc / Ctrl+C quit.
pub fn map_key(key: KeyEvent) -> FormAction {
    if key.kind == KeyEventKind::Release {
        return FormAction::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => FormAction::Quit,
        KeyCode::Char('r') if ctrl => FormAction::Analyze,
        KeyCode::Char('l') if ctrl => FormAction::Clear,
        KeyCode::Char(_) if ctrl => FormAction::None,
        KeyCode::Char(c) => FormAction::Insert(c),
        KeyCode::F(5) => FormAction::Analyze,
        KeyCode::Esc => FormAction::Quit,
        KeyCode::Enter => FormAction::Newline,
        KeyCode::Tab => FormAction::Insert('\t'),
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Delete => FormAction::Delete,
        KeyCode::Left => FormAction::Left,
        KeyCode::Right => FormAction::Right,
        KeyCode::Home => FormAction::Home,
        KeyCode::End => FormAction::End,
        KeyCode::PageUp | KeyCode::Up => FormAction::ScrollUp,
        KeyCode::PageDown | KeyCode::Down => FormAction::ScrollDown,
        _ => FormAction::None,
    }
}

/// How a background analysis ended
#[derive(Debug)]
pub enum AnalysisOutcome {
    Finished(FormOutput),
    TimedOut(Duration),
}

impl AnalysisOutcome {
    pub fn into_output(self) -> FormOutput {
        match self {
            Self::Finished(output) => output,
            Self::TimedOut(limit) => {
                FormOutput::Failed(format!("Analysis did not finish within {:?}", limit))
            }
        }
    }
}

/// Events sent from analysis tasks to the UI loop
#[derive(Debug)]
pub enum TuiEvent {
    StageStarted { run_id: u64, stage: AnalysisStage },
    Finished { run_id: u64, outcome: AnalysisOutcome },
}

/// Forwards stage starts of one run to the UI loop
pub struct ChannelProgress {
    run_id: u64,
    tx: mpsc::UnboundedSender<TuiEvent>,
}

impl ChannelProgress {
    pub fn new(run_id: u64, tx: mpsc::UnboundedSender<TuiEvent>) -> Self {
        Self { run_id, tx }
    }
}

impl AnalysisProgressNotifier for ChannelProgress {
    fn on_stage_start(&self, stage: AnalysisStage) {
        let _ = self.tx.send(TuiEvent::StageStarted {
            run_id: self.run_id,
            stage,
        });
    }

    fn on_stage_complete(&self, _stage: AnalysisStage, _success: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            map_key(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            FormAction::Analyze
        );
        assert_eq!(map_key(key(KeyCode::F(5), KeyModifiers::NONE)), FormAction::Analyze);
        assert_eq!(
            map_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            FormAction::Clear
        );
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), FormAction::Quit);
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            FormAction::Quit
        );
        assert_eq!(
            map_key(key(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            FormAction::Insert('R')
        );
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE)), FormAction::Newline);
    }

    #[test]
    fn test_timeout_outcome_message() {
        let output = AnalysisOutcome::TimedOut(Duration::from_secs(120)).into_output();
        assert_eq!(
            output,
            FormOutput::Failed("Analysis did not finish within 120s".into())
        );
    }

    #[test]
    fn test_channel_progress_tags_run() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let progress = ChannelProgress::new(7, tx);
        progress.on_stage_start(AnalysisStage::Recognizing);
        progress.on_stage_complete(AnalysisStage::Recognizing, true);

        match rx.try_recv().unwrap() {
            TuiEvent::StageStarted { run_id, stage } => {
                assert_eq!(run_id, 7);
                assert_eq!(stage, AnalysisStage::Recognizing);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(rx.try_recv().is_err());
    }
}
