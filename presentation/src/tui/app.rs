//! TUI application: the interactive analysis form
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 analysis task (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ use_case.execute_with_progress()
//!   ├─ event_rx (TuiEvent)  <──────────── ├─ ChannelProgress (stage starts)
//!   └─ tick_interval                      └─ TuiEvent::Finished
//! ```
//!
//! At most one analysis runs at a time; the UI stays responsive while it
//! does and results from cleared runs are discarded.

use super::event::{AnalysisOutcome, ChannelProgress, FormAction, TuiEvent, map_key};
use super::state::{FormOutput, FormState};
use super::widgets::{
    FormLayout, header::HeaderWidget, input::InputWidget, output::OutputWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use legal_application::{AnalyzeDocumentUseCase, EntitySource, Summarizer};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Main TUI application
pub struct TuiApp<E, S>
where
    E: EntitySource + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    use_case: Arc<AnalyzeDocumentUseCase<E, S>>,
    timeout: Option<Duration>,
    event_tx: mpsc::UnboundedSender<TuiEvent>,
    event_rx: mpsc::UnboundedReceiver<TuiEvent>,
    task: Option<JoinHandle<()>>,
    backends: String,
}

impl<E, S> TuiApp<E, S>
where
    E: EntitySource + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    pub fn new(use_case: Arc<AnalyzeDocumentUseCase<E, S>>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            use_case,
            timeout: None,
            event_tx,
            event_rx,
            task: None,
            backends: String::new(),
        }
    }

    /// Give up on an analysis after `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Backend names shown in the header
    pub fn with_backends(mut self, backends: impl Into<String>) -> Self {
        self.backends = backends.into();
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        install_panic_hook();

        let result = self.event_loop(&mut terminal).await;

        self.abort_task();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = FormState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        info!("Interactive form started");

        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(term_event)) => self.handle_terminal_event(&mut state, term_event),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },

                Some(event) = self.event_rx.recv() => {
                    self.apply_event(&mut state, event);
                }

                _ = tick.tick() => {
                    state.expire_flash(Duration::from_secs(4));
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut ratatui::Frame, state: &FormState) {
        let layout = FormLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(&self.backends), layout.header);
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(OutputWidget::new(state), layout.output);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if let Some(position) = InputWidget::new(state).cursor_position(layout.input) {
            frame.set_cursor_position(position);
        }
    }

    fn handle_terminal_event(&mut self, state: &mut FormState, event: Event) {
        match event {
            Event::Key(key) => self.handle_action(state, map_key(key)),
            Event::Paste(text) => state.insert_str(&text),
            _ => {}
        }
    }

    fn handle_action(&mut self, state: &mut FormState, action: FormAction) {
        match action {
            FormAction::Analyze => self.start_analysis(state),
            FormAction::Clear => {
                self.abort_task();
                state.clear();
            }
            FormAction::Quit => state.should_quit = true,
            FormAction::Insert(c) => state.insert_char(c),
            FormAction::Newline => state.insert_newline(),
            FormAction::Backspace => state.delete_char(),
            FormAction::Delete => state.delete_forward(),
            FormAction::Left => state.cursor_left(),
            FormAction::Right => state.cursor_right(),
            FormAction::Home => state.cursor_home(),
            FormAction::End => state.cursor_end(),
            FormAction::ScrollUp => state.scroll_up(),
            FormAction::ScrollDown => state.scroll_down(),
            FormAction::None => {}
        }
    }

    fn start_analysis(&mut self, state: &mut FormState) {
        let Some(run_id) = state.begin_analysis() else {
            return;
        };
        debug!("Starting analysis run {}", run_id);

        let use_case = Arc::clone(&self.use_case);
        let tx = self.event_tx.clone();
        let timeout = self.timeout;
        let text = state.input.clone();

        self.task = Some(tokio::spawn(async move {
            let progress = ChannelProgress::new(run_id, tx.clone());
            let analysis = async {
                match use_case.execute_with_progress(&text, &progress).await {
                    Ok(result) => FormOutput::Report(result),
                    Err(e) => {
                        warn!("Analysis run {} failed: {}", run_id, e);
                        FormOutput::Failed(e.to_string())
                    }
                }
            };

            let outcome = match timeout {
                Some(limit) => match tokio::time::timeout(limit, analysis).await {
                    Ok(output) => AnalysisOutcome::Finished(output),
                    Err(_) => AnalysisOutcome::TimedOut(limit),
                },
                None => AnalysisOutcome::Finished(analysis.await),
            };

            let _ = tx.send(TuiEvent::Finished { run_id, outcome });
        }));
    }

    fn apply_event(&mut self, state: &mut FormState, event: TuiEvent) {
        match event {
            TuiEvent::StageStarted { run_id, stage } => state.stage_started(run_id, stage),
            TuiEvent::Finished { run_id, outcome } => {
                if state.finish_analysis(run_id, outcome.into_output()) {
                    self.task = None;
                } else {
                    debug!("Discarding result of stale run {}", run_id);
                }
            }
        }
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Restore the terminal before the default panic output is printed
///
/// Chains onto the existing hook on the first call only; returns whether
/// this call installed it.
fn install_panic_hook() -> bool {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return false;
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(info);
    }));
    true
}
