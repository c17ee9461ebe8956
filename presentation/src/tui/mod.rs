//! Interactive analysis form (ratatui)
//!
//! An input pane for pasting an agreement, an output pane with the three
//! report sections and a status bar. Analysis runs in a background task so
//! the form stays responsive while the summarizer works.

mod app;
mod event;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::{AnalysisOutcome, FormAction, TuiEvent, map_key};
pub use state::{FormOutput, FormState};
