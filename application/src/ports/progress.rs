//! Progress notification port
//!
//! Defines the interface for reporting progress during an analysis.

/// Steps of one analysis run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStage {
    /// Tokenizing and recognizing entities
    Recognizing,
    /// Resolving parties and detecting clause headings
    Extracting,
    /// Waiting on the summarizer
    Summarizing,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Recognizing => "recognizing",
            AnalysisStage::Extracting => "extracting",
            AnalysisStage::Summarizing => "summarizing",
        }
    }

    /// Human-readable label used by progress displays
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisStage::Recognizing => "Recognizing entities",
            AnalysisStage::Extracting => "Extracting parties and clauses",
            AnalysisStage::Summarizing => "Summarizing (this may take a moment)",
        }
    }
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Callback for progress updates during an analysis
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, TUI status bar).
pub trait AnalysisProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: AnalysisStage);

    /// Called when a stage finishes
    fn on_stage_complete(&self, stage: AnalysisStage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl AnalysisProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: AnalysisStage) {}
    fn on_stage_complete(&self, _stage: AnalysisStage, _success: bool) {}
}
