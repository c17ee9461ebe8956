//! Progress reporting for analysis runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use legal_application::{AnalysisProgressNotifier, AnalysisStage};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one indicatif spinner per stage (on stderr)
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stage_prefix(stage: AnalysisStage) -> &'static str {
        match stage {
            AnalysisStage::Recognizing => "[1/3]",
            AnalysisStage::Extracting => "[2/3]",
            AnalysisStage::Summarizing => "[3/3]",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: AnalysisStage) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::stage_prefix(stage));
        pb.set_message(format!("{}...", stage.display_name()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_stage_complete(&self, stage: AnalysisStage, success: bool) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            let mark = if success { "v".green() } else { "x".red() };
            pb.finish_with_message(format!("{} {}", mark, stage.display_name()));
        }
    }
}

/// Simple text-based progress (no spinners), written to stderr
pub struct SimpleProgress;

impl AnalysisProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: AnalysisStage) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            ProgressReporter::stage_prefix(stage),
            stage.display_name().bold()
        );
    }

    fn on_stage_complete(&self, stage: AnalysisStage, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stage.as_str());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stage.as_str());
        }
    }
}
