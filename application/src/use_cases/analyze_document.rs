//! Analyze Document use case
//!
//! Orchestrates one analysis run:
//!
//! 1. Reject near-empty input
//! 2. Tokenize and recognize entities (one recognizer call)
//! 3. Resolve parties and detect clause headings over that tokenization
//! 4. Summarize (one summarizer call; failure is recorded, not raised)
//! 5. Assemble the [`AnalysisResult`]
//!
//! Nothing is retried; callers decide whether to run the whole analysis again.

use crate::ports::entity_source::{EntitySource, RecognitionError};
use crate::ports::progress::{AnalysisProgressNotifier, AnalysisStage, NoProgress};
use crate::ports::summarizer::Summarizer;
use chrono::{DateTime, Utc};
use legal_domain::{
    AnalysisResult, ClauseDetector, Entity, PartyResolver, SummaryBounds, is_too_short,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort an analysis run
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Recognition failed: {0}")]
    Recognition(#[from] RecognitionError),
}

/// Analysis result plus the context it was produced in
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    /// Every entity the recognizer produced, in document order
    pub entities: Vec<Entity>,
    pub recognizer: String,
    pub summarizer: String,
    pub bounds: SummaryBounds,
    pub analyzed_at: DateTime<Utc>,
}

/// Use case for analyzing one legal agreement
///
/// Stateless: independent `execute` calls may run concurrently.
pub struct AnalyzeDocumentUseCase<E, S>
where
    E: EntitySource + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    source: Arc<E>,
    summarizer: Arc<S>,
    bounds: SummaryBounds,
}

impl<E, S> AnalyzeDocumentUseCase<E, S>
where
    E: EntitySource + ?Sized + 'static,
    S: Summarizer + ?Sized + 'static,
{
    pub fn new(source: Arc<E>, summarizer: Arc<S>) -> Self {
        Self {
            source,
            summarizer,
            bounds: SummaryBounds::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: SummaryBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn bounds(&self) -> SummaryBounds {
        self.bounds
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, raw_text: &str) -> Result<AnalysisResult, AnalyzeError> {
        self.execute_with_progress(raw_text, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        raw_text: &str,
        progress: &dyn AnalysisProgressNotifier,
    ) -> Result<AnalysisResult, AnalyzeError> {
        let report = self.execute_detailed(raw_text, progress).await?;
        Ok(report.result)
    }

    /// Execute and keep the recognizer output alongside the result
    pub async fn execute_detailed(
        &self,
        raw_text: &str,
        progress: &dyn AnalysisProgressNotifier,
    ) -> Result<AnalysisReport, AnalyzeError> {
        if is_too_short(raw_text) {
            info!("Input rejected: shorter than the minimum document length");
            return Ok(self.report(AnalysisResult::input_too_short(), Vec::new()));
        }

        info!(
            "Analyzing document ({} chars) with {} / {}",
            raw_text.chars().count(),
            self.source.name(),
            self.summarizer.name()
        );

        // Stage 1: Recognition
        progress.on_stage_start(AnalysisStage::Recognizing);
        let document = match self.recognize(raw_text).await {
            Ok(document) => document,
            Err(e) => {
                progress.on_stage_complete(AnalysisStage::Recognizing, false);
                return Err(e.into());
            }
        };
        progress.on_stage_complete(AnalysisStage::Recognizing, true);
        debug!(
            "Recognized {} entities over {} tokens",
            document.entities.len(),
            document.tokens.len()
        );

        // Stage 2: Extraction
        progress.on_stage_start(AnalysisStage::Extracting);
        let parties = PartyResolver::resolve(&document.entities);
        let clauses = ClauseDetector::detect(&document.tokens);
        progress.on_stage_complete(AnalysisStage::Extracting, true);
        debug!(
            "Company: {:?}, Consultant: {:?}, {} clause headings",
            parties.company,
            parties.consultant,
            clauses.len()
        );

        // Stage 3: Summarization
        progress.on_stage_start(AnalysisStage::Summarizing);
        let result = match self.summarizer.summarize(raw_text, self.bounds).await {
            Ok(summary) => {
                progress.on_stage_complete(AnalysisStage::Summarizing, true);
                AnalysisResult::completed(parties, clauses, summary)
            }
            Err(e) => {
                warn!("Summarization failed: {}", e);
                progress.on_stage_complete(AnalysisStage::Summarizing, false);
                AnalysisResult::summarization_failed(parties, clauses, e.to_string())
            }
        };

        Ok(self.report(result, document.entities))
    }

    /// Run the recognizer on the blocking pool; it is CPU-bound.
    async fn recognize(
        &self,
        raw_text: &str,
    ) -> Result<legal_domain::AnnotatedDocument, RecognitionError> {
        let source = Arc::clone(&self.source);
        let text = raw_text.to_string();

        tokio::task::spawn_blocking(move || source.recognize(&text))
            .await
            .map_err(|e| RecognitionError::Failed(format!("recognizer task panicked: {}", e)))?
    }

    fn report(&self, result: AnalysisResult, entities: Vec<Entity>) -> AnalysisReport {
        AnalysisReport {
            result,
            entities,
            recognizer: self.source.name().to_string(),
            summarizer: self.summarizer.name().to_string(),
            bounds: self.bounds,
            analyzed_at: Utc::now(),
        }
    }
}
