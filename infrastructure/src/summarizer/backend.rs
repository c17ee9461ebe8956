//! Summarizer selected from configuration

use super::ExtractiveSummarizer;
#[cfg(feature = "remote-summarizer")]
use super::HuggingFaceSummarizer;
use crate::config::{FileSummarizerConfig, SummarizerKind};
use async_trait::async_trait;
use legal_application::{SummarizationError, Summarizer};
use legal_domain::SummaryBounds;
use tracing::info;

/// The configured summarizer implementation
pub enum SummarizerBackend {
    Extractive(ExtractiveSummarizer),
    #[cfg(feature = "remote-summarizer")]
    HuggingFace(HuggingFaceSummarizer),
}

impl SummarizerBackend {
    /// Build the backend named by `[summarizer] backend`
    pub fn from_config(config: &FileSummarizerConfig) -> Result<Self, SummarizationError> {
        let kind = config.parse_backend().map_err(|value| {
            SummarizationError::Unavailable(format!("unknown summarizer backend '{}'", value))
        })?;

        let backend = match kind {
            SummarizerKind::Extractive => Self::Extractive(ExtractiveSummarizer::new()),
            #[cfg(feature = "remote-summarizer")]
            SummarizerKind::HuggingFace => {
                Self::HuggingFace(HuggingFaceSummarizer::from_config(config)?)
            }
            #[cfg(not(feature = "remote-summarizer"))]
            SummarizerKind::HuggingFace => {
                return Err(SummarizationError::Unavailable(
                    "the huggingface backend requires the `remote-summarizer` feature"
                        .to_string(),
                ));
            }
        };

        info!("Summarizer backend: {}", backend.name());
        Ok(backend)
    }
}

#[async_trait]
impl Summarizer for SummarizerBackend {
    fn name(&self) -> &str {
        match self {
            Self::Extractive(s) => s.name(),
            #[cfg(feature = "remote-summarizer")]
            Self::HuggingFace(s) => s.name(),
        }
    }

    async fn summarize(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizationError> {
        match self {
            Self::Extractive(s) => s.summarize(text, bounds).await,
            #[cfg(feature = "remote-summarizer")]
            Self::HuggingFace(s) => s.summarize(text, bounds).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_extractive() {
        let backend = SummarizerBackend::from_config(&FileSummarizerConfig::default()).unwrap();
        assert_eq!(backend.name(), "extractive");
    }

    #[test]
    fn test_unknown_backend_is_unavailable() {
        let config = FileSummarizerConfig {
            backend: "openai".into(),
            ..Default::default()
        };
        assert!(matches!(
            SummarizerBackend::from_config(&config),
            Err(SummarizationError::Unavailable(msg)) if msg.contains("openai")
        ));
    }

    #[cfg(not(feature = "remote-summarizer"))]
    #[test]
    fn test_huggingface_requires_feature() {
        let config = FileSummarizerConfig {
            backend: "huggingface".into(),
            ..Default::default()
        };
        assert!(SummarizerBackend::from_config(&config).is_err());
    }

    #[cfg(feature = "remote-summarizer")]
    #[test]
    fn test_huggingface_backend() {
        let config = FileSummarizerConfig {
            backend: "huggingface".into(),
            api_token_env: "LEGAL_ANALYZER_TEST_UNSET_TOKEN".into(),
            ..Default::default()
        };
        let backend = SummarizerBackend::from_config(&config).unwrap();
        assert_eq!(backend.name(), "huggingface");
    }
}
