//! Hugging Face inference API summarizer
//!
//! Posts `{"inputs": ..., "parameters": {min_length, max_length, do_sample}}`
//! to `<endpoint>/<model>` and reads `[{"summary_text": ...}]` back.
//! Only available with the `remote-summarizer` feature.

use crate::config::FileSummarizerConfig;
use async_trait::async_trait;
use legal_application::{SummarizationError, Summarizer};
use legal_domain::SummaryBounds;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum response body size (1 MB)
const MAX_BODY_SIZE: usize = 1024 * 1024;

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Debug, Serialize)]
struct SummaryParameters {
    min_length: usize,
    max_length: usize,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

/// Error payload, e.g. `{"error": "Model t5-small is currently loading"}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Summarizer backed by a hosted seq2seq model
pub struct HuggingFaceSummarizer {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

impl HuggingFaceSummarizer {
    /// Build from `[summarizer]`; the API token is read from `api_token_env`
    pub fn from_config(config: &FileSummarizerConfig) -> Result<Self, SummarizationError> {
        let token = std::env::var(&config.api_token_env)
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_none() {
            warn!(
                "{} is not set; calling the inference API anonymously",
                config.api_token_env
            );
        }
        Self::new(
            config.model_url(),
            token,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn new(
        url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("legal-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SummarizationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            token,
        })
    }

    fn map_send_error(err: reqwest::Error) -> SummarizationError {
        if err.is_timeout() {
            SummarizationError::Timeout
        } else if err.is_connect() {
            SummarizationError::Unavailable(err.to_string())
        } else {
            SummarizationError::RequestFailed(err.to_string())
        }
    }
}

/// Decode a response body given its HTTP status
fn parse_response(status: u16, body: &str) -> Result<String, SummarizationError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(if status == 503 {
            SummarizationError::Unavailable(detail)
        } else {
            SummarizationError::RequestFailed(format!("HTTP {}: {}", status, detail))
        });
    }

    let items: Vec<SummaryItem> = serde_json::from_str(body)
        .map_err(|e| SummarizationError::InvalidResponse(e.to_string()))?;

    items
        .into_iter()
        .next()
        .map(|item| item.summary_text.trim().to_string())
        .ok_or_else(|| SummarizationError::InvalidResponse("empty result list".to_string()))
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn summarize(
        &self,
        text: &str,
        bounds: SummaryBounds,
    ) -> Result<String, SummarizationError> {
        if text.trim().is_empty() {
            return Err(SummarizationError::EmptyInput);
        }

        let request = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                min_length: bounds.min_length,
                max_length: bounds.max_length,
                do_sample: false,
            },
        };

        debug!("POST {} (bounds {})", self.url, bounds);
        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::map_send_error)?;
        if body.len() > MAX_BODY_SIZE {
            return Err(SummarizationError::InvalidResponse(format!(
                "response too large: {} bytes (max: {} bytes)",
                body.len(),
                MAX_BODY_SIZE
            )));
        }

        parse_response(status, &String::from_utf8_lossy(&body))
    }
}
