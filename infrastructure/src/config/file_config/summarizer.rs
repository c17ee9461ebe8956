//! Summarizer configuration from TOML (`[summarizer]` section)

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which summarizer implementation to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummarizerKind {
    /// Local sentence-scoring summarizer
    #[default]
    Extractive,
    /// Hugging Face inference API (requires the `remote-summarizer` feature)
    HuggingFace,
}

impl SummarizerKind {
    pub const VALID_VALUES: &'static [&'static str] = &["extractive", "huggingface"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizerKind::Extractive => "extractive",
            SummarizerKind::HuggingFace => "huggingface",
        }
    }
}

impl FromStr for SummarizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "extractive" | "local" => Ok(SummarizerKind::Extractive),
            "huggingface" | "hf" => Ok(SummarizerKind::HuggingFace),
            other => Err(other.to_string()),
        }
    }
}

impl std::fmt::Display for SummarizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw summarizer configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSummarizerConfig {
    /// Backend name ("extractive" or "huggingface")
    pub backend: String,
    /// Remote model identifier
    pub model: String,
    /// Base URL of the inference API; the model name is appended
    pub endpoint: String,
    /// Environment variable holding the API token
    pub api_token_env: String,
    /// Request timeout for remote backends
    pub timeout_seconds: u64,
}

impl Default for FileSummarizerConfig {
    fn default() -> Self {
        Self {
            backend: SummarizerKind::Extractive.as_str().to_string(),
            model: "t5-small".to_string(),
            endpoint: "https://api-inference.huggingface.co/models".to_string(),
            api_token_env: "HF_API_TOKEN".to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileSummarizerConfig {
    /// Parse `backend`, returning the raw value on failure
    pub fn parse_backend(&self) -> Result<SummarizerKind, String> {
        self.backend.parse()
    }

    /// Full URL of the configured model
    pub fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}
