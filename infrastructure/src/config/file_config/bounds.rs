//! Summary bounds from TOML (`[console]` and `[interactive]` sections)

use legal_domain::{DomainError, SummaryBounds};
use serde::{Deserialize, Serialize};

/// Raw console preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsoleConfig {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for FileConsoleConfig {
    fn default() -> Self {
        let preset = SummaryBounds::console();
        Self {
            min_length: preset.min_length,
            max_length: preset.max_length,
        }
    }
}

impl FileConsoleConfig {
    pub fn bounds(&self) -> Result<SummaryBounds, DomainError> {
        SummaryBounds::new(self.min_length, self.max_length)
    }
}

/// Raw interactive form preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInteractiveConfig {
    pub min_length: usize,
    pub max_length: usize,
    /// Upper limit on one analysis in the interactive form; unset means no limit
    pub timeout_seconds: Option<u64>,
}

impl Default for FileInteractiveConfig {
    fn default() -> Self {
        let preset = SummaryBounds::interactive();
        Self {
            min_length: preset.min_length,
            max_length: preset.max_length,
            timeout_seconds: None,
        }
    }
}

impl FileInteractiveConfig {
    pub fn bounds(&self) -> Result<SummaryBounds, DomainError> {
        SummaryBounds::new(self.min_length, self.max_length)
    }

    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_seconds.map(std::time::Duration::from_secs)
    }
}
