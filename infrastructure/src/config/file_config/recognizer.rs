//! Recognizer configuration from TOML (`[recognizer]` section)
//!
//! ```toml
//! [recognizer]
//! extra_organization_suffixes = ["S.A.", "AG"]
//! extra_honorifics = ["Adv", "Shri"]
//! ```

use crate::recognizer::{DEFAULT_HONORIFICS, DEFAULT_ORGANIZATION_SUFFIXES};
use serde::{Deserialize, Serialize};

/// Raw recognizer configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecognizerConfig {
    /// Corporate designators added to the built-in list
    pub extra_organization_suffixes: Vec<String>,
    /// Titles added to the built-in honorific list
    pub extra_honorifics: Vec<String>,
}

impl FileRecognizerConfig {
    /// Built-in suffixes followed by the configured extras
    pub fn organization_suffixes(&self) -> Vec<String> {
        Self::merged(DEFAULT_ORGANIZATION_SUFFIXES, &self.extra_organization_suffixes)
    }

    /// Built-in honorifics followed by the configured extras
    pub fn honorifics(&self) -> Vec<String> {
        Self::merged(DEFAULT_HONORIFICS, &self.extra_honorifics)
    }

    fn merged(defaults: &[&str], extra: &[String]) -> Vec<String> {
        let mut words: Vec<String> = defaults.iter().map(|s| s.to_string()).collect();
        for word in extra {
            let word = word.trim();
            if !word.is_empty() && !words.iter().any(|w| w == word) {
                words.push(word.to_string());
            }
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_extend_defaults_without_duplicates() {
        let config = FileRecognizerConfig {
            extra_organization_suffixes: vec!["AG".into(), "Ltd".into(), "  ".into()],
            extra_honorifics: vec![],
        };
        let suffixes = config.organization_suffixes();
        assert_eq!(suffixes.len(), DEFAULT_ORGANIZATION_SUFFIXES.len() + 1);
        assert_eq!(suffixes.last().map(String::as_str), Some("AG"));
        assert_eq!(config.honorifics().len(), DEFAULT_HONORIFICS.len());
    }
}
