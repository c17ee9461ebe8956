//! Summary length bounds value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Minimum / maximum summary length handed to the summarizer (Value Object)
///
/// Lengths are in summarizer units (model tokens for neural backends,
/// words for the extractive one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBounds {
    pub min_length: usize,
    pub max_length: usize,
}

impl SummaryBounds {
    /// Validate and create bounds
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, DomainError> {
        if max_length == 0 {
            return Err(DomainError::ZeroMaxLength);
        }
        if min_length > max_length {
            return Err(DomainError::InvertedBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    /// Preset for one-shot console runs
    pub const fn console() -> Self {
        Self {
            min_length: 30,
            max_length: 100,
        }
    }

    /// Preset for the interactive form
    pub const fn interactive() -> Self {
        Self {
            min_length: 40,
            max_length: 150,
        }
    }

    /// Override either end, re-validating the result
    pub fn with_overrides(
        self,
        min_length: Option<usize>,
        max_length: Option<usize>,
    ) -> Result<Self, DomainError> {
        Self::new(
            min_length.unwrap_or(self.min_length),
            max_length.unwrap_or(self.max_length),
        )
    }
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self::console()
    }
}

impl std::fmt::Display for SummaryBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.min_length, self.max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_independent() {
        assert_eq!(SummaryBounds::console(), SummaryBounds::new(30, 100).unwrap());
        assert_eq!(
            SummaryBounds::interactive(),
            SummaryBounds::new(40, 150).unwrap()
        );
        assert_ne!(SummaryBounds::console(), SummaryBounds::interactive());
    }

    #[test]
    fn test_rejects_invalid_bounds() {
        assert_eq!(SummaryBounds::new(10, 0), Err(DomainError::ZeroMaxLength));
        assert_eq!(
            SummaryBounds::new(120, 100),
            Err(DomainError::InvertedBounds { min: 120, max: 100 })
        );
        assert!(SummaryBounds::new(50, 50).is_ok());
    }

    #[test]
    fn test_overrides() {
        let bounds = SummaryBounds::console()
            .with_overrides(None, Some(60))
            .unwrap();
        assert_eq!(bounds, SummaryBounds::new(30, 60).unwrap());

        assert!(
            SummaryBounds::console()
                .with_overrides(Some(200), None)
                .is_err()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SummaryBounds::interactive().to_string(), "40..150");
    }
}
