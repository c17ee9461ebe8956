//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid summary bounds: min_length {min} exceeds max_length {max}")]
    InvertedBounds { min: usize, max: usize },

    #[error("Invalid summary bounds: max_length must be greater than 0")]
    ZeroMaxLength,

    #[error("Invalid entity label: {0}")]
    InvalidLabel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_bounds_display() {
        let error = DomainError::InvertedBounds { min: 50, max: 10 };
        assert_eq!(
            error.to_string(),
            "Invalid summary bounds: min_length 50 exceeds max_length 10"
        );
    }
}
