//! Recognizer output for one document

use super::entity::Entity;
use super::token::Token;
use serde::{Deserialize, Serialize};

/// Entities and tokens produced from a single recognizer call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    pub entities: Vec<Entity>,
    pub tokens: Vec<Token>,
}

impl AnnotatedDocument {
    pub fn new(entities: Vec<Entity>, tokens: Vec<Token>) -> Self {
        Self { entities, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.tokens.is_empty()
    }
}
