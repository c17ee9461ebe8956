//! Domain layer for legal-analyzer
//!
//! This crate contains the core extraction logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Annotated document
//!
//! A recognizer turns raw agreement text into two flat streams:
//!
//! - **Entities**: labeled spans (organization, person, date, ...)
//! - **Tokens**: words and punctuation with digit / punctuation / title-case flags
//!
//! ## Extraction
//!
//! - [`PartyResolver`] picks the contracting parties from the entity stream
//! - [`ClauseDetector`] finds numbered clause headings in the token stream
//!
//! Both are pure functions of their input and hold no state between documents.

pub mod analysis;
pub mod clauses;
pub mod config;
pub mod core;
pub mod document;
pub mod parties;

// Re-export commonly used types
pub use analysis::{
    bounds::SummaryBounds,
    result::{AnalysisError, AnalysisResult, ErrorKind, MIN_INPUT_CHARS, is_too_short},
};
pub use clauses::detector::{ClauseDetector, ClauseSpan};
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    string::truncate,
};
pub use document::{
    annotated::AnnotatedDocument,
    entity::{Entity, EntityLabel},
    sample::SAMPLE_AGREEMENT,
    token::Token,
};
pub use parties::resolver::{PartyMap, PartyResolver};
