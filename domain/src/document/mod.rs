//! Annotated document model.
//!
//! The recognizer (an infrastructure adapter) produces these types; the
//! extraction heuristics in [`crate::parties`] and [`crate::clauses`] only read
//! them.

pub mod annotated;
pub mod entity;
pub mod sample;
pub mod token;
