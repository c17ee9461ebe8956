//! Clause-heading detection.

pub mod detector;
