//! Contracting-party resolution.

pub mod resolver;
