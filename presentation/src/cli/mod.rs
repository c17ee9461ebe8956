//! Command-line surface: argument parsing and input reading

pub mod commands;
pub mod input;
