//! Console progress notifiers

pub mod reporter;
