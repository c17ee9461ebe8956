//! Summarizer adapters
//!
//! [`ExtractiveSummarizer`] runs locally and needs no model download.
//! [`HuggingFaceSummarizer`] (feature `remote-summarizer`) calls a hosted
//! model. [`SummarizerBackend`] picks one from configuration.

mod backend;
mod extractive;
#[cfg(feature = "remote-summarizer")]
mod huggingface;

pub use backend::SummarizerBackend;
pub use extractive::ExtractiveSummarizer;
#[cfg(feature = "remote-summarizer")]
pub use huggingface::HuggingFaceSummarizer;
