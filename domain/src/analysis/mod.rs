//! Analysis result model.
//!
//! - [`result::AnalysisResult`]: the single output record of one analysis run
//! - [`bounds::SummaryBounds`]: summary length presets for each front end

pub mod bounds;
pub mod result;
