//! Narrative analysis of a structured record.
//!
//! The provider trait is the seam where a model-backed service would plug in;
//! the crate ships the canned cardiac-workup narrative the product renders
//! today, parameterized by what the record actually contains.

pub mod provider;
pub mod types;

pub use provider::{AnalysisProvider, CannedAnalysisProvider};
pub use types::AnalysisReport;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Analysis provider unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
