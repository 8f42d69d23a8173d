use serde::{Deserialize, Serialize};

/// Narrative report rendered alongside the structured data and scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Differential diagnoses, most likely first.
    pub differential: Vec<String>,
    pub lab_interpretation: String,
    /// Suggested therapy lines, one entry per agent.
    pub therapy: Vec<String>,
    pub summary: String,
}
