use serde::{Deserialize, Serialize};

/// Severity band shared by every score, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

/// A named clinical risk score with its display interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalScore {
    pub name: String,
    /// Scale depends on the score type.
    pub value: u32,
    pub interpretation: String,
    pub severity: Severity,
}
