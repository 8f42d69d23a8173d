use serde::{Deserialize, Serialize};

/// Structured record produced by one extraction pass over raw note text.
///
/// A pure function of the input: extracting the same text twice yields an
/// identical record. Field names serialize in camelCase to match what the UI
/// layer renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalRecord {
    pub vitals: Vitals,
    pub labs: Vec<LabResult>,
    /// Filled by the conversation intake collaborator, never by the extractor.
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub demographics: Demographics,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Empty when no chief complaint line was found.
    pub chief_complaint: String,
}

/// Vital signs. Absence means "not found in the note", not zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// Raw "systolic/diastolic" text as written, e.g. "140/90".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,
    /// Beats per minute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
    /// Degrees Fahrenheit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<u32>,
    /// Breaths per minute. Collaborator-supplied; there is no note pattern
    /// for it today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Lowercased literal as matched: "male", "female", "man", or "woman".
    /// Deliberately not canonicalized to a male/female pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// One matched lab analyte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabResult {
    /// First whitespace-delimited token of the pattern match, exactly as
    /// written in the note. May carry punctuation ("Troponin:") or casing.
    pub name: String,
    /// Raw numeric text as captured, not parsed to a number.
    pub value: String,
    /// Word token following the value; empty when none was captured.
    #[serde(default)]
    pub unit: String,
    pub abnormal: bool,
}
