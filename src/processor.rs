//! End-to-end pass over one pasted note: extract the structured record, then
//! score it. This is the sequence every caller performs before rendering.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extraction::{self, ClinicalRecord};
use crate::scoring::{self, MedicalScore};

/// Everything one pass over a pasted note produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedNotes {
    pub record: ClinicalRecord,
    pub scores: Vec<MedicalScore>,
}

/// Run extraction and scoring over one pasted note.
///
/// Total and deterministic like its two halves. No state is shared between
/// calls, so concurrent callers need no coordination.
pub fn process_notes(text: &str) -> ProcessedNotes {
    let record = extraction::extract_structured_data(text);
    let scores = scoring::calculate_medical_scores(&record);

    info!(
        labs = record.labs.len(),
        scores = scores.len(),
        complaint_found = !record.chief_complaint.is_empty(),
        "clinical note processed"
    );

    ProcessedNotes { record, scores }
}
