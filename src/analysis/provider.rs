use tracing::debug;

use super::types::AnalysisReport;
use super::AnalysisError;
use crate::extraction::ClinicalRecord;
use crate::scoring::{MedicalScore, Severity};

/// Produces the narrative report for a record and its scores.
///
/// Implementations may call out to an inference service and fail;
/// the built-in canned provider is fully local and never does.
pub trait AnalysisProvider {
    fn analyze(
        &self,
        record: &ClinicalRecord,
        scores: &[MedicalScore],
    ) -> Result<AnalysisReport, AnalysisError>;
}

/// Canned cardiac-workup narrative. The differential and therapy lists are
/// fixed; the lab interpretation and summary are assembled from the record
/// and scores.
pub struct CannedAnalysisProvider;

impl CannedAnalysisProvider {
    pub fn new() -> Self {
        Self
    }
}

impl AnalysisProvider for CannedAnalysisProvider {
    fn analyze(
        &self,
        record: &ClinicalRecord,
        scores: &[MedicalScore],
    ) -> Result<AnalysisReport, AnalysisError> {
        debug!(
            labs = record.labs.len(),
            scores = scores.len(),
            "composing canned analysis"
        );

        Ok(AnalysisReport {
            differential: vec![
                "Acute Coronary Syndrome (NSTEMI)".to_string(),
                "Congestive Heart Failure".to_string(),
                "Pulmonary Embolism".to_string(),
                "Pneumonia with respiratory distress".to_string(),
            ],
            lab_interpretation: lab_interpretation(record),
            therapy: vec![
                "Antiplatelet therapy: Aspirin 325mg loading dose, then 81mg daily. \
                 Clopidogrel 600mg loading dose, then 75mg daily"
                    .to_string(),
                "Anticoagulation: Enoxaparin 1mg/kg subcutaneous every 12 hours".to_string(),
                "Beta-blocker: Metoprolol 25mg BID if hemodynamically stable".to_string(),
                "ACE inhibitor: Lisinopril 5mg daily (start low dose)".to_string(),
                "Statin therapy: Atorvastatin 80mg daily for plaque stabilization".to_string(),
            ],
            summary: summary(record, scores),
        })
    }
}

fn lab_interpretation(record: &ClinicalRecord) -> String {
    let mut text =
        String::from("Elevated troponin I suggests myocardial injury consistent with NSTEMI. ");

    if record
        .labs
        .iter()
        .any(|lab| lab.name.to_lowercase().contains("bnp"))
    {
        text.push_str("Elevated BNP indicates volume overload or heart failure. ");
    }

    if let Some(o2) = record.vitals.oxygen_saturation {
        if o2 < 95 {
            text.push_str(&format!(
                "Oxygen saturation of {o2}% suggests respiratory compromise. "
            ));
        }
    }

    text.push_str("Clinical correlation recommended.");
    text
}

fn summary(record: &ClinicalRecord, scores: &[MedicalScore]) -> String {
    let age = record
        .demographics
        .age
        .map_or_else(|| "Adult".to_string(), |a| a.to_string());
    let gender = record.demographics.gender.as_deref().unwrap_or("patient");
    let complaint = if record.chief_complaint.is_empty() {
        "acute symptoms"
    } else {
        record.chief_complaint.as_str()
    };
    let findings = if record.labs.iter().any(|lab| lab.abnormal) {
        "abnormal cardiac biomarkers"
    } else {
        "clinical findings"
    };
    let monitoring = if scores.iter().any(|s| s.severity == Severity::High) {
        "High-risk patient requiring close monitoring."
    } else {
        "Monitor closely for complications."
    };

    format!(
        "{age} {gender} presenting with {complaint} with {findings} suggestive of acute \
         coronary syndrome. Recommend urgent cardiology consultation, cardiac catheterization, \
         and guideline-directed medical therapy. {monitoring}"
    )
}
