use super::types::{MedicalScore, Severity};
use crate::extraction::ClinicalRecord;

/// CHA₂DS₂-VASc, reduced to the inputs the record carries: age brackets and
/// the documented sex literal.
///
/// Only the literal "female" earns the sex category point. "woman" is a
/// distinct matched literal and does not count; the gender field is stored
/// uncanonicalized, and this rule follows it as-is.
pub fn chads_vasc_score(record: &ClinicalRecord) -> MedicalScore {
    let mut score = 0;

    match record.demographics.age {
        Some(age) if age >= 75 => score += 2,
        Some(age) if age >= 65 => score += 1,
        _ => {}
    }

    if record.demographics.gender.as_deref() == Some("female") {
        score += 1;
    }

    let interpretation = match score {
        0 => "Low stroke risk",
        1 => "Low-moderate stroke risk",
        2 | 3 => "Moderate stroke risk",
        _ => "High stroke risk",
    };
    let severity = if score <= 1 {
        Severity::Low
    } else if score <= 3 {
        Severity::Moderate
    } else {
        Severity::High
    };

    MedicalScore {
        name: "CHA₂DS₂-VASc".to_string(),
        value: score,
        interpretation: interpretation.to_string(),
        severity,
    }
}
