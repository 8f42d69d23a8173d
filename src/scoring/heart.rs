use super::types::{MedicalScore, Severity};
use crate::extraction::ClinicalRecord;

/// HEART score, reduced to the factors the record can carry: age bracket and
/// hypertension (systolic above 140).
pub fn heart_score(record: &ClinicalRecord) -> MedicalScore {
    let mut score = 0;

    match record.demographics.age {
        Some(age) if age >= 65 => score += 2,
        Some(age) if age >= 45 => score += 1,
        _ => {}
    }

    if systolic(record) > 140 {
        score += 1;
    }

    let (severity, band) = if score <= 3 {
        (Severity::Low, "Low")
    } else if score <= 6 {
        (Severity::Moderate, "Moderate")
    } else {
        (Severity::High, "High")
    };

    MedicalScore {
        name: "HEART Score".to_string(),
        value: score,
        interpretation: format!("{band} risk for major adverse cardiac events"),
        severity,
    }
}

/// Systolic pressure from the raw "sys/dia" string; 0 when absent or
/// malformed, so a missing reading never adds the hypertension point.
fn systolic(record: &ClinicalRecord) -> u32 {
    record
        .vitals
        .blood_pressure
        .as_deref()
        .and_then(|bp| bp.split('/').next())
        .and_then(|sys| sys.trim().parse().ok())
        .unwrap_or(0)
}
