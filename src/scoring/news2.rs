use super::types::{MedicalScore, Severity};
use crate::extraction::ClinicalRecord;

/// NEWS2 aggregate over the vitals the record carries.
///
/// Branch order within each vital is part of the scoring contract: later
/// brackets are reached only after the stricter ones fail. Keep it as
/// written rather than collapsing the comparisons.
pub fn news2_score(record: &ClinicalRecord) -> MedicalScore {
    let mut score = 0;

    if let Some(rr) = record.vitals.respiratory_rate {
        if rr <= 8 || rr >= 25 {
            score += 3;
        } else if rr >= 21 {
            score += 2;
        } else if rr >= 18 {
            score += 1;
        }
    }

    if let Some(o2) = record.vitals.oxygen_saturation {
        if o2 <= 91 {
            score += 3;
        } else if o2 <= 93 {
            score += 2;
        } else if o2 <= 95 {
            score += 1;
        }
    }

    if let Some(hr) = record.vitals.heart_rate {
        if hr <= 40 || hr >= 131 {
            score += 3;
        } else if hr >= 111 {
            score += 2;
        } else if hr >= 91 || hr <= 50 {
            // reached only after the stricter brackets fail, so this covers
            // 91-110 and 41-50
            score += 1;
        }
    }

    let (severity, interpretation) = if score <= 4 {
        (Severity::Low, "Low clinical risk")
    } else if score <= 6 {
        (Severity::Moderate, "Medium clinical risk")
    } else {
        (Severity::High, "High clinical risk")
    };

    MedicalScore {
        name: "NEWS2 Score".to_string(),
        value: score,
        interpretation: interpretation.to_string(),
        severity,
    }
}
