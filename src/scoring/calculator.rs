use tracing::debug;

use super::chads_vasc::chads_vasc_score;
use super::heart::heart_score;
use super::news2::news2_score;
use super::types::MedicalScore;
use crate::extraction::ClinicalRecord;

/// Compute every applicable risk score for a record.
///
/// Display order is fixed: HEART when the chief complaint mentions the chest,
/// NEWS2 always, CHA₂DS₂-VASc when atrial fibrillation appears among the
/// symptoms. The symptoms gate stays even though the extractor never fills
/// that list: intake collaborators do.
pub fn calculate_medical_scores(record: &ClinicalRecord) -> Vec<MedicalScore> {
    let mut scores = Vec::new();

    if record.chief_complaint.to_lowercase().contains("chest") {
        scores.push(heart_score(record));
    }

    scores.push(news2_score(record));

    if record
        .symptoms
        .iter()
        .any(|s| s.to_lowercase().contains("atrial fibrillation"))
    {
        scores.push(chads_vasc_score(record));
    }

    debug!(count = scores.len(), "risk scores computed");

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{ClinicalRecord, Demographics, Vitals};
    use crate::scoring::Severity;

    #[test]
    fn empty_record_yields_only_news2_at_zero() {
        let scores = calculate_medical_scores(&ClinicalRecord::default());
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "NEWS2 Score");
        assert_eq!(scores[0].value, 0);
        assert_eq!(scores[0].severity, Severity::Low);
    }

    #[test]
    fn chest_complaint_adds_heart_score_first() {
        let record = ClinicalRecord {
            chief_complaint: "Chest pain on exertion".to_string(),
            ..Default::default()
        };

        let scores = calculate_medical_scores(&record);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].name, "HEART Score");
        assert_eq!(scores[1].name, "NEWS2 Score");
    }

    #[test]
    fn chest_gate_is_case_insensitive_substring() {
        let record = ClinicalRecord {
            chief_complaint: "CHEST tightness".to_string(),
            ..Default::default()
        };
        assert_eq!(calculate_medical_scores(&record).len(), 2);
    }

    #[test]
    fn no_chest_means_no_heart_score() {
        let record = ClinicalRecord {
            chief_complaint: "Abdominal pain".to_string(),
            vitals: Vitals {
                respiratory_rate: Some(22),
                oxygen_saturation: Some(94),
                heart_rate: Some(110),
                ..Default::default()
            },
            ..Default::default()
        };

        let scores = calculate_medical_scores(&record);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "NEWS2 Score");
        assert_eq!(scores[0].value, 3);
    }

    #[test]
    fn atrial_fibrillation_symptom_adds_stroke_score_last() {
        let record = ClinicalRecord {
            chief_complaint: "Chest discomfort".to_string(),
            symptoms: vec![
                "palpitations".to_string(),
                "new Atrial Fibrillation on monitor".to_string(),
            ],
            demographics: Demographics {
                age: Some(70),
                gender: Some("female".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let scores = calculate_medical_scores(&record);
        let names: Vec<&str> = scores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["HEART Score", "NEWS2 Score", "CHA₂DS₂-VASc"]);
        assert_eq!(scores[2].value, 2);
    }

    #[test]
    fn woman_gender_never_reaches_stroke_sex_point() {
        let record = ClinicalRecord {
            symptoms: vec!["atrial fibrillation".to_string()],
            demographics: Demographics {
                gender: Some("woman".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let scores = calculate_medical_scores(&record);
        assert_eq!(scores[1].name, "CHA₂DS₂-VASc");
        assert_eq!(scores[1].value, 0);
    }

    #[test]
    fn scores_are_pure_function_of_record() {
        let record = ClinicalRecord {
            chief_complaint: "chest pressure".to_string(),
            demographics: Demographics {
                age: Some(58),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            calculate_medical_scores(&record),
            calculate_medical_scores(&record)
        );
    }
}
