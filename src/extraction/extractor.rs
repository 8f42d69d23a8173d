use std::str::FromStr;

use tracing::{debug, warn};

use super::patterns;
use super::reference::is_abnormal_lab_value;
use super::types::{ClinicalRecord, LabResult, Vitals};

/// Parse free-text clinical notes into a structured record.
///
/// Total and deterministic: any input yields a record, and the same input
/// always yields the same record. Fields whose pattern finds nothing stay
/// absent; `symptoms`, `medications`, and `allergies` are left for intake
/// collaborators to fill.
pub fn extract_structured_data(text: &str) -> ClinicalRecord {
    let mut record = ClinicalRecord::default();

    if let Some(caps) = patterns::BLOOD_PRESSURE.captures(text) {
        record.vitals.blood_pressure = Some(caps[1].to_string());
    }
    if let Some(caps) = patterns::HEART_RATE.captures(text) {
        record.vitals.heart_rate = parse_or_drop(&caps[1], "heart_rate");
    }
    if let Some(caps) = patterns::TEMPERATURE.captures(text) {
        record.vitals.temperature = parse_or_drop(&caps[1], "temperature");
    }
    if let Some(caps) = patterns::OXYGEN_SATURATION.captures(text) {
        record.vitals.oxygen_saturation = parse_or_drop(&caps[1], "oxygen_saturation");
    }

    extract_labs(text, &mut record);

    if let Some(caps) = patterns::AGE.captures(text) {
        record.demographics.age = parse_or_drop(&caps[1], "age");
    }
    if let Some(caps) = patterns::GENDER.captures(text) {
        record.demographics.gender = Some(caps[1].to_lowercase());
    }
    if let Some(caps) = patterns::CHIEF_COMPLAINT.captures(text) {
        record.chief_complaint = caps[1].trim().to_string();
    }

    let has_vitals = record.vitals != Vitals::default();
    debug!(
        labs = record.labs.len(),
        has_vitals,
        "extraction pass complete"
    );

    record
}

/// Run each lab pattern once, in table order, appending one result per hit.
/// Result order therefore follows the pattern table, not the note.
fn extract_labs(text: &str, record: &mut ClinicalRecord) {
    for pattern in patterns::LAB_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };

        // The stored name is the first whitespace-delimited token of the full
        // match, exactly as written in the note. That token is what the
        // abnormality lookup sees, so "Troponin:" must still resolve.
        let full = &caps[0];
        let name = full
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let value_text = caps[1].to_string();
        let unit = caps.get(2).map_or("", |m| m.as_str()).to_string();

        let Some(value) = parse_or_drop::<f64>(&value_text, "lab_value") else {
            continue;
        };

        let abnormal = is_abnormal_lab_value(&name, value);
        record.labs.push(LabResult {
            name,
            value: value_text,
            unit,
            abnormal,
        });
    }
}

/// Numeric-parse policy: a captured value that does not parse (e.g. digits
/// overflowing the target type) is treated as "not found", never an error.
fn parse_or_drop<T: FromStr>(raw: &str, field: &'static str) -> Option<T> {
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(field, value = raw, "captured value did not parse, dropping");
            None
        }
    }
}
