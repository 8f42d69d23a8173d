//! Textbook normal ranges for the analytes the note patterns recognize.

/// An analyte with its normal range (both bounds inclusive).
struct NormalRange {
    analyte: &'static str,
    low: f64,
    high: f64,
}

/// Lookup order matters: the first substring hit wins.
static NORMAL_RANGES: &[NormalRange] = &[
    NormalRange { analyte: "troponin", low: 0.0, high: 0.04 },
    NormalRange { analyte: "bnp", low: 0.0, high: 100.0 },
    NormalRange { analyte: "hemoglobin", low: 12.0, high: 16.0 },
    NormalRange { analyte: "glucose", low: 70.0, high: 100.0 },
    NormalRange { analyte: "creatinine", low: 0.6, high: 1.3 },
];

/// Whether a lab value falls outside the normal range for its analyte.
///
/// The name is matched by case-insensitive substring, so "Troponin:" or
/// "troponin-I" still resolve to the troponin range. An analyte with no
/// table entry cannot be assessed and is never flagged.
pub fn is_abnormal_lab_value(lab_name: &str, value: f64) -> bool {
    let name = lab_name.to_lowercase();
    for range in NORMAL_RANGES {
        if name.contains(range.analyte) {
            return value < range.low || value > range.high;
        }
    }
    false
}
