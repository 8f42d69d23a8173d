//! Compiled note patterns, built once on first use.
//!
//! The vitals patterns match anywhere in the note, not just at word
//! boundaries. Gender is the one whole-word scan, and chief complaint the
//! one line-anchored scan.

use std::sync::LazyLock;

use regex::Regex;

fn compiled(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid extraction pattern")
}

/// "BP: 140/90", captured as the raw sys/dia string.
pub static BLOOD_PRESSURE: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?i)BP:?\s*(\d+/\d+)"));

/// "HR: 110" or "HR 110".
pub static HEART_RATE: LazyLock<Regex> = LazyLock::new(|| compiled(r"(?i)HR:?\s*(\d+)"));

/// "Temp: 98.6", integer or decimal, Fahrenheit assumed.
pub static TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?i)temp:?\s*(\d+\.?\d*)"));

/// "O2 Sat 94%". The gap between "O2" and the percentage must stay on one
/// line.
pub static OXYGEN_SATURATION: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?i)O2.*?(\d+)%"));

/// "65-year-old", "65 year old", "65 years old".
pub static AGE: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?i)(\d+)[-\s]?years?[-\s]?old"));

/// First whole-word occurrence of a documented sex/gender literal. The match
/// is stored as written (lowercased), not mapped onto a canonical pair.
pub static GENDER: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?i)\b(male|female|man|woman)\b"));

/// Line starting with "chief complaint", colon optional; captures the rest of
/// that line.
pub static CHIEF_COMPLAINT: LazyLock<Regex> =
    LazyLock::new(|| compiled(r"(?im)^[ \t]*chief complaint:?[ \t]*(.+)"));

/// Single-analyte lab patterns, scanned in this fixed order. Each captures the
/// numeric value and the following word token as the unit; the gap after the
/// analyte name may cross lines. BNP and glucose take integer values only.
pub static LAB_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compiled(r"(?is)troponin.*?(\d+\.?\d*)\s*(\w+)"),
        compiled(r"(?is)BNP.*?(\d+)\s*(\w+)"),
        compiled(r"(?is)hemoglobin.*?(\d+\.?\d*)\s*(\w+)"),
        compiled(r"(?is)glucose.*?(\d+)\s*(\w+)"),
        compiled(r"(?is)creatinine.*?(\d+\.?\d*)\s*(\w+)"),
    ]
});
