//! Deterministic bedside risk scores derived from a structured record.
//!
//! Pure integer arithmetic over optional inputs: a vital or demographic that
//! was not extracted simply contributes nothing. Calculation never fails and
//! never re-reads the raw note text.

pub mod calculator;
pub mod chads_vasc;
pub mod heart;
pub mod news2;
pub mod types;

pub use calculator::calculate_medical_scores;
pub use types::{MedicalScore, Severity};
