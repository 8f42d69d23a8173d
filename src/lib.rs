//! Clinote core: structured-data extraction and bedside risk scoring for
//! free-text clinical notes.
//!
//! The embedding UI pastes raw note text in and renders three things back:
//! the structured record ([`extraction`]), the applicable risk scores
//! ([`scoring`]), and a narrative report ([`analysis`]). Extraction and
//! scoring are pure functions of their input: no I/O, no shared state, safe
//! to call from any thread.

pub mod analysis;
pub mod config;
pub mod extraction;
pub mod processor;
pub mod scoring;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate default.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
