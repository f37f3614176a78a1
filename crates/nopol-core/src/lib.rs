//! nopol-core — voice-input normalizer for Indonesian registration plates.
//!
//! Speech recognisers hear "Abi 1234 Abc" where the user said *AB 1234 ABC*.
//! This crate turns such text into a canonical plate (`AB1234ABC`) or reports
//! that nothing plausible was heard.
//!
//! # Pipeline
//!
//! ```text
//! raw text ──► phrase corrections ──► [A-Z0-9 ] ──► strategies ──► grammar + prefix check
//! ```
//!
//! Everything here is pure and synchronous. The free functions use a shared
//! [`PlateNormalizer`] over the built-in tables; build your own with
//! [`PlateNormalizer::with_corrections`] to add site-specific corrections.

pub mod config;
pub mod error;
pub mod grammar;
pub mod normalizer;
pub mod recognition;
pub mod select;
pub mod tables;
pub mod types;

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

pub use error::NopolError;
pub use grammar::PlateCandidate;
pub use normalizer::{Attempt, PlateNormalizer, Strategy, Trace, Verdict};
pub use recognition::{error_message, Locale, RecognitionError};
pub use tables::is_valid_prefix;
pub use types::{BestCandidate, RecognitionResult};

static DEFAULT_NORMALIZER: Lazy<PlateNormalizer> = Lazy::new(PlateNormalizer::new);

/// Shared normalizer over the built-in tables.
pub fn default_normalizer() -> &'static PlateNormalizer {
    &DEFAULT_NORMALIZER
}

/// Canonical plate for `raw`, or `""` when no valid plate was found.
pub fn clean_plate(raw: &str) -> String {
    DEFAULT_NORMALIZER.clean_plate(raw)
}

/// See [`PlateNormalizer::select_best_candidate`].
pub fn select_best_candidate(hypotheses: &[RecognitionResult]) -> Option<BestCandidate> {
    DEFAULT_NORMALIZER.select_best_candidate(hypotheses)
}

/// Sorted snapshot of the regional prefix set.
pub fn list_valid_prefixes() -> BTreeSet<&'static str> {
    tables::list_valid_prefixes()
}
