//! nopol — voice-input normalizer for Indonesian vehicle registration plates.
//!
//! This crate re-exports the workspace layers so that integration tests and
//! the `nopol` binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! recogniser ──► nopol-voice ──► nopol-core ──► plate / SearchKey
//!                  (worker)       (normalizer)
//! ```
//!
//! `nopol-core` is pure and synchronous. `nopol-voice` owns the only
//! background task and talks to callers through `tokio` channels.

pub mod cli;

pub use nopol_core as core;
pub use nopol_voice as voice;

pub use nopol_core::{
    clean_plate, is_valid_prefix, list_valid_prefixes, select_best_candidate, BestCandidate,
    PlateCandidate, PlateNormalizer, RecognitionError, RecognitionResult,
};
