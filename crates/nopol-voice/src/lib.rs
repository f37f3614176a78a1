//! nopol-voice — speech-recognition intake for the plate normalizer.
//!
//! The recogniser runs elsewhere and reports either a batch of hypotheses or
//! a status code. A [`VoiceWorker`] turns each [`VoiceEvent`] into exactly one
//! [`VoiceOutcome`], either inline ([`VoiceWorker::handle`]) or on a tokio
//! task fed through a channel ([`VoiceWorker::spawn`]).
//!
//! ```text
//! recogniser ──► VoiceEvent ──► VoiceWorker ──► VoiceOutcome ──► UI / SearchKey
//! ```

pub mod search_key;
pub mod worker;

pub use search_key::{SearchKey, SearchKeyError, SearchKind};
pub use worker::{VoiceEvent, VoiceOutcome, VoiceWorker};
