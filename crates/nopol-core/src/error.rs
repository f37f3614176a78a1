//! Error types for nopol-core.
//!
//! Normalization itself never fails; these errors only arise while building a
//! [`PlateNormalizer`](crate::PlateNormalizer) from user-supplied corrections.

#[derive(Debug, thiserror::Error)]
pub enum NopolError {
    #[error("correction {heard:?}: heard phrase must be words of A-Z separated by single spaces")]
    InvalidHeard { heard: String },

    #[error("correction {heard:?} -> {corrected:?}: corrected value must be non-empty A-Z/0-9")]
    InvalidCorrected { heard: String, corrected: String },

    #[error("correction {heard:?}: {source}")]
    Pattern {
        heard: String,
        #[source]
        source: regex::Error,
    },
}
