//! Values exchanged with the speech-recognition layer.

use serde::{Deserialize, Serialize};

/// One speech hypothesis for an utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub text: String,
    /// Recogniser score in `[0, 1]`; absent when the engine gives none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl RecognitionResult {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence: Some(confidence),
        }
    }

    pub fn unscored(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }

    /// Score used for ranking. Missing or non-finite scores count as 0.
    pub fn confidence(&self) -> f32 {
        match self.confidence {
            Some(c) if c.is_finite() => c,
            _ => 0.0,
        }
    }
}

/// The winning hypothesis: what was heard next to what it was read as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestCandidate {
    pub raw_text: String,
    pub cleaned_plate: String,
}
