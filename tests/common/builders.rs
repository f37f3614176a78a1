//! Test builders — ergonomic constructors for hypothesis batches.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use nopol_core::RecognitionResult;
use nopol_voice::VoiceEvent;

/// Fluent builder for a batch of [`RecognitionResult`] values.
///
/// # Example
///
/// ```rust
/// let batch = Hypotheses::new()
///     .scored("X999ZZ", 0.9)
///     .scored("B999CC", 0.4)
///     .build();
/// ```
#[derive(Default)]
pub struct Hypotheses {
    results: Vec<RecognitionResult>,
}

impl Hypotheses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scored(mut self, text: impl Into<String>, confidence: f32) -> Self {
        self.results.push(RecognitionResult::new(text, confidence));
        self
    }

    pub fn unscored(mut self, text: impl Into<String>) -> Self {
        self.results.push(RecognitionResult::unscored(text));
        self
    }

    pub fn build(self) -> Vec<RecognitionResult> {
        self.results
    }

    pub fn event(self) -> VoiceEvent {
        VoiceEvent::Hypotheses(self.results)
    }
}

/// A batch with identical confidence for every text.
pub fn tied(texts: &[&str], confidence: f32) -> Vec<RecognitionResult> {
    texts
        .iter()
        .map(|t| RecognitionResult::new(*t, confidence))
        .collect()
}
