//! Voice worker — one outcome per recognition event.

use std::sync::Arc;

use nopol_core::config::VoiceConfig;
use nopol_core::{Locale, PlateNormalizer, RecognitionError, RecognitionResult};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::search_key::SearchKey;

/// Capacity of the outcome channel returned by [`VoiceWorker::spawn`].
const OUTCOME_BUFFER: usize = 16;

/// What the recogniser reported for one utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceEvent {
    /// Alternative transcriptions, in recogniser order.
    Hypotheses(Vec<RecognitionResult>),
    /// Recogniser status code; see [`RecognitionError::from_code`].
    Failed(i32),
}

/// Result handed back to the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceOutcome {
    /// A plate was read. `heard` is the raw text it came from.
    Recognized { heard: String, plate: String },
    /// Speech arrived but no hypothesis yielded a plate. `heard` is the most
    /// confident transcription, if there was one, so the user can see it.
    NotFound { heard: Option<String> },
    /// The recogniser itself failed.
    Failed {
        error: RecognitionError,
        message: &'static str,
    },
}

impl VoiceOutcome {
    /// Search key for a recognised plate; `None` for every other outcome.
    pub fn search_key(&self) -> Option<SearchKey> {
        match self {
            VoiceOutcome::Recognized { plate, .. } => Some(SearchKey::Plate(plate.clone())),
            _ => None,
        }
    }
}

/// Runs candidate selection for recognition events.
#[derive(Debug, Clone)]
pub struct VoiceWorker {
    normalizer: Arc<PlateNormalizer>,
    locale: Locale,
    min_confidence: f32,
}

impl VoiceWorker {
    pub fn new(normalizer: Arc<PlateNormalizer>) -> Self {
        Self {
            normalizer,
            locale: Locale::default(),
            min_confidence: 0.0,
        }
    }

    pub fn from_config(normalizer: Arc<PlateNormalizer>, config: &VoiceConfig) -> Self {
        Self::new(normalizer)
            .with_locale(config.locale)
            .with_min_confidence(config.min_confidence)
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn handle(&self, event: VoiceEvent) -> VoiceOutcome {
        match event {
            VoiceEvent::Failed(code) => {
                let error = RecognitionError::from_code(code);
                warn!(code, %error, "speech recognition failed");
                VoiceOutcome::Failed {
                    error,
                    message: error.message(self.locale),
                }
            }
            VoiceEvent::Hypotheses(hypotheses) => {
                let kept: Vec<RecognitionResult> = hypotheses
                    .iter()
                    .filter(|h| h.confidence() >= self.min_confidence)
                    .cloned()
                    .collect();
                debug!(
                    received = hypotheses.len(),
                    kept = kept.len(),
                    "hypotheses above confidence floor"
                );

                match self.normalizer.select_best_candidate(&kept) {
                    Some(best) => {
                        info!(heard = %best.raw_text, plate = %best.cleaned_plate, "plate recognised");
                        VoiceOutcome::Recognized {
                            heard: best.raw_text,
                            plate: best.cleaned_plate,
                        }
                    }
                    None => VoiceOutcome::NotFound {
                        heard: most_confident(&hypotheses).map(|h| h.text.clone()),
                    },
                }
            }
        }
    }

    /// Process events on a background task until the sender side closes or
    /// the outcome receiver is dropped.
    pub fn spawn(
        self,
        mut events: mpsc::Receiver<VoiceEvent>,
    ) -> (mpsc::Receiver<VoiceOutcome>, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(OUTCOME_BUFFER);
        let handle = tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                let outcome = self.handle(event);
                if tx.send(outcome).await.is_err() {
                    debug!("outcome receiver dropped; stopping voice worker");
                    break;
                }
            }
            debug!("voice worker finished");
        });
        (rx, handle)
    }
}

/// First hypothesis with the highest confidence.
fn most_confident(hypotheses: &[RecognitionResult]) -> Option<&RecognitionResult> {
    hypotheses.iter().fold(None, |best, h| match best {
        Some(b) if h.confidence() <= b.confidence() => Some(b),
        _ => Some(h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn worker() -> VoiceWorker {
        VoiceWorker::new(Arc::new(PlateNormalizer::new()))
    }

    #[test]
    fn failure_codes_map_to_localized_messages() {
        assert_eq!(
            worker().handle(VoiceEvent::Failed(7)),
            VoiceOutcome::Failed {
                error: RecognitionError::NoMatch,
                message: "Suara tidak dikenali, silakan coba lagi",
            }
        );
        assert_eq!(
            worker()
                .with_locale(Locale::English)
                .handle(VoiceEvent::Failed(1234)),
            VoiceOutcome::Failed {
                error: RecognitionError::Unknown(1234),
                message: "Unrecognized error",
            }
        );
    }

    #[test]
    fn not_found_reports_most_confident_text() {
        let outcome = worker().handle(VoiceEvent::Hypotheses(vec![
            RecognitionResult::new("halo", 0.3),
            RecognitionResult::new("apa kabar", 0.8),
            RecognitionResult::new("selamat", 0.8),
        ]));
        assert_eq!(
            outcome,
            VoiceOutcome::NotFound {
                heard: Some("apa kabar".to_string())
            }
        );
        assert_eq!(outcome.search_key(), None);
    }

    #[test]
    fn confidence_floor_drops_weak_hypotheses() {
        let hypotheses = vec![RecognitionResult::new("B 1234 ABC", 0.2)];
        let strict = worker().with_min_confidence(0.5);
        assert_eq!(
            strict.handle(VoiceEvent::Hypotheses(hypotheses.clone())),
            VoiceOutcome::NotFound {
                heard: Some("B 1234 ABC".to_string())
            }
        );
        assert_eq!(
            worker().handle(VoiceEvent::Hypotheses(hypotheses)),
            VoiceOutcome::Recognized {
                heard: "B 1234 ABC".to_string(),
                plate: "B1234ABC".to_string(),
            }
        );
    }

    #[test]
    fn empty_batch_is_not_found_without_text() {
        assert_eq!(
            worker().handle(VoiceEvent::Hypotheses(Vec::new())),
            VoiceOutcome::NotFound { heard: None }
        );
    }
}
