//! Best-candidate selection across alternative speech hypotheses.

use tracing::debug;

use crate::normalizer::PlateNormalizer;
use crate::types::{BestCandidate, RecognitionResult};

impl PlateNormalizer {
    /// Clean every hypothesis and keep the most confident one that produced a
    /// plate. Equal confidence keeps the earliest; `None` when nothing cleans.
    pub fn select_best_candidate(&self, hypotheses: &[RecognitionResult]) -> Option<BestCandidate> {
        let mut best: Option<(f32, BestCandidate)> = None;

        for hypothesis in hypotheses {
            let cleaned = self.clean_plate(&hypothesis.text);
            if cleaned.is_empty() {
                continue;
            }
            let confidence = hypothesis.confidence();
            if best.as_ref().map_or(true, |(top, _)| confidence > *top) {
                best = Some((
                    confidence,
                    BestCandidate {
                        raw_text: hypothesis.text.clone(),
                        cleaned_plate: cleaned,
                    },
                ));
            }
        }

        match &best {
            Some((confidence, chosen)) => debug!(
                plate = %chosen.cleaned_plate,
                confidence,
                considered = hypotheses.len(),
                "selected hypothesis"
            ),
            None => debug!(considered = hypotheses.len(), "no hypothesis yielded a plate"),
        }
        best.map(|(_, chosen)| chosen)
    }
}
