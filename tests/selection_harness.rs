//! Hypothesis selection integration harness.
//!
//! # What this covers
//!
//! - **Validity before confidence**: a more confident hypothesis that cleans
//!   to nothing never beats a less confident valid one.
//! - **Tie-break**: equal confidence keeps the first valid hypothesis.
//! - **Missing scores**: unscored hypotheses rank as confidence 0.
//! - **Raw text preserved**: the winner carries the uncleaned text.
//! - **Property: winner is valid and maximal** (proptest): for random batches
//!   the winner's plate is non-empty and no other valid hypothesis scores
//!   strictly higher.
//!
//! # Running
//!
//! ```sh
//! cargo test --test selection_harness
//! ```

mod common;
use common::*;

use nopol_core::{clean_plate, select_best_candidate, BestCandidate, RecognitionResult};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn valid_hypothesis_beats_more_confident_invalid_one() {
    let batch = Hypotheses::new()
        .scored("X999ZZ", 0.9)
        .scored("B999CC", 0.4)
        .build();
    assert_eq!(
        select_best_candidate(&batch),
        Some(BestCandidate {
            raw_text: "B999CC".to_string(),
            cleaned_plate: "B999CC".to_string(),
        })
    );
}

#[test]
fn equal_confidence_keeps_first_in_order() {
    let batch = tied(&["D 1234 AB", "B 1234 AB"], 0.6);
    let best = select_best_candidate(&batch).unwrap();
    assert_eq!(best.cleaned_plate, "D1234AB");
}

#[test]
fn higher_confidence_replaces_earlier_valid() {
    let batch = Hypotheses::new()
        .scored("D 1234 AB", 0.6)
        .scored("B 1234 AB", 0.61)
        .build();
    assert_eq!(select_best_candidate(&batch).unwrap().cleaned_plate, "B1234AB");
}

#[test]
fn unscored_hypotheses_rank_lowest() {
    let batch = Hypotheses::new()
        .unscored("AB 1")
        .scored("AD 2", 0.05)
        .unscored("AG 3")
        .build();
    assert_eq!(select_best_candidate(&batch).unwrap().cleaned_plate, "AD2");
}

#[test]
fn all_unscored_keeps_first_valid() {
    let batch = Hypotheses::new()
        .unscored("halo")
        .unscored("AB 1")
        .unscored("AG 3")
        .build();
    assert_eq!(select_best_candidate(&batch).unwrap().cleaned_plate, "AB1");
}

#[test]
fn winner_keeps_raw_text() {
    let batch = Hypotheses::new().scored("Abi 1234 Abc", 0.8).build();
    insta::assert_json_snapshot!(select_best_candidate(&batch), @r###"
    {
      "raw_text": "Abi 1234 Abc",
      "cleaned_plate": "AB1234ABC"
    }
    "###);
}

#[test]
fn no_valid_hypothesis_is_none() {
    let batch = Hypotheses::new()
        .scored("halo", 0.99)
        .scored("Q 1234 XYZ", 0.5)
        .unscored("")
        .build();
    assert_eq!(select_best_candidate(&batch), None);
    assert_eq!(select_best_candidate(&[]), None);
}

#[test]
fn hypotheses_deserialize_with_optional_confidence() {
    let batch: Vec<RecognitionResult> = serde_json::from_str(
        r#"[{"text": "B 1 A"}, {"text": "D 2 B", "confidence": 0.3}]"#,
    )
    .unwrap();
    assert_eq!(batch[0].confidence, None);
    assert_eq!(select_best_candidate(&batch).unwrap().cleaned_plate, "D2B");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn hypothesis() -> impl Strategy<Value = RecognitionResult> {
    let texts = prop::sample::select(vec![
        "B 1234 ABC",
        "Abi 1234 Abc",
        "Q 1234 XYZ",
        "halo",
        "D 9",
        "X999ZZ",
        "",
    ]);
    (texts, prop::option::of(0.0f32..=1.0)).prop_map(|(text, confidence)| RecognitionResult {
        text: text.to_string(),
        confidence,
    })
}

proptest! {
    #[test]
    fn winner_is_valid_and_maximal(batch in prop::collection::vec(hypothesis(), 0..8)) {
        let valid: Vec<&RecognitionResult> = batch
            .iter()
            .filter(|h| !clean_plate(&h.text).is_empty())
            .collect();

        match select_best_candidate(&batch) {
            None => prop_assert!(valid.is_empty()),
            Some(best) => {
                prop_assert!(!best.cleaned_plate.is_empty());
                let top = valid
                    .iter()
                    .map(|h| h.confidence())
                    .fold(f32::MIN, f32::max);
                let first_top = valid
                    .iter()
                    .find(|h| h.confidence() == top)
                    .expect("a valid hypothesis holds the top score");
                prop_assert_eq!(&best.raw_text, &first_top.text);
                prop_assert_eq!(best.cleaned_plate, clean_plate(&first_top.text));
            }
        }
    }
}
