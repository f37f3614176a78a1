//! Normalizer — turns recognised speech text into a canonical plate.
//!
//! Input is uppercased, multi-word phonetic phrases are collapsed, and the
//! text is reduced to `[A-Z0-9 ]` with single spaces. Reconstruction is then
//! attempted with each [`Strategy`] in order; the first candidate that matches
//! the plate grammar *and* carries a known regional prefix wins.
//!
//! | Strategy      | Candidate                                                |
//! |---------------|----------------------------------------------------------|
//! | `PerWord`     | each whole word looked up in the correction table        |
//! | `WholeString` | table applied as word-boundary substitutions, in order   |
//! | `Direct`      | whitespace removed, no correction                        |
//! | `Buckets`     | leading letters + all digits + trailing letters          |

use std::cmp::Reverse;
use std::fmt;

use regex::{NoExpand, Regex};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::NopolError;
use crate::grammar::PlateCandidate;
use crate::tables::PHONETIC_CORRECTIONS;

// ---------------------------------------------------------------------------
// Corrections
// ---------------------------------------------------------------------------

/// One compiled `(heard, corrected)` pair.
#[derive(Debug, Clone)]
struct Correction {
    heard: String,
    corrected: String,
    /// `heard` anchored on word boundaries, inner spaces relaxed to `\s+`.
    pattern: Regex,
}

impl Correction {
    fn new(heard: &str, corrected: &str) -> Result<Self, NopolError> {
        let heard = heard
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();
        let corrected = corrected.trim().to_uppercase();

        if heard.is_empty() || !heard.chars().all(|c| c.is_ascii_uppercase() || c == ' ') {
            return Err(NopolError::InvalidHeard { heard });
        }
        if corrected.is_empty()
            || !corrected
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(NopolError::InvalidCorrected { heard, corrected });
        }

        let words: Vec<String> = heard.split(' ').map(regex::escape).collect();
        let pattern = Regex::new(&format!(r"\b{}\b", words.join(r"\s+"))).map_err(|source| {
            NopolError::Pattern {
                heard: heard.clone(),
                source,
            }
        })?;

        Ok(Self {
            heard,
            corrected,
            pattern,
        })
    }

    fn is_phrase(&self) -> bool {
        self.heard.contains(' ')
    }

    /// Safe to replace inside a run-together token: canonical plates never
    /// hold more than three letters in a row.
    fn is_glued(&self) -> bool {
        !self.is_phrase() && self.heard.len() >= GLUED_KEY_MIN_LEN
    }
}

const GLUED_KEY_MIN_LEN: usize = 4;

fn builtin_corrections() -> Result<Vec<Correction>, NopolError> {
    PHONETIC_CORRECTIONS
        .iter()
        .map(|(heard, corrected)| Correction::new(heard, corrected))
        .collect()
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A way of rebuilding a plate from the normalised text, in priority order.
///
/// Earlier strategies assume less reconstruction and are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    PerWord,
    WholeString,
    Direct,
    Buckets,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::PerWord,
        Strategy::WholeString,
        Strategy::Direct,
        Strategy::Buckets,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::PerWord => "per_word",
            Strategy::WholeString => "whole_string",
            Strategy::Direct => "direct",
            Strategy::Buckets => "buckets",
        }
    }

    fn reconstruct(self, normalizer: &PlateNormalizer, text: &str) -> String {
        match self {
            Strategy::PerWord => normalizer.remap_words(text),
            Strategy::WholeString => strip_spaces(&normalizer.remap_string(text)),
            Strategy::Direct => strip_spaces(text),
            Strategy::Buckets => regroup_buckets(&strip_spaces(text)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a reconstructed candidate was or was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    InvalidPrefix,
    NoMatch,
}

/// One strategy attempt recorded by [`PlateNormalizer::explain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub strategy: Strategy,
    pub candidate: String,
    pub verdict: Verdict,
}

/// Every intermediate value of a single normalisation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub raw: String,
    /// Uppercased input after phrase and run-together key substitution.
    pub corrected: String,
    /// `corrected` reduced to `[A-Z0-9 ]` with single spaces.
    pub normalized: String,
    /// Attempts in order; stops at the first accepted one.
    pub attempts: Vec<Attempt>,
    pub plate: Option<PlateCandidate>,
}

impl Trace {
    /// The strategy that produced [`Trace::plate`], if any.
    pub fn strategy(&self) -> Option<Strategy> {
        self.attempts
            .iter()
            .find(|a| a.verdict == Verdict::Accepted)
            .map(|a| a.strategy)
    }
}

// ---------------------------------------------------------------------------
// PlateNormalizer
// ---------------------------------------------------------------------------

/// Stateless plate normalizer over an ordered phonetic correction table.
///
/// [`PlateNormalizer::new`] uses the built-in table only. Extra corrections
/// from configuration are tried before the built-in ones.
#[derive(Debug, Clone)]
pub struct PlateNormalizer {
    corrections: Vec<Correction>,
    /// Indices into `corrections` of run-together-safe keys, longest first.
    glued: Vec<usize>,
}

impl Default for PlateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlateNormalizer {
    pub fn new() -> Self {
        Self::from_table(builtin_corrections().expect("built-in phonetic table must be valid"))
    }

    /// Build a normalizer whose table is `extra` followed by the built-in
    /// corrections. Entries are uppercased and their whitespace collapsed
    /// before validation.
    ///
    /// Custom entries may chain: a `corrected` value that is itself a key is
    /// replaced again by [`Strategy::WholeString`], never by
    /// [`Strategy::PerWord`]. The built-in table has no such pairs.
    pub fn with_corrections<I, H, C>(extra: I) -> Result<Self, NopolError>
    where
        I: IntoIterator<Item = (H, C)>,
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let mut corrections = extra
            .into_iter()
            .map(|(heard, corrected)| Correction::new(heard.as_ref(), corrected.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        corrections.extend(builtin_corrections()?);
        Ok(Self::from_table(corrections))
    }

    fn from_table(corrections: Vec<Correction>) -> Self {
        let mut glued: Vec<usize> = (0..corrections.len())
            .filter(|&i| corrections[i].is_glued())
            .collect();
        glued.sort_by_key(|&i| Reverse(corrections[i].heard.len()));
        Self { corrections, glued }
    }

    /// The effective table, in application order.
    pub fn corrections(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.corrections
            .iter()
            .map(|c| (c.heard.as_str(), c.corrected.as_str()))
    }

    /// Canonical plate for `raw`, or an empty string when none was found.
    pub fn clean_plate(&self, raw: &str) -> String {
        self.normalize(raw)
            .map(|plate| plate.to_string())
            .unwrap_or_default()
    }

    /// Typed form of [`clean_plate`](Self::clean_plate).
    pub fn normalize(&self, raw: &str) -> Option<PlateCandidate> {
        let (_, normalized) = self.prepare(raw);
        let plate = self.run_strategies(&normalized, |_| {});
        if plate.is_none() {
            debug!(input = raw, "no strategy produced a valid plate");
        }
        plate
    }

    /// Run the pipeline and keep every intermediate value.
    pub fn explain(&self, raw: &str) -> Trace {
        let (corrected, normalized) = self.prepare(raw);
        let mut attempts = Vec::new();
        let plate = self.run_strategies(&normalized, |attempt| attempts.push(attempt));
        Trace {
            raw: raw.to_string(),
            corrected,
            normalized,
            attempts,
            plate,
        }
    }

    /// `(corrected, normalized)` for `raw`.
    fn prepare(&self, raw: &str) -> (String, String) {
        let corrected = self.pre_correct(&raw.to_uppercase());
        let normalized = normalize_text(&corrected);
        (corrected, normalized)
    }

    /// Try each strategy in order, handing every attempt to `record`, until
    /// one is accepted.
    fn run_strategies(
        &self,
        normalized: &str,
        mut record: impl FnMut(Attempt),
    ) -> Option<PlateCandidate> {
        if normalized.is_empty() {
            return None;
        }

        for strategy in Strategy::ALL {
            let candidate = strategy.reconstruct(self, normalized);
            let result = accept(&candidate);
            let verdict = match &result {
                Ok(_) => Verdict::Accepted,
                Err(verdict) => *verdict,
            };
            trace!(%strategy, %candidate, ?verdict, "strategy attempted");
            record(Attempt {
                strategy,
                candidate,
                verdict,
            });
            if let Ok(plate) = result {
                debug!(%strategy, %plate, "plate reconstructed");
                return Some(plate);
            }
        }
        None
    }

    /// Step one on the uppercased raw text: multi-word phrases on word
    /// boundaries, then long single-word keys as literal substrings so
    /// run-together tokens like `DEKA88` are split up.
    fn pre_correct(&self, upper: &str) -> String {
        let mut text = upper.to_string();
        for c in self.corrections.iter().filter(|c| c.is_phrase()) {
            text = c
                .pattern
                .replace_all(&text, NoExpand(&c.corrected))
                .into_owned();
        }
        for c in self.glued.iter().map(|&i| &self.corrections[i]) {
            if text.contains(c.heard.as_str()) {
                text = text.replace(c.heard.as_str(), &c.corrected);
            }
        }
        text
    }

    fn lookup(&self, word: &str) -> Option<&str> {
        self.corrections
            .iter()
            .find(|c| c.heard == word)
            .map(|c| c.corrected.as_str())
    }

    /// Strategy A: replace whole words, then concatenate.
    fn remap_words(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.lookup(word).unwrap_or(word))
            .collect()
    }

    /// Strategy B: every correction as a word-boundary substitution over the
    /// whole string, sequentially.
    fn remap_string(&self, text: &str) -> String {
        let mut text = text.to_string();
        for c in &self.corrections {
            text = c
                .pattern
                .replace_all(&text, NoExpand(&c.corrected))
                .into_owned();
        }
        text
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn accept(candidate: &str) -> Result<PlateCandidate, Verdict> {
    let plate = PlateCandidate::parse(candidate).ok_or(Verdict::NoMatch)?;
    if plate.has_valid_prefix() {
        Ok(plate)
    } else {
        Err(Verdict::InvalidPrefix)
    }
}

/// Whitespace becomes a single space; anything outside `[A-Z0-9 ]` is dropped.
fn normalize_text(upper: &str) -> String {
    let kept: String = upper
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strategy E: letters before the first digit, then every digit, then the
/// remaining letters, each run keeping its original order.
fn regroup_buckets(compact: &str) -> String {
    let mut leading = String::new();
    let mut digits = String::new();
    let mut trailing = String::new();
    for c in compact.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if digits.is_empty() {
            leading.push(c);
        } else {
            trailing.push(c);
        }
    }
    leading + &digits + &trailing
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
