//! Plate grammar — the canonical shapes a cleaned string must take.
//!
//! ```text
//! full_plate    = prefix(1-2 letters) digits(1-4) suffix(1-3 letters)
//! partial_plate = prefix(1-2 letters) digits(1-4)
//! ```
//!
//! Matching is anchored: the whole string must be a plate, separators are not
//! allowed. Prefix membership is checked separately by
//! [`PlateCandidate::has_valid_prefix`].

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::tables;

static FULL_PLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z]{1,2})([0-9]{1,4})([A-Z]{1,3})$").expect("full plate pattern is valid")
});

static PARTIAL_PLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{1,2})([0-9]{1,4})$").expect("partial plate pattern is valid"));

/// A string split into plate components by the grammar.
///
/// Candidates returned by the normalizer always carry a valid prefix; ones
/// produced by [`PlateCandidate::parse`] may not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlateCandidate {
    prefix: String,
    digits: String,
    suffix: Option<String>,
}

impl PlateCandidate {
    /// Match `s` against the full grammar, then the partial one.
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(caps) = FULL_PLATE.captures(s) {
            return Some(Self {
                prefix: caps[1].to_string(),
                digits: caps[2].to_string(),
                suffix: Some(caps[3].to_string()),
            });
        }
        PARTIAL_PLATE.captures(s).map(|caps| Self {
            prefix: caps[1].to_string(),
            digits: caps[2].to_string(),
            suffix: None,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// `true` when no suffix letters were recognised.
    pub fn is_partial(&self) -> bool {
        self.suffix.is_none()
    }

    pub fn has_valid_prefix(&self) -> bool {
        tables::is_valid_prefix(&self.prefix)
    }
}

impl fmt::Display for PlateCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.digits)?;
        if let Some(suffix) = &self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}
