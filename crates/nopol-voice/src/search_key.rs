//! Search keys handed to the vehicle-lookup service.
//!
//! A lookup can be keyed by plate, chassis number (*nomor rangka*) or engine
//! number (*nomor mesin*). Plates go through the normalizer; the other two are
//! only uppercased and stripped to `[A-Z0-9]`.

use std::fmt;
use std::str::FromStr;

use nopol_core::PlateNormalizer;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Plate,
    Chassis,
    Engine,
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plate" | "nopol" => Ok(SearchKind::Plate),
            "chassis" | "rangka" => Ok(SearchKind::Chassis),
            "engine" | "mesin" => Ok(SearchKind::Engine),
            other => Err(format!("unknown search kind: {other}")),
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Plate => write!(f, "plate"),
            SearchKind::Chassis => write!(f, "chassis"),
            SearchKind::Engine => write!(f, "engine"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchKeyError {
    #[error("no valid plate in {0:?}")]
    NoPlate(String),
    #[error("{0} number is empty after cleaning")]
    Empty(SearchKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SearchKey {
    Plate(String),
    Chassis(String),
    Engine(String),
}

impl SearchKey {
    pub fn parse(
        kind: SearchKind,
        raw: &str,
        normalizer: &PlateNormalizer,
    ) -> Result<Self, SearchKeyError> {
        match kind {
            SearchKind::Plate => {
                let plate = normalizer.clean_plate(raw);
                if plate.is_empty() {
                    Err(SearchKeyError::NoPlate(raw.to_string()))
                } else {
                    Ok(SearchKey::Plate(plate))
                }
            }
            SearchKind::Chassis => alphanumeric(kind, raw).map(SearchKey::Chassis),
            SearchKind::Engine => alphanumeric(kind, raw).map(SearchKey::Engine),
        }
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            SearchKey::Plate(_) => SearchKind::Plate,
            SearchKey::Chassis(_) => SearchKind::Chassis,
            SearchKey::Engine(_) => SearchKind::Engine,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SearchKey::Plate(v) | SearchKey::Chassis(v) | SearchKey::Engine(v) => v,
        }
    }
}

fn alphanumeric(kind: SearchKind, raw: &str) -> Result<String, SearchKeyError> {
    let cleaned: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();
    if cleaned.is_empty() {
        Err(SearchKeyError::Empty(kind))
    } else {
        Ok(cleaned)
    }
}
