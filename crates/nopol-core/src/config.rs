//! Configuration types for nopol.
//!
//! [`Config::load`] reads `~/.config/nopol/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::NopolError;
use crate::normalizer::PlateNormalizer;
use crate::recognition::Locale;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalizer]
# Extra phonetic corrections, tried before the built-in table:
# [[normalizer.corrections]]
# heard     = "DOBEL WE"
# corrected = "W"
corrections = []

[voice]
locale         = "id"
min_confidence = 0.0
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/nopol/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
}

/// `[normalizer]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub corrections: Vec<CorrectionEntry>,
}

/// One `[[normalizer.corrections]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CorrectionEntry {
    pub heard: String,
    pub corrected: String,
}

impl NormalizerConfig {
    /// Normalizer with the configured corrections ahead of the built-in table.
    pub fn build(&self) -> Result<PlateNormalizer, NopolError> {
        PlateNormalizer::with_corrections(
            self.corrections
                .iter()
                .map(|c| (c.heard.as_str(), c.corrected.as_str())),
        )
    }
}

/// `[voice]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceConfig {
    #[serde(default)]
    pub locale: Locale,
    /// Hypotheses scoring below this are ignored before selection.
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
}

fn default_min_confidence() -> f32 { 0.0 }

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            min_confidence: default_min_confidence(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/nopol/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit file over the built-in defaults. The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()?;

        if !(0.0..=1.0).contains(&cfg.voice.min_confidence) {
            anyhow::bail!(
                "voice.min_confidence must be within 0.0..=1.0, got {}",
                cfg.voice.min_confidence
            );
        }
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("nopol")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
