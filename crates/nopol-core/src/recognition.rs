//! Recognition-layer failures and their user-facing messages.
//!
//! The recogniser reports failures as integer status codes. [`RecognitionError::from_code`]
//! maps every code to a kind, falling back to [`RecognitionError::Unknown`],
//! and [`RecognitionError::message`] gives a fixed string per kind and locale.
//!
//! | Code | Kind                      |
//! |------|---------------------------|
//! | 1    | `NetworkTimeout`          |
//! | 2    | `Network`                 |
//! | 3    | `Audio`                   |
//! | 4    | `Server`                  |
//! | 5    | `Client`                  |
//! | 6    | `SpeechTimeout`           |
//! | 7    | `NoMatch`                 |
//! | 8    | `RecognizerBusy`          |
//! | 9    | `InsufficientPermissions` |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "en")]
    English,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "indonesian" => Ok(Locale::Indonesian),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unknown locale: {other} (expected id|en)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum RecognitionError {
    #[error("Audio recording error")]
    Audio,
    #[error("Client side error")]
    Client,
    #[error("Microphone permission not granted")]
    InsufficientPermissions,
    #[error("Network error")]
    Network,
    #[error("Network timeout")]
    NetworkTimeout,
    #[error("No speech match, please try again")]
    NoMatch,
    #[error("Recognition service is busy")]
    RecognizerBusy,
    #[error("Error from server")]
    Server,
    #[error("No speech input")]
    SpeechTimeout,
    #[error("Unrecognized error (code {0})")]
    Unknown(i32),
}

impl RecognitionError {
    /// Every kind with a dedicated status code.
    pub const KNOWN: [RecognitionError; 9] = [
        RecognitionError::Audio,
        RecognitionError::Client,
        RecognitionError::InsufficientPermissions,
        RecognitionError::Network,
        RecognitionError::NetworkTimeout,
        RecognitionError::NoMatch,
        RecognitionError::RecognizerBusy,
        RecognitionError::Server,
        RecognitionError::SpeechTimeout,
    ];

    pub fn from_code(code: i32) -> Self {
        match code {
            1 => RecognitionError::NetworkTimeout,
            2 => RecognitionError::Network,
            3 => RecognitionError::Audio,
            4 => RecognitionError::Server,
            5 => RecognitionError::Client,
            6 => RecognitionError::SpeechTimeout,
            7 => RecognitionError::NoMatch,
            8 => RecognitionError::RecognizerBusy,
            9 => RecognitionError::InsufficientPermissions,
            other => RecognitionError::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            RecognitionError::NetworkTimeout => 1,
            RecognitionError::Network => 2,
            RecognitionError::Audio => 3,
            RecognitionError::Server => 4,
            RecognitionError::Client => 5,
            RecognitionError::SpeechTimeout => 6,
            RecognitionError::NoMatch => 7,
            RecognitionError::RecognizerBusy => 8,
            RecognitionError::InsufficientPermissions => 9,
            RecognitionError::Unknown(code) => code,
        }
    }

    /// `true` for failures where asking the user to speak again makes sense.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            RecognitionError::NoMatch
                | RecognitionError::SpeechTimeout
                | RecognitionError::RecognizerBusy
                | RecognitionError::NetworkTimeout
        )
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Indonesian => match self {
                RecognitionError::Audio => "Kesalahan perekaman audio",
                RecognitionError::Client => "Kesalahan pada sisi klien",
                RecognitionError::InsufficientPermissions => "Izin mikrofon belum diberikan",
                RecognitionError::Network => "Kesalahan jaringan",
                RecognitionError::NetworkTimeout => "Waktu koneksi jaringan habis",
                RecognitionError::NoMatch => "Suara tidak dikenali, silakan coba lagi",
                RecognitionError::RecognizerBusy => "Layanan pengenalan suara sedang sibuk",
                RecognitionError::Server => "Kesalahan dari server",
                RecognitionError::SpeechTimeout => "Tidak ada suara yang terdeteksi",
                RecognitionError::Unknown(_) => "Terjadi kesalahan yang tidak dikenali",
            },
            Locale::English => match self {
                RecognitionError::Audio => "Audio recording error",
                RecognitionError::Client => "Client side error",
                RecognitionError::InsufficientPermissions => "Microphone permission not granted",
                RecognitionError::Network => "Network error",
                RecognitionError::NetworkTimeout => "Network timeout",
                RecognitionError::NoMatch => "No speech match, please try again",
                RecognitionError::RecognizerBusy => "Recognition service is busy",
                RecognitionError::Server => "Error from server",
                RecognitionError::SpeechTimeout => "No speech input",
                RecognitionError::Unknown(_) => "Unrecognized error",
            },
        }
    }
}

/// Message for a raw recogniser status code. Total: never fails.
pub fn error_message(code: i32, locale: Locale) -> &'static str {
    RecognitionError::from_code(code).message(locale)
}
