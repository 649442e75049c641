//! Error types for transcription and evaluation.

use std::fmt;

use thiserror::Error;

/// Direction of a requested voicing substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voicing {
    Voiced,
    Unvoiced,
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Voicing::Voiced => f.write_str("voiced"),
            Voicing::Unvoiced => f.write_str("unvoiced"),
        }
    }
}

/// Errors that abort transcription of a single word.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscribeError {
    /// A token has no entry in the vowel, consonant or digraph table.
    #[error("unexpected token {token:?} found in the word {word:?}")]
    UnrecognizedGrapheme { token: String, word: String },

    /// A voicing override was requested for a phoneme with no counterpart.
    #[error("phoneme {phoneme:?} has no {direction} counterpart (in the word {word:?})")]
    MissingVoicingCounterpart {
        phoneme: String,
        direction: Voicing,
        word: String,
    },
}

/// Errors from loading datasets and settings or persisting report snapshots.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode or decode snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
    #[error("failed to persist snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

pub type Result<T> = std::result::Result<T, TranscribeError>;

pub type HarnessResult<T> = std::result::Result<T, HarnessError>;
