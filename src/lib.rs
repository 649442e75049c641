// src/lib.rs

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod normalize;
pub mod persistence;
pub use crate::core::engine::{transcribe, Transcriber, Transcription};
pub use crate::core::tokenizer::tokenize;
pub use crate::error::{HarnessError, TranscribeError};
