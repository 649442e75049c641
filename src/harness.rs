// File: src/harness.rs
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::core::engine::Transcriber;
use crate::dataset::DatasetEntry;
use crate::normalize::normalize_ipa;

/// A word that transcribed, with the prediction and the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub word: String,
    pub guessed: String,
    pub actual: String,
}

/// A word the transcriber refused, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErroredWord {
    pub word: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy)]
pub struct EvaluationOptions {
    /// Keep words that failed to transcribe in `Report::errored`. When off,
    /// they are dropped silently.
    pub record_errors: bool,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self { record_errors: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub successes: Vec<Outcome>,
    pub failures: Vec<Outcome>,
    pub errored: Vec<ErroredWord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub successes: usize,
    pub failures: usize,
    pub errored: usize,
}

impl Report {
    pub fn summary(&self) -> Summary {
        Summary {
            successes: self.successes.len(),
            failures: self.failures.len(),
            errored: self.errored.len(),
        }
    }

    /// Share of compared words whose normalized forms matched.
    pub fn accuracy(&self) -> Option<f64> {
        let compared = self.successes.len() + self.failures.len();
        (compared > 0).then(|| self.successes.len() as f64 / compared as f64)
    }
}

/// True when both transcriptions agree after normalization.
pub fn matches_reference(guessed: &str, actual: &str) -> bool {
    normalize_ipa(guessed) == normalize_ipa(actual)
}

/// Transcribes every entry and buckets it as a success, a failure, or an error.
#[instrument(skip_all, fields(entries = entries.len(), record_errors = options.record_errors))]
pub fn evaluate(
    transcriber: &Transcriber,
    entries: &[DatasetEntry],
    options: EvaluationOptions,
) -> Report {
    let mut report = Report::default();

    for entry in entries {
        match transcriber.transcribe(&entry.word) {
            Ok(guessed) => {
                let outcome = Outcome {
                    word: entry.word.clone(),
                    actual: entry.pronunciation.clone(),
                    guessed,
                };
                if matches_reference(&outcome.guessed, &outcome.actual) {
                    report.successes.push(outcome);
                } else {
                    report.failures.push(outcome);
                }
            }
            Err(e) => {
                warn!(word = %entry.word, error = %e, "word could not be transcribed");
                if options.record_errors {
                    report.errored.push(ErroredWord {
                        word: entry.word.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    let summary = report.summary();
    info!(
        successes = summary.successes,
        failures = summary.failures,
        errored = summary.errored,
        "evaluation finished"
    );
    report
}
