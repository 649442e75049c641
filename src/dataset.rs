// File: src/dataset.rs
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HarnessResult;

/// A reference pair: a spelled word and its attested pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub word: String,
    pub pronunciation: String,
}

impl DatasetEntry {
    pub fn new(word: &str, pronunciation: &str) -> Self {
        Self { word: word.to_string(), pronunciation: pronunciation.to_string() }
    }
}

/// Reads a JSON array of `{ "word", "pronunciation" }` objects, keeping file order.
pub fn load_dataset(path: &Path) -> HarnessResult<Vec<DatasetEntry>> {
    let reader = BufReader::new(File::open(path)?);
    let entries: Vec<DatasetEntry> = serde_json::from_reader(reader)?;
    debug!(path = %path.display(), entries = entries.len(), "dataset loaded");
    Ok(entries)
}

pub fn parse_dataset(json: &str) -> HarnessResult<Vec<DatasetEntry>> {
    Ok(serde_json::from_str(json)?)
}
