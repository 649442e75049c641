// File: src/persistence.rs
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::HarnessResult;
use crate::harness::Report;

/// Writes a report snapshot next to `path` and atomically moves it into place.
pub fn save_snapshot(report: &Report, path: &Path) -> HarnessResult<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, report)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    debug!(path = %path.display(), "snapshot saved");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> HarnessResult<Report> {
    let reader = BufReader::new(File::open(path)?);
    Ok(bincode::deserialize_from(reader)?)
}

/// Words whose status changed between two evaluation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Drift {
    /// Successful before, not successful now.
    pub regressions: Vec<String>,
    /// Not successful before, successful now.
    pub fixes: Vec<String>,
}

impl Drift {
    pub fn is_empty(&self) -> bool {
        self.regressions.is_empty() && self.fixes.is_empty()
    }
}

pub fn compare_reports(previous: &Report, current: &Report) -> Drift {
    let succeeded = |r: &Report| -> HashSet<String> {
        r.successes.iter().map(|o| o.word.clone()).collect()
    };
    let before = succeeded(previous);
    let after = succeeded(current);

    let current_words = current
        .successes
        .iter()
        .chain(&current.failures)
        .map(|o| o.word.as_str())
        .chain(current.errored.iter().map(|e| e.word.as_str()));

    Drift {
        regressions: unique(current_words.filter(|w| before.contains(*w) && !after.contains(*w))),
        fixes: unique(
            current.successes.iter().map(|o| o.word.as_str()).filter(|w| !before.contains(*w)),
        ),
    }
}

/// Collects words in first-seen order, dropping repeats.
fn unique<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut emitted = HashSet::new();
    words.filter(|w| emitted.insert(*w)).map(str::to_string).collect()
}
