//! Settings loading.
//!
//! Loading flow:
//! 1. Start with [`Settings::default()`]
//! 2. If a settings file exists, merge its values over the defaults
//! 3. Apply `IPA_*` environment variable overrides
//!
//! Command-line flags are applied by the binary on top of the result.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{HarnessError, HarnessResult};

pub const DEFAULT_SETTINGS_FILE: &str = "ipa_settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reference dataset for `evaluate`.
    pub dataset_path: Option<PathBuf>,
    /// Where the last evaluation report is kept for drift comparison.
    pub snapshot_path: Option<PathBuf>,
    /// Keep untranscribable words in their own bucket instead of dropping them.
    pub record_errors: bool,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            snapshot_path: None,
            record_errors: true,
            log_filter: "info".to_string(),
        }
    }
}

/// Loads settings from `path` (defaults when the file does not exist) and
/// applies process environment overrides.
pub fn load_settings(path: &Path) -> HarnessResult<Settings> {
    load_settings_with_env(path, |key| std::env::var(key).ok())
}

pub fn load_settings_with_env(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> HarnessResult<Settings> {
    let defaults = serde_json::to_value(Settings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        if !user.is_object() {
            return Err(HarnessError::InvalidSetting(format!(
                "{} must contain a JSON object",
                path.display()
            )));
        }
        merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: Settings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings, env);
    Ok(settings)
}

/// Object keys in `source` override `target`; nulls are skipped.
fn merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = match target_map.remove(&key) {
                    Some(target_val) => merge(target_val, source_val),
                    None => source_val,
                };
                target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Applies `IPA_DATASET`, `IPA_SNAPSHOT`, `IPA_RECORD_ERRORS` and `IPA_LOG`.
/// Unparsable booleans and empty values are ignored.
pub fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    let read = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(v) = read("IPA_DATASET") {
        settings.dataset_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read("IPA_SNAPSHOT") {
        settings.snapshot_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read("IPA_RECORD_ERRORS").and_then(|v| parse_bool(&v)) {
        settings.record_errors = v;
    }
    if let Some(v) = read("IPA_LOG") {
        settings.log_filter = v;
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
