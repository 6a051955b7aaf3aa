//! Process-wide run configuration.
//!
//! A [`RunConfig`] is constructed once at startup (from defaults or a TOML
//! file) and injected into every component that logs. It is read-only for
//! the life of the process; tests build their own isolated values instead
//! of touching shared state.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Timestamp format used inside log lines.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format safe for use in file names.
pub const TIME_FORMAT_FILE: &str = "%Y%m%d_%H%M%S";

/// Run configuration shared by the dispatcher, autodetector and event log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Console echo threshold. Events with a severity level above this are
    /// written to the log file but not echoed to the console.
    pub verbosity: u8,

    /// Keep debug-class events (severity 5-6). When false they are
    /// discarded before any formatting or IO happens.
    pub debug: bool,

    /// Working directory for run artifacts.
    pub run_path: PathBuf,

    /// Default event log destination.
    pub log_path: PathBuf,

    /// Timestamp format for log lines.
    pub time_format: String,

    /// Timestamp format for generated file names.
    pub file_time_format: String,

    /// Initial delay hint for the session layer, in seconds. Opaque to this
    /// crate; the session layer owns all retry/backoff behavior.
    pub base_delay: f64,

    /// Per-attempt delay increase hint for the session layer, in seconds.
    pub delay_increase: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            verbosity: 4,
            debug: false,
            run_path: PathBuf::from("runtime"),
            log_path: PathBuf::from("runtime/events.log"),
            time_format: TIME_FORMAT.to_string(),
            file_time_format: TIME_FORMAT_FILE.to_string(),
            base_delay: 1.0,
            delay_increase: 0.3,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so a partial file is fine.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Produce a file name of the form `<stem>_<timestamp>` using the
    /// configured file timestamp format.
    pub fn timestamped_file_name(&self, stem: &str) -> String {
        match format_timestamp(Local::now(), &self.file_time_format) {
            Some(ts) => format!("{stem}_{ts}"),
            None => stem.to_string(),
        }
    }

    /// Resolve a run artifact name against the working directory.
    pub fn run_file(&self, name: &str) -> PathBuf {
        self.run_path.join(name)
    }
}

/// Render a timestamp with a runtime-supplied format string.
///
/// Returns `None` instead of propagating the formatting error an invalid
/// specifier produces, so a bad configuration value cannot abort a caller.
pub(crate) fn format_timestamp(when: DateTime<Local>, fmt: &str) -> Option<String> {
    let mut out = String::new();
    match write!(out, "{}", when.format(fmt)) {
        Ok(()) => Some(out),
        Err(_) => None,
    }
}
