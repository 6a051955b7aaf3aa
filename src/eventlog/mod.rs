//! Structured event log.
//!
//! The event log is an append-only, severity-filtered recorder: each call
//! serializes one comma-delimited line to the configured destination file.
//! It exists so a crawl run can be reconstructed afterwards from the event
//! stream alone.
//!
//! Logging is never allowed to become a caller-visible failure: IO and
//! formatting problems degrade to a `false` return.

mod trace;

pub use trace::{ScopedTrace, traced};

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;
use std::sync::Arc;

use chrono::Local;

use crate::config::{RunConfig, format_timestamp};

/// Severity scale for event records. Lower levels are more severe and more
/// visible; levels 5-6 are debug-class and cheaply discardable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Critical alerts
    Critical = 1,
    /// Non-critical alerts
    Alert = 2,
    /// High level info
    High = 3,
    /// Common info
    Normal = 4,
    /// Informational debug detail
    Info = 5,
    /// Full debug detail
    Debug = 6,
}

impl Severity {
    /// Numeric level, 1 (critical) through 6 (debug).
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Levels 5-6 are discarded unless the run configuration enables debug.
    pub fn is_debug_class(self) -> bool {
        self.level() >= 5
    }

    /// Prefix prepended to the message body.
    fn prefix(self) -> &'static str {
        match self {
            Severity::Critical => "! ",
            Severity::Alert => "? ",
            Severity::High => "#3 ",
            Severity::Normal => "#4 ",
            Severity::Info => "#5 ",
            Severity::Debug => "#6 ",
        }
    }
}

/// Options for a single [`EventLog::emit`] call.
pub struct EmitOptions<'a> {
    proc: &'a str,
    host: &'a str,
    severity: Severity,
    print_out: bool,
    destination: Option<&'a Path>,
    error: Option<&'a dyn fmt::Display>,
    new_log: bool,
}

impl<'a> EmitOptions<'a> {
    /// Options with the defaults: severity 4, console echo on, the
    /// process-wide destination, appending.
    pub fn new() -> Self {
        Self {
            proc: "",
            host: "",
            severity: Severity::Normal,
            print_out: true,
            destination: None,
            error: None,
            new_log: false,
        }
    }

    /// Tag identifying the calling component/method.
    pub fn proc(mut self, proc: &'a str) -> Self {
        self.proc = proc;
        self
    }

    /// Address of the device the event concerns.
    pub fn host(mut self, host: &'a str) -> Self {
        self.host = host;
        self
    }

    /// Severity level (default: [`Severity::Normal`]).
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Whether to echo the message to the console (default: true).
    pub fn print_out(mut self, print_out: bool) -> Self {
        self.print_out = print_out;
        self
    }

    /// Write to this file instead of the configured destination.
    pub fn destination(mut self, path: &'a Path) -> Self {
        self.destination = Some(path);
        self
    }

    /// Error value to include in the record.
    pub fn error(mut self, error: &'a dyn fmt::Display) -> Self {
        self.error = Some(error);
        self
    }

    /// Truncate the destination and start a fresh log file.
    pub fn new_log(mut self) -> Self {
        self.new_log = true;
        self
    }
}

impl Default for EmitOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity-filtered append-only event recorder.
///
/// Cheap to clone; all clones share the same run configuration. The
/// file-append path is not synchronized - concurrent writers must
/// serialize access to the destination externally.
#[derive(Clone)]
pub struct EventLog {
    config: Arc<RunConfig>,
}

impl EventLog {
    /// Create an event log over a run configuration.
    pub fn new(config: Arc<RunConfig>) -> Self {
        Self { config }
    }

    /// The run configuration this log was built with.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Record one event.
    ///
    /// Returns `true` only if the line was physically written to the
    /// destination file. Debug-class events return `false` without any
    /// formatting or IO when debug is disabled.
    pub fn emit(&self, message: &str, opts: EmitOptions<'_>) -> bool {
        if opts.severity.is_debug_class() && !self.config.debug {
            return false;
        }

        let body = format!("{}{}", opts.severity.prefix(), message);

        if opts.severity.level() <= self.config.verbosity && opts.print_out {
            println!("{:<35.35}: {}", opts.proc, body);
        }

        // Embedded delimiters would break the one-record-per-line format
        let timestamp =
            format_timestamp(Local::now(), &self.config.time_format).unwrap_or_default();
        let error = opts
            .error
            .map(|error| format!("{error}").replace(',', ";"))
            .unwrap_or_default();
        let line = format!(
            "{:<20}, {}, {}, {:<15}, {}",
            opts.proc,
            body.replace(',', ";"),
            timestamp,
            opts.host,
            error
        );

        let destination = opts.destination.unwrap_or(&self.config.log_path);
        match write_line(destination, &line, opts.new_log) {
            Ok(()) => true,
            Err(error) => {
                log::warn!(
                    "event log write to {} failed: {}",
                    destination.display(),
                    error
                );
                false
            }
        }
    }
}

fn write_line(destination: &Path, line: &str, new_log: bool) -> io::Result<()> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = if new_log {
        OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(destination)?
    } else {
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(destination)?
    };

    writeln!(file, "{line}")
}
