//! Scoped and call-level tracing helpers.
//!
//! Both helpers are explicit wrappers applied at call sites. They always
//! record entry and exit, annotate failures with the error type and a
//! captured backtrace, and never mask the original error.

use std::any::type_name;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::time::Instant;

use super::{EmitOptions, EventLog, Severity};

/// Guard that logs scope entry on construction and a completion message,
/// with elapsed time, when it drops.
///
/// The completion fires on every exit path - normal return, early `?`, or
/// a panic unwinding the scope - exactly once. Annotate an error exit with
/// [`ScopedTrace::fail`] before the guard drops.
pub struct ScopedTrace<'a> {
    log: &'a EventLog,
    proc: String,
    severity: Severity,
    start: Instant,
    error: Option<String>,
}

impl<'a> ScopedTrace<'a> {
    /// Enter a traced scope at the default severity 5.
    pub fn enter(log: &'a EventLog, proc: impl Into<String>) -> Self {
        Self::with_severity(log, proc, Severity::Info)
    }

    /// Enter a traced scope at a chosen severity.
    pub fn with_severity(log: &'a EventLog, proc: impl Into<String>, severity: Severity) -> Self {
        let proc = proc.into();
        log.emit(
            &format!("Entering [{proc}]"),
            EmitOptions::new().proc(&proc).severity(severity),
        );
        Self {
            log,
            proc,
            severity,
            start: Instant::now(),
            error: None,
        }
    }

    /// Record the error this scope is about to exit with.
    pub fn fail<E: StdError>(&mut self, error: &E) {
        self.error = Some(format!(
            "[{}] Error: [{}] Traceback: [{}]",
            type_name::<E>(),
            error,
            flatten(Backtrace::capture())
        ));
    }
}

impl Drop for ScopedTrace<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed().as_secs_f64();
        let message = if std::thread::panicking() {
            format!(
                "Finished [{}] after [{elapsed:.3}] seconds with a panic unwinding",
                self.proc
            )
        } else {
            match &self.error {
                None => format!(
                    "Finished [{}] after [{elapsed:.3}] seconds without error",
                    self.proc
                ),
                Some(error) => format!(
                    "Finished [{}] after [{elapsed:.3}] seconds with {error}",
                    self.proc
                ),
            }
        };

        self.log.emit(
            &message,
            EmitOptions::new().proc(&self.proc).severity(self.severity),
        );
    }
}

/// Wrap a unit of work so every invocation logs a start event and a
/// completion event.
///
/// Success is logged at debug severity with the elapsed time. Failure is
/// logged at alert severity with the elapsed time, error type, message and
/// a captured backtrace, after which the original error is returned
/// unchanged.
pub fn traced<T, E, F>(log: &EventLog, proc: &str, f: F) -> Result<T, E>
where
    E: StdError,
    F: FnOnce() -> Result<T, E>,
{
    log.emit(
        &format!("Starting [{proc}]"),
        EmitOptions::new().proc(proc).severity(Severity::Debug),
    );
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log.emit(
                &format!(
                    "Finished [{proc}] after [{:.3}] seconds",
                    start.elapsed().as_secs_f64()
                ),
                EmitOptions::new().proc(proc).severity(Severity::Debug),
            );
            Ok(value)
        }
        Err(error) => {
            log.emit(
                &format!(
                    "Finished [{proc}] after [{:.3}] seconds with [{}] Error: [{}] Traceback: [{}]",
                    start.elapsed().as_secs_f64(),
                    type_name::<E>(),
                    error,
                    flatten(Backtrace::capture())
                ),
                EmitOptions::new()
                    .proc(proc)
                    .severity(Severity::Alert)
                    .error(&error),
            );
            Err(error)
        }
    }
}

/// Collapse a backtrace onto one line so it cannot break the
/// one-record-per-line log format.
fn flatten(trace: Backtrace) -> String {
    trace
        .to_string()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
