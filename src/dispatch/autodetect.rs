//! Platform autodetection over a probe session.

use std::sync::Arc;

use crate::error::{DispatchError, Error, Result, TransportError};
use crate::eventlog::{EmitOptions, EventLog, Severity};
use crate::session::{Credential, SessionFactory};

const PROC: &str = "dispatch.autodetect";

/// Autodetector that probes devices with a generic fingerprinting session
/// instead of a committed platform handler.
pub struct Autodetector {
    factory: Arc<dyn SessionFactory>,
    log: EventLog,
}

impl Autodetector {
    /// Create an autodetector over a session factory.
    pub fn new(factory: Arc<dyn SessionFactory>, log: EventLog) -> Self {
        Self { factory, log }
    }

    /// Determine the platform identifier of `host`.
    ///
    /// Opens a provisional probe session and asks it to fingerprint the
    /// device. Session failures are logged at critical severity and
    /// propagate unchanged; a session that opens but matches nothing fails
    /// with [`DispatchError::DetectionFailed`]. No retries happen here -
    /// backoff policy belongs to the session layer.
    pub fn detect(&self, host: &str, credentials: &[Credential]) -> Result<String> {
        if host.is_empty() {
            return Err(DispatchError::InvalidArgument {
                message: "autodetect target must be a non-empty address".to_string(),
            }
            .into());
        }

        self.log.emit(
            "Autodetecting unknown device type",
            EmitOptions::new()
                .proc(PROC)
                .host(host)
                .severity(Severity::Info),
        );

        let mut probe = self
            .factory
            .open_probe(host, credentials)
            .map_err(|error| self.session_failure(host, error))?;

        let detected = probe
            .identify()
            .map_err(|error| self.session_failure(host, error))?;

        match detected {
            Some(platform) => {
                self.log.emit(
                    &format!("Autodetection determined a device type of [{platform}]"),
                    EmitOptions::new().proc(PROC).host(host),
                );
                Ok(platform)
            }
            None => Err(DispatchError::DetectionFailed {
                host: host.to_string(),
            }
            .into()),
        }
    }

    fn session_failure(&self, host: &str, error: TransportError) -> Error {
        self.log.emit(
            "Autodetect connection failed",
            EmitOptions::new()
                .proc(PROC)
                .host(host)
                .severity(Severity::Critical)
                .error(&error),
        );
        error.into()
    }
}
