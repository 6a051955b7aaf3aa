//! Device-type dispatch.
//!
//! The dispatcher is the public entry point of the crate: it resolves a
//! platform identifier for a connection attempt - from the caller's hint
//! when it names a known platform, otherwise by autodetection - and
//! constructs the matching platform handler.

mod autodetect;

pub use autodetect::Autodetector;

use std::sync::Arc;

use crate::config::RunConfig;
use crate::error::{DispatchError, Result};
use crate::eventlog::{EmitOptions, EventLog, Severity};
use crate::platform::{DeviceHandler, PlatformRegistry};
use crate::session::{ConnectionParameters, SessionFactory};

const PROC: &str = "dispatch.create_instantiated_device";

/// Factory routing connection attempts to platform handlers.
pub struct Dispatcher {
    registry: Arc<PlatformRegistry>,
    detector: Autodetector,
    log: EventLog,
}

impl Dispatcher {
    /// Dispatcher over the built-in platform registry.
    pub fn new(factory: Arc<dyn SessionFactory>, config: Arc<RunConfig>) -> Self {
        Self::with_registry(PlatformRegistry::global(), factory, config)
    }

    /// Dispatcher over a caller-supplied registry.
    pub fn with_registry(
        registry: Arc<PlatformRegistry>,
        factory: Arc<dyn SessionFactory>,
        config: Arc<RunConfig>,
    ) -> Self {
        let log = EventLog::new(config);
        let detector = Autodetector::new(factory, log.clone());
        Self {
            registry,
            detector,
            log,
        }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Resolve the platform for `params` and construct the matching
    /// handler.
    ///
    /// A hint naming a known platform - including transport-suffixed
    /// aliases, which are honored verbatim - skips autodetection entirely.
    /// Without a usable hint the device is probed; a detected identifier
    /// the registry does not recognize fails with
    /// [`DispatchError::UnresolvableDevice`] before any handler is
    /// constructed. The returned handle carries the resolved identifier in
    /// place of the hint.
    pub fn create(&self, mut params: ConnectionParameters) -> Result<Box<dyn DeviceHandler>> {
        if params.host.is_empty() {
            return Err(DispatchError::InvalidArgument {
                message: "connection target must be a non-empty address".to_string(),
            }
            .into());
        }

        self.log.emit(
            &format!("Instantiating {}", params.host),
            EmitOptions::new()
                .proc(PROC)
                .host(&params.host)
                .severity(Severity::Info),
        );

        let hinted = params
            .platform
            .as_deref()
            .filter(|hint| self.registry.contains(hint));
        let resolved = match hinted {
            Some(hint) => hint.to_string(),
            None => {
                let detected = self.detector.detect(&params.host, &params.credentials)?;
                if !self.registry.contains(&detected) {
                    return Err(DispatchError::UnresolvableDevice {
                        host: params.host.clone(),
                        detected,
                    }
                    .into());
                }
                detected
            }
        };

        let ctor = self.registry.lookup(&resolved)?;
        params.platform = Some(resolved);

        self.log.emit(
            &format!("Instantiated {}", params.host),
            EmitOptions::new()
                .proc(PROC)
                .host(&params.host)
                .severity(Severity::Info),
        );

        Ok(ctor(params))
    }
}
