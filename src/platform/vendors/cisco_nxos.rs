//! Cisco NX-OS family handler.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::platform::DeviceHandler;
use crate::session::ConnectionParameters;

/// NX-OS exec prompt. Config contexts carry a parenthesized mode marker.
static PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+(\(config[\w-]*\))?#\s*$").unwrap());

/// NX-OS-family device handler.
#[derive(Debug)]
pub struct NxosHandler {
    params: ConnectionParameters,
}

impl NxosHandler {
    /// Create a handler from resolved connection parameters.
    pub fn new(params: ConnectionParameters) -> Self {
        Self { params }
    }
}

/// Constructor registered for `cisco_nxos` and its transport variants.
pub fn handler(params: ConnectionParameters) -> Box<dyn DeviceHandler> {
    Box::new(NxosHandler::new(params))
}

impl DeviceHandler for NxosHandler {
    fn platform(&self) -> &str {
        self.params.platform.as_deref().unwrap_or("cisco_nxos")
    }

    fn host(&self) -> &str {
        &self.params.host
    }

    fn params(&self) -> &ConnectionParameters {
        &self.params
    }

    fn prompt_pattern(&self) -> &Regex {
        &PROMPT
    }
}
