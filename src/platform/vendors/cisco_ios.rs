//! Cisco IOS family handler.
//!
//! Covers classic IOS and IOS-like trains over either transport; the
//! `cisco_ios_telnet` alias reuses this handler.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::platform::DeviceHandler;
use crate::session::ConnectionParameters;

/// Prompt for user and privileged exec modes.
static PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.@/-]+[>#]\s*$").unwrap());

/// IOS-family device handler.
#[derive(Debug)]
pub struct IosHandler {
    params: ConnectionParameters,
}

impl IosHandler {
    /// Create a handler from resolved connection parameters.
    pub fn new(params: ConnectionParameters) -> Self {
        Self { params }
    }
}

/// Constructor registered for `cisco_ios` and its transport variants.
pub fn handler(params: ConnectionParameters) -> Box<dyn DeviceHandler> {
    Box::new(IosHandler::new(params))
}

impl DeviceHandler for IosHandler {
    fn platform(&self) -> &str {
        self.params.platform.as_deref().unwrap_or("cisco_ios")
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
