//! Session-layer seam.
//!
//! The concrete remote-shell implementation (SSH/telnet transport, prompt
//! scraping, fingerprinting probes) lives outside this crate. The
//! dispatcher needs exactly two capabilities from it: open a provisional
//! probe session against a host, and ask that session which platform it is
//! talking to. Both calls block until the network round-trip completes or
//! fails; any retry or backoff policy belongs behind these traits.

use indexmap::IndexMap;
use secrecy::SecretString;

use crate::error::TransportError;

/// A username/password pair for device login.
#[derive(Debug, Clone)]
pub struct Credential {
    /// Login username.
    pub username: String,

    /// Login password. Redacted from `Debug` output.
    pub password: SecretString,
}

impl Credential {
    /// Create a credential from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Per-attempt connection parameters.
///
/// Created by the caller for each connection attempt and consumed once by
/// the dispatcher; the handler constructor takes ownership of the whole
/// value, including any free-form pass-through fields.
#[derive(Debug, Clone)]
pub struct ConnectionParameters {
    /// Target host name or IP address.
    pub host: String,

    /// Remote shell port.
    pub port: u16,

    /// Credentials to try, in order.
    pub credentials: Vec<Credential>,

    /// Platform identifier hint. Overwritten with the resolved identifier
    /// when a handler is constructed.
    pub platform: Option<String>,

    /// Free-form pass-through fields consumed by handler constructors.
    pub extras: IndexMap<String, String>,
}

impl ConnectionParameters {
    /// Parameters for a host with the default port and no credentials.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 22,
            credentials: Vec::new(),
            platform: None,
            extras: IndexMap::new(),
        }
    }

    /// Set the remote shell port (default: 22).
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Append a credential to try.
    pub fn credential(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials.push(Credential::new(username, password));
        self
    }

    /// Set the platform identifier hint.
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Add a free-form pass-through field.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// Factory for provisional, capability-probing sessions.
pub trait SessionFactory: Send + Sync {
    /// Open a probe session to `host`, trying `credentials` in order.
    fn open_probe(
        &self,
        host: &str,
        credentials: &[Credential],
    ) -> Result<Box<dyn ProbeSession>, TransportError>;
}

/// A provisional session used only to fingerprint the remote platform.
pub trait ProbeSession {
    /// Run the fingerprinting routine and return the best-guess platform
    /// identifier. `Ok(None)` means the session worked but nothing matched.
    fn identify(&mut self) -> Result<Option<String>, TransportError>;
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_parameters_builder() {
        let params = ConnectionParameters::new("10.0.0.1")
            .port(2222)
            .credential("admin", "hunter2")
            .platform("cisco_ios")
            .extra("site", "hq")
            .extra("rack", "r12");

        assert_eq!(params.host, "10.0.0.1");
        assert_eq!(params.port, 2222);
        assert_eq!(params.platform.as_deref(), Some("cisco_ios"));
        assert_eq!(params.credentials.len(), 1);
        assert_eq!(params.credentials[0].password.expose_secret(), "hunter2");

        // Pass-through fields keep their insertion order
        let keys: Vec<&str> = params.extras.keys().map(String::as_str).collect();
        assert_eq!(keys, ["site", "rack"]);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(ConnectionParameters::new("host").port, 22);
    }

    #[test]
    fn test_credential_debug_redacts_password() {
        let credential = Credential::new("admin", "hunter2");
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
