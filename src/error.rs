//! Error types for netcensus.

use std::io;
use std::time::Duration;

use thiserror::Error;

/// Main error type for netcensus operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Session/transport-level errors from the external session layer
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Dispatch and autodetection errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Run configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Transport layer errors (session establishment, authentication).
///
/// These originate in the external session layer; the core never retries
/// them, it logs them at critical severity and re-raises.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Failed to connect to host
    #[error("Connection failed to {host}:{port}: {source}")]
    ConnectionFailed {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Authentication failed
    #[error("Authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    /// Session was closed unexpectedly
    #[error("Session disconnected")]
    Disconnected,

    /// Operation timed out
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Dispatch layer errors (platform resolution, autodetection outcomes).
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Malformed caller input (e.g. an empty address)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The registry has no entry for the requested platform key
    #[error("Unknown platform '{name}'")]
    UnknownPlatform { name: String },

    /// The probe session opened but fingerprinting produced no match
    #[error("Autodetection produced no result for {host}")]
    DetectionFailed { host: String },

    /// Autodetection returned a platform the registry does not recognize
    #[error("Autodetected platform '{detected}' for {host} is not registered")]
    UnresolvableDevice { host: String, detected: String },
}

/// Run configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    /// Configuration file did not parse
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias using netcensus's Error.
pub type Result<T> = std::result::Result<T, Error>;
