//! Platform handlers and the class registry.
//!
//! A platform identifier is a short token naming a vendor/OS family,
//! optionally suffixed with its transport variant (`_ssh`, `_telnet`).
//! The registry maps every identifier to the constructor of the handler
//! responsible for that family.

mod registry;
pub mod vendors;

pub use registry::PlatformRegistry;

use regex::bytes::Regex;

use crate::session::ConnectionParameters;

/// Trait for platform-specific device handlers.
///
/// The full command surface (sending, parsing, persisting) lives in the
/// platform implementations outside this core; the dispatcher only needs
/// construction and identification.
pub trait DeviceHandler: Send + std::fmt::Debug {
    /// Resolved platform identifier this handler was constructed for.
    fn platform(&self) -> &str;

    /// Target host.
    fn host(&self) -> &str;

    /// Connection parameters the handler was constructed with.
    fn params(&self) -> &ConnectionParameters;

    /// Prompt pattern the session layer scrapes with on this platform.
    fn prompt_pattern(&self) -> &Regex;
}

/// Constructor for a platform handler.
///
/// Constructors only store parameters; connecting is the session layer's
/// concern and happens later, through the returned handle.
pub type HandlerCtor = fn(ConnectionParameters) -> Box<dyn DeviceHandler>;
