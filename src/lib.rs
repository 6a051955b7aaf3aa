//! # Netcensus
//!
//! Device-type dispatch and autodetection core for network inventory
//! crawling.
//!
//! Netcensus resolves which vendor/platform a network device runs - from
//! an explicit hint, or by opening a provisional probe session and
//! fingerprinting the device - and routes the connection attempt to the
//! matching platform handler. Every step is recorded in a structured,
//! severity-filtered event log so a crawl run can be reconstructed from
//! the event stream alone.
//!
//! The remote-shell session implementation itself lives outside this
//! crate, behind the [`SessionFactory`] / [`ProbeSession`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use netcensus::{ConnectionParameters, Dispatcher, RunConfig};
//! # use netcensus::{Credential, ProbeSession, SessionFactory, TransportError};
//! # struct SshProbeFactory;
//! # impl SessionFactory for SshProbeFactory {
//! #     fn open_probe(
//! #         &self,
//! #         _host: &str,
//! #         _credentials: &[Credential],
//! #     ) -> Result<Box<dyn ProbeSession>, TransportError> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! fn main() -> Result<(), netcensus::Error> {
//!     let config = Arc::new(RunConfig::default());
//!     let dispatcher = Dispatcher::new(Arc::new(SshProbeFactory), config);
//!
//!     // With a known hint the device is never probed
//!     let device = dispatcher.create(
//!         ConnectionParameters::new("192.168.1.1")
//!             .credential("admin", "secret")
//!             .platform("cisco_ios"),
//!     )?;
//!
//!     println!("handler ready for {}", device.platform());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod eventlog;
pub mod platform;
pub mod session;

// Re-export main types for convenience
pub use config::RunConfig;
pub use dispatch::{Autodetector, Dispatcher};
pub use error::{ConfigError, DispatchError, Error, TransportError};
pub use eventlog::{EmitOptions, EventLog, ScopedTrace, Severity, traced};
pub use platform::{DeviceHandler, HandlerCtor, PlatformRegistry};
pub use session::{ConnectionParameters, Credential, ProbeSession, SessionFactory};
