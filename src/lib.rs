//! Single-shot HTTP probe.
//!
//! Issues one GET against a (by default local) API endpoint and reports, as
//! they happen, the response status and the first characters of the body, or
//! the transport error when the server cannot be reached.
//!
//! ```no_run
//! use api_probe::{Probe, ProbeConfig};
//! use api_probe::report::ConsoleReporter;
//!
//! # async fn demo() -> Result<(), api_probe::ProbeError> {
//! let probe = Probe::new(ProbeConfig::default())?;
//! let resp = probe.run(&mut ConsoleReporter::stdout()).await?;
//! println!("{} bytes", resp.body.len());
//! # Ok(()) }
//! ```

pub mod config;
pub mod errors;
pub mod event;
pub mod net;
pub mod probe;
pub mod report;

pub use config::{ConfigError, ProbeConfig};
pub use errors::ProbeError;
pub use event::ProbeEvent;
pub use probe::Probe;
