//! Minimal TCP probe client.
//!
//! Opens a single connection to a listener, writes a short identifying payload a fixed number of times
//! with a fixed pause between writes, and closes the connection. Nothing is read back.
//!
//! ```no_run
//! use tcp_probe::ProbeConfig;
//!
//! let report = tcp_probe::run(ProbeConfig::default())?;
//! assert_eq!(report.writes_completed, 3);
//! # Ok::<(), tcp_probe::ProbeError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod address;
mod config;
mod connection;
mod error;
mod payload;
mod probe;

pub use address::SocketAddress;
pub use config::{DEFAULT_INTERVAL, DEFAULT_REPEAT, DEFAULT_TARGET, FailurePolicy, ProbeConfig};
pub use connection::Connection;
pub use error::{ProbeError, Result};
pub use payload::{DEFAULT_PREFIX, Payload};
pub use probe::{Probe, ProbeReport, ProbeState, run};
