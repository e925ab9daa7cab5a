//! Errors that end a probe run.

use crate::SocketAddress;

/// A result with the [`ProbeError`] error.
pub type Result<T> = core::result::Result<T, ProbeError>;

/// Failures that end a probe run.
#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// The configuration cannot describe a meaningful run.
    #[error("invalid probe configuration: {0}")]
    InvalidConfig(&'static str),

    /// The connection to the target could not be established.
    #[error("failed to connect to {address}")]
    Connect {
        /// The target that was dialed.
        address: SocketAddress,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing a payload to the open connection failed.
    #[error("failed to write payload {attempt} after {completed} successful writes")]
    Write {
        /// 1-based index of the failing write.
        attempt: usize,
        /// Number of payloads fully written before the failure.
        completed: usize,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// Number of payloads that reached the connection before the run was aborted.
    pub fn writes_completed(&self) -> usize {
        match self {
            Self::InvalidConfig(_) | Self::Connect { .. } => 0,
            Self::Write { completed, .. } => *completed,
        }
    }
}
