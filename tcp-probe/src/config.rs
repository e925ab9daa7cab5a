//! Probe parameters and their defaults.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

use crate::payload::DEFAULT_PREFIX;
use crate::{Payload, ProbeError, SocketAddress};

/// The listener the probe targets by default.
pub const DEFAULT_TARGET: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8888));

/// How many times the payload is written by default.
pub const DEFAULT_REPEAT: usize = 3;

/// Pause between two consecutive writes by default.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// What to do when writing to an open connection fails.
///
/// Connect failures are always fatal, there is nothing to write to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failed write and report it.
    #[default]
    FailFast,

    /// Log failed writes and keep going until every iteration ran.
    BestEffort,
}

/// Parameters of a single probe run.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Where to connect.
    pub target: SocketAddress,
    /// What to send on every iteration.
    pub payload: Payload,
    /// How many times the payload is written.
    pub repeat: usize,
    /// Pause between writes, not applied after the last one.
    pub interval: Duration,
    /// Reaction to write failures.
    pub failure_policy: FailurePolicy,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            target: SocketAddress::from(DEFAULT_TARGET),
            payload: Payload::for_current_process(DEFAULT_PREFIX),
            repeat: DEFAULT_REPEAT,
            interval: DEFAULT_INTERVAL,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl ProbeConfig {
    /// Sets the target address.
    pub fn with_target(mut self, target: impl Into<SocketAddress>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the payload.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the number of writes.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the pause between writes.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the write failure policy.
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ProbeError> {
        if self.repeat == 0 {
            return Err(ProbeError::InvalidConfig("repeat count must be at least 1"));
        }
        Ok(())
    }
}
