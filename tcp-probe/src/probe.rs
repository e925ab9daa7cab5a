//! The probe procedure: connect, write the payload a fixed number of times, close.

use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{FailurePolicy, ProbeConfig, ProbeError, Result};

/// Where a [`Probe`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    /// Not run yet.
    Unconnected,
    /// The connection is open and payloads are being written.
    Connected,
    /// The run completed and the connection was closed.
    Closed,
    /// The run was aborted. Any connection that was opened has been closed.
    Failed,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeReport {
    /// Writes that were started.
    pub writes_attempted: usize,
    /// Writes whose whole payload was handed to the connection.
    pub writes_completed: usize,
    /// Bytes of completed writes.
    pub bytes_sent: usize,
    /// Wall-clock time spent in the send loop.
    pub elapsed: Duration,
}

/// A single-shot probe client.
#[derive(Debug)]
pub struct Probe {
    config: ProbeConfig,
    state: ProbeState,
}

impl Probe {
    /// Creates a probe that has not connected yet.
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config,
            state: ProbeState::Unconnected,
        }
    }

    /// Returns the configuration of this probe.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Connects to the target, runs the send loop and closes the connection.
    ///
    /// The connection is closed on every path out of this function.
    #[tracing::instrument(
        skip(self),
        fields(address = %self.config.target, payload = %self.config.payload, repeat = self.config.repeat)
    )]
    pub fn run(&mut self) -> Result<ProbeReport> {
        if let Err(error) = self.config.validate() {
            self.state = ProbeState::Failed;
            return Err(error);
        }

        let mut connection = match self.config.target.connect_blocking() {
            Ok(connection) => connection,
            Err(source) => {
                self.state = ProbeState::Failed;
                return Err(ProbeError::Connect {
                    address: self.config.target.clone(),
                    source,
                });
            }
        };
        self.state = ProbeState::Connected;
        info!(local = ?connection.stream().local_addr().ok(), "connected");

        let result = self.send(&mut connection);
        connection.close();
        debug!("connection closed");

        match result {
            Ok(report) => {
                self.state = ProbeState::Closed;
                info!(
                    written = report.writes_completed,
                    attempted = report.writes_attempted,
                    bytes = report.bytes_sent,
                    elapsed = ?report.elapsed,
                    "probe finished"
                );
                Ok(report)
            }
            Err(error) => {
                self.state = ProbeState::Failed;
                Err(error)
            }
        }
    }

    /// Writes the payload `repeat` times into `sink`, pausing `interval` between writes.
    fn send<W: Write>(&self, sink: &mut W) -> Result<ProbeReport> {
        let bytes = self.config.payload.to_bytes();
        let started = Instant::now();
        let mut report = ProbeReport::default();

        for attempt in 1..=self.config.repeat {
            if attempt > 1 {
                std::thread::sleep(self.config.interval);
            }

            report.writes_attempted += 1;
            match sink.write_all(&bytes) {
                Ok(()) => {
                    report.writes_completed += 1;
                    report.bytes_sent += bytes.len();
                    debug!(attempt, bytes = bytes.len(), "payload written");
                }
                Err(source) => match self.config.failure_policy {
                    FailurePolicy::FailFast => {
                        return Err(ProbeError::Write {
                            attempt,
                            completed: report.writes_completed,
                            source,
                        });
                    }
                    FailurePolicy::BestEffort => {
                        warn!(attempt, error = %source, "write failed, continuing");
                    }
                },
            }
        }

        report.elapsed = started.elapsed();
        Ok(report)
    }
}

/// Runs a probe with `config` to completion.
pub fn run(config: ProbeConfig) -> Result<ProbeReport> {
    Probe::new(config).run()
}
