//! The identifying message written on every iteration.

use std::fmt::{self, Display, Formatter};

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "TESTING";

/// A text payload made of a fixed prefix and a per-run tag.
///
/// The tag is the process id by default so concurrent probes can be told apart on the listener side,
/// but any value can be injected to get deterministic wire output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    prefix: String,
    tag: u32,
}

impl Payload {
    /// Creates a payload rendering as `"{prefix} {tag}"`.
    pub fn new(prefix: impl Into<String>, tag: u32) -> Self {
        Self {
            prefix: prefix.into(),
            tag,
        }
    }

    /// Creates a payload tagged with the current process id.
    pub fn for_current_process(prefix: impl Into<String>) -> Self {
        Self::new(prefix, std::process::id())
    }

    /// Returns the run tag.
    pub fn tag(&self) -> u32 {
        self.tag
    }

    /// Renders the payload into the exact bytes sent on the wire.
    ///
    /// No terminator or length prefix is added.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.tag)
    }
}
