//! Probe target addressing.
//!
//! A host and port that are only resolved when the probe connects.

use std::fmt::{self, Display, Formatter};
use std::net::{SocketAddr, ToSocketAddrs};

/// A [`SocketAddr`]-like whose host is resolved at connect time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketAddress {
    /// An IP address (v4 or v6) in its textual form.
    host: String,

    // `[]` around the host is needed when rendering an IPv6 literal so the port stays unambiguous.
    is_v6: bool,

    port: u16,
}

impl SocketAddress {
    /// Returns the host part, without IPv6 brackets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl From<SocketAddr> for SocketAddress {
    fn from(address: SocketAddr) -> Self {
        Self {
            host: address.ip().to_string(),
            is_v6: address.is_ipv6(),
            port: address.port(),
        }
    }
}

impl ToSocketAddrs for SocketAddress {
    // Can't use `(&str, u16)` here because of the lifetime.
    type Iter = <(String, u16) as ToSocketAddrs>::Iter;

    fn to_socket_addrs(&self) -> std::io::Result<Self::Iter> {
        (self.host.as_str(), self.port).to_socket_addrs()
    }
}

impl Display for SocketAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let SocketAddress { host, is_v6, port } = self;
        if *is_v6 {
            write!(f, "[{host}]:{port}")
        } else {
            write!(f, "{host}:{port}")
        }
    }
}
