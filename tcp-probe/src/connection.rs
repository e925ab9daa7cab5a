//! Blocking TCP connection owned by a probe run.

use std::io::{Result, Write};
use std::net::{Shutdown, TcpStream};

use crate::SocketAddress;

/// An exclusively owned, write-only view of a TCP stream.
///
/// The stream is shut down when the connection is closed or dropped, whichever comes first.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
}

impl SocketAddress {
    /// Connects to this address using a blocking socket.
    ///
    /// Every resolved address is tried in turn, the first successful one wins.
    pub fn connect_blocking(&self) -> Result<Connection> {
        let stream = TcpStream::connect(self)?;
        Ok(Connection { stream })
    }
}

impl Connection {
    /// Returns the underlying stream.
    pub fn stream(&self) -> &TcpStream {
        &self.stream
    }

    /// Shuts the connection down in both directions and releases the socket.
    pub fn close(self) {
        drop(self);
    }
}

impl Write for Connection {
    fn write(&mut self, buffer: &[u8]) -> Result<usize> {
        self.stream.write(buffer)
    }

    fn flush(&mut self) -> Result<()> {
        self.stream.flush()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // Any error isn't actionable here.
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}
