use crate::domain::ports::NonBlockingSource;
use crate::utils::error::{DemoError, Result};
use mio::net::TcpStream;
use std::io::{self, Read};
use std::net::{SocketAddr, ToSocketAddrs};

/// A TCP connection opened in non-blocking mode.
///
/// The name lookup happens in [`NonBlockingSource::prepare`], the first time
/// the socket is needed. `mio` then issues the connect and returns at once;
/// the handshake finishes (or not) in the background. Until it does, the
/// socket reports "not connected", which this adapter surfaces as "would
/// block" so callers see a single not-ready signal.
#[derive(Debug)]
pub struct TcpProbe {
    target: String,
    host: String,
    port: u16,
    addr: Option<SocketAddr>,
    stream: Option<TcpStream>,
}

fn not_ready_as_would_block<T>(result: io::Result<T>) -> io::Result<T> {
    result.map_err(|e| match e.kind() {
        io::ErrorKind::NotConnected => io::ErrorKind::WouldBlock.into(),
        _ => e,
    })
}

impl TcpProbe {
    /// Does not touch the network; see [`NonBlockingSource::prepare`].
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let host = host.into();
        Self {
            target: format!("{}:{}", host, port),
            host,
            port,
            addr: None,
            stream: None,
        }
    }

    /// Resolves `host:port` right away.
    pub fn resolve(host: &str, port: u16) -> Result<Self> {
        let mut probe = Self::new(host, port);
        probe.prepare()?;
        Ok(probe)
    }

    pub fn from_addr(addr: SocketAddr) -> Self {
        Self {
            target: addr.to_string(),
            host: addr.ip().to_string(),
            port: addr.port(),
            addr: Some(addr),
            stream: None,
        }
    }

    pub fn addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    fn lookup(&self) -> Result<SocketAddr> {
        let resolve_error = |source| DemoError::ResolveError {
            host: self.host.clone(),
            port: self.port,
            source,
        };

        let addr = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(resolve_error)?
            .next()
            .ok_or_else(|| {
                resolve_error(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no addresses returned",
                ))
            })?;
        tracing::debug!("Resolved {}:{} to {}", self.host, self.port, addr);
        Ok(addr)
    }
}

impl NonBlockingSource for TcpProbe {
    fn target(&self) -> String {
        self.target.clone()
    }

    fn prepare(&mut self) -> Result<()> {
        if self.addr.is_none() {
            self.addr = Some(self.lookup()?);
        }
        Ok(())
    }

    fn try_connect(&mut self) -> io::Result<()> {
        let stream = match self.stream.take() {
            Some(stream) => stream,
            None => {
                let addr = self.addr.ok_or_else(|| {
                    io::Error::new(io::ErrorKind::NotConnected, "target was never resolved")
                })?;
                TcpStream::connect(addr)?
            }
        };
        let state = stream.peer_addr().map(|_| ());
        self.stream = Some(stream);
        not_ready_as_would_block(state)
    }

    fn try_read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "connect was never attempted"))?;
        not_ready_as_would_block(stream.read(buf))
    }
}
