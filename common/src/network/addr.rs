//! # Address Records
//!
//! Describes one endpoint a process is listening on.
//!
//! Records usually come straight from a listening socket (see the `From<SocketAddr>`
//! impl), but they can also be parsed from text:
//! * `host:port` or `host` (e.g., `example.com:8080`).
//! * `scheme://host:port` (e.g., `https://example.com:8443`).
//! * Bracketed IPv6 literals (e.g., `[::1]:8080`) or bare ones without a port (`::1`).
//! * `unix:<path>` for Unix domain sockets, which have no hostname.

use std::net::{Ipv6Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ParseAddrError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Transport {
    #[default]
    Tcp,
    Unix,
}

/// A single network endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AddressRecord {
    /// Absent for transports that have no host, such as Unix sockets.
    pub hostname: Option<String>,
    pub port: Option<u16>,
    /// Application-layer label such as `http` or `ssh`.
    pub protocol: Option<String>,
    pub transport: Transport,
}

impl AddressRecord {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: Some(hostname.into()),
            port: Some(port),
            protocol: None,
            transport: Transport::Tcp,
        }
    }

    pub fn unix() -> Self {
        Self {
            transport: Transport::Unix,
            ..Self::default()
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// An empty hostname is treated the same as a missing one.
    pub fn has_hostname(&self) -> bool {
        self.hostname.as_deref().is_some_and(|h| !h.is_empty())
    }
}

impl From<SocketAddr> for AddressRecord {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

#[cfg(unix)]
impl From<&std::os::unix::net::SocketAddr> for AddressRecord {
    fn from(_addr: &std::os::unix::net::SocketAddr) -> Self {
        Self::unix()
    }
}

#[cfg(unix)]
impl From<std::os::unix::net::SocketAddr> for AddressRecord {
    fn from(addr: std::os::unix::net::SocketAddr) -> Self {
        Self::from(&addr)
    }
}

impl FromStr for AddressRecord {
    type Err = ParseAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseAddrError::Empty);
        }

        if let Some(path) = s.strip_prefix("unix:") {
            if path.is_empty() {
                return Err(ParseAddrError::EmptyUnixPath);
            }
            return Ok(Self::unix());
        }

        let (protocol, rest) = match s.split_once("://") {
            Some(("", _)) => return Err(ParseAddrError::EmptyScheme),
            Some((scheme, rest)) => (Some(scheme), rest),
            None => (None, s),
        };

        let authority: &str = rest.trim_end_matches('/');
        if let Some(idx) = authority.find('/') {
            return Err(ParseAddrError::UnexpectedPath(authority[idx..].to_string()));
        }

        let (hostname, port) = split_host_port(authority)?;
        if hostname.is_empty() {
            return Err(ParseAddrError::EmptyHost);
        }

        Ok(Self {
            hostname: Some(hostname.to_string()),
            port,
            protocol: protocol.map(str::to_string),
            transport: Transport::Tcp,
        })
    }
}

/// Splits `host[:port]`, keeping IPv6 literals intact.
fn split_host_port(s: &str) -> Result<(&str, Option<u16>), ParseAddrError> {
    if let Some(bracketed) = s.strip_prefix('[') {
        let (host, tail) = bracketed
            .split_once(']')
            .ok_or(ParseAddrError::UnclosedBracket)?;
        if tail.is_empty() {
            return Ok((host, None));
        }
        let port = tail
            .strip_prefix(':')
            .ok_or_else(|| ParseAddrError::InvalidPort(tail.to_string()))?;
        return Ok((host, Some(parse_port(port)?)));
    }

    if s.parse::<Ipv6Addr>().is_ok() {
        return Ok((s, None));
    }

    match s.rsplit_once(':') {
        Some((host, port)) => Ok((host, Some(parse_port(port)?))),
        None => Ok((s, None)),
    }
}

fn parse_port(s: &str) -> Result<u16, ParseAddrError> {
    s.parse::<u16>()
        .map_err(|_| ParseAddrError::InvalidPort(s.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
