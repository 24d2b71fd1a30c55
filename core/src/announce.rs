//! # Address Announcement
//!
//! Turns a list of listen addresses into a short, human-readable block:
//!
//! ```text
//! Listening on:
//! - http://localhost:8080
//! - https://example.com:8443
//! ```
//!
//! Addresses without a hostname (Unix sockets) are left out. The protocol shown in
//! front of each address is picked from the record itself, then the config's default,
//! then the well-known-port table.

use std::io::{self, Write};

use herald_common::config::AnnounceConfig;
use herald_common::network::addr::AddressRecord;
use herald_common::network::ports;
use tracing::debug;

const BIND_ALL_ADDR: &str = "0.0.0.0";
const BIND_ALL_DISPLAY: &str = "localhost";

/// Builds the announcement without printing it. There is no trailing newline.
pub fn format_addrs(addrs: &[AddressRecord], config: &AnnounceConfig) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(addrs.len() + 1);
    lines.push(config.title_text.clone());

    for addr in addrs {
        match format_line(addr, config) {
            Some(line) => lines.push(line),
            None => debug!(transport = ?addr.transport, "skipping address without hostname"),
        }
    }

    lines.join("\n")
}

/// Writes the announcement to `writer` in a single write.
pub fn announce_addrs_to<W: Write>(
    writer: &mut W,
    addrs: &[AddressRecord],
    config: &AnnounceConfig,
) -> io::Result<()> {
    let mut block: String = format_addrs(addrs, config);
    block.push('\n');
    writer.write_all(block.as_bytes())?;
    writer.flush()
}

/// Prints the announcement to standard output.
pub fn announce_addrs(addrs: &[AddressRecord], config: &AnnounceConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    announce_addrs_to(&mut handle, addrs, config)
}

fn format_line(addr: &AddressRecord, config: &AnnounceConfig) -> Option<String> {
    if !addr.has_hostname() {
        return None;
    }
    let hostname: &str = addr.hostname.as_deref()?;

    let prefix: String = resolve_protocol(addr, config)
        .map(to_scheme_prefix)
        .unwrap_or_default();
    let host: String = display_hostname(hostname, config.bracket_ipv6);

    Some(match addr.port {
        Some(port) => format!("- {prefix}{host}:{port}"),
        None => format!("- {prefix}{host}"),
    })
}

/// Record protocol, then the configured default, then the well-known port.
pub fn resolve_protocol<'a>(addr: &'a AddressRecord, config: &'a AnnounceConfig) -> Option<&'a str> {
    non_empty(addr.protocol.as_deref())
        .or_else(|| non_empty(config.default_protocol.as_deref()))
        .or_else(|| addr.port.and_then(ports::protocol_for_port))
}

/// Normalizes `https`, `https:` and `https://` to `https://`.
pub fn to_scheme_prefix(label: &str) -> String {
    if label.is_empty() || label.ends_with("://") {
        label.to_string()
    } else if label.ends_with(':') {
        format!("{label}//")
    } else {
        format!("{label}://")
    }
}

fn display_hostname(hostname: &str, bracket_ipv6: bool) -> String {
    if hostname == BIND_ALL_ADDR {
        return BIND_ALL_DISPLAY.to_string();
    }
    if bracket_ipv6 && hostname.contains(':') && !hostname.starts_with('[') {
        return format!("[{hostname}]");
    }
    hostname.to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
