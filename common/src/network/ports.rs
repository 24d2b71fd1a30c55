//! # Well-Known Ports
//!
//! Maps port numbers to the application protocol usually spoken on them.
//! Used as the last fallback when neither the address nor the config names a protocol.

use std::collections::HashMap;
use std::sync::LazyLock;

static WELL_KNOWN_PORTS: LazyLock<HashMap<u16, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (20, "tcp"),
        (21, "ftp"),
        (22, "ssh"),
        (23, "telnet"),
        (25, "smtp"),
        (53, "dns"),
        (80, "http"),
        (110, "pop3"),
        (143, "imap"),
        (443, "https"),
        (465, "smtps"),
        (587, "smtp"),
        (993, "imaps"),
        (995, "pop3s"),
        (8080, "http"),
        (8443, "https"),
    ])
});

pub fn protocol_for_port(port: u16) -> Option<&'static str> {
    WELL_KNOWN_PORTS.get(&port).copied()
}

/// Every entry of the table, ordered by port.
pub fn well_known_ports() -> Vec<(u16, &'static str)> {
    let mut entries: Vec<(u16, &'static str)> =
        WELL_KNOWN_PORTS.iter().map(|(port, name)| (*port, *name)).collect();
    entries.sort_unstable_by_key(|(port, _)| *port);
    entries
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
