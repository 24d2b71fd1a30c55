use std::io::{self, Write};

use anyhow::Context;
use herald_common::network::ports;

pub fn ports() -> anyhow::Result<()> {
    io::stdout()
        .lock()
        .write_all(port_table(&ports::well_known_ports()).as_bytes())
        .context("failed to write port table to stdout")
}

/// One `port  protocol` line per entry, ports right-aligned.
fn port_table(entries: &[(u16, &str)]) -> String {
    entries
        .iter()
        .map(|(port, protocol)| format!("{port:>5}  {protocol}\n"))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_table_alignment() {
        assert_eq!(
            port_table(&[(22, "ssh"), (8080, "http")]),
            "   22  ssh\n 8080  http\n"
        );
        assert_eq!(port_table(&[]), "");
    }

    #[test]
    fn test_port_table_lists_every_entry() {
        let entries = ports::well_known_ports();
        let table = port_table(&entries);
        assert_eq!(table.lines().count(), entries.len());
        assert!(table.starts_with("   20  tcp\n"));
        assert!(table.contains("  443  https\n"));
    }
}
