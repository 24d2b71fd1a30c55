use std::io::{self, Write};

use herald_common::config::AnnounceConfig;
use herald_common::network::addr::AddressRecord;
use tracing::debug;

use crate::announce;

/// Collects addresses from several listeners so they can be announced together.
///
/// Nothing is ever removed: every `announce` prints everything registered so far.
#[derive(Debug, Clone, Default)]
pub struct AddrAnnouncer {
    config: AnnounceConfig,
    addrs: Vec<AddressRecord>,
}

impl AddrAnnouncer {
    pub fn new(config: AnnounceConfig) -> Self {
        Self {
            config,
            addrs: Vec::new(),
        }
    }

    /// Stores a copy of each address. A `protocol` replaces whatever label the copies had.
    pub fn add_addrs<I>(&mut self, addrs: I, protocol: Option<&str>)
    where
        I: IntoIterator,
        I::Item: Into<AddressRecord>,
    {
        let before: usize = self.addrs.len();
        self.addrs.extend(addrs.into_iter().map(|addr| {
            let record: AddressRecord = addr.into();
            match protocol {
                Some(label) => record.with_protocol(label),
                None => record,
            }
        }));
        debug!(
            added = self.addrs.len() - before,
            total = self.addrs.len(),
            protocol = protocol.unwrap_or_default(),
            "registered addresses"
        );
    }

    pub fn announce(&self) -> io::Result<()> {
        announce::announce_addrs(&self.addrs, &self.config)
    }

    pub fn announce_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        announce::announce_addrs_to(writer, &self.addrs, &self.config)
    }

    pub fn addrs(&self) -> &[AddressRecord] {
        &self.addrs
    }

    pub fn config(&self) -> &AnnounceConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.addrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addrs.is_empty()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
