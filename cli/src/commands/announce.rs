use anyhow::Context;
use herald_core::AddrAnnouncer;
use tracing::info;

use super::AnnounceArgs;

const TLS_PROTOCOL: &str = "https";

pub fn announce(args: AnnounceArgs) -> anyhow::Result<()> {
    let mut announcer = AddrAnnouncer::new(args.to_config());

    announcer.add_addrs(args.addrs, args.protocol.as_deref());
    if !args.tls.is_empty() {
        announcer.add_addrs(args.tls, Some(TLS_PROTOCOL));
    }

    info!("announcing {} addresses", announcer.len());
    announcer
        .announce()
        .context("failed to write addresses to stdout")
}
