#![cfg(test)]
use herald_common::config::AnnounceConfig;
use herald_common::network::addr::AddressRecord;
use herald_core::{AddrAnnouncer, announce_addrs_to, format_addrs};
use std::net::{Ipv4Addr, SocketAddr, TcpListener};

fn capture(addrs: &[AddressRecord], cfg: &AnnounceConfig) -> anyhow::Result<String> {
    let mut out: Vec<u8> = Vec::new();
    announce_addrs_to(&mut out, addrs, cfg)?;
    Ok(String::from_utf8(out)?)
}

/// Two batches through the announcer print the same block as one formatter call
/// over both batches in registration order.
#[test]
fn announcer_matches_formatter() -> anyhow::Result<()> {
    let first: Vec<AddressRecord> = vec![
        AddressRecord::new("0.0.0.0", 80),
        AddressRecord::unix(),
        AddressRecord::new("example.com", 123),
    ];
    let second: Vec<AddressRecord> = vec![
        AddressRecord::new("example.com", 8443),
        AddressRecord::new("api.example.com", 9000).with_protocol("http"),
    ];

    let mut announcer = AddrAnnouncer::default();
    announcer.add_addrs(first.clone(), None);
    announcer.add_addrs(second.clone(), Some("https"));

    let mut out: Vec<u8> = Vec::new();
    announcer.announce_to(&mut out)?;

    let combined: Vec<AddressRecord> = first
        .into_iter()
        .chain(second.into_iter().map(|r| r.with_protocol("https")))
        .collect();
    assert_eq!(String::from_utf8(out)?, capture(&combined, &AnnounceConfig::default())?);
    assert_eq!(
        format_addrs(announcer.addrs(), announcer.config()),
        "Listening on:\n\
         - http://localhost:80\n\
         - example.com:123\n\
         - https://example.com:8443\n\
         - https://api.example.com:9000"
    );
    Ok(())
}

#[test]
fn line_count_matches_records_with_hostname() -> anyhow::Result<()> {
    let addrs: Vec<AddressRecord> = vec![
        AddressRecord::unix(),
        AddressRecord::new("a.example", 1),
        AddressRecord::unix(),
        AddressRecord::new("b.example", 2),
        AddressRecord::new("c.example", 3),
    ];
    let output: String = capture(&addrs, &AnnounceConfig::default())?;
    let lines: Vec<&str> = output.lines().filter(|l| l.starts_with("- ")).collect();

    assert_eq!(lines.len(), addrs.iter().filter(|a| a.has_hostname()).count());
    assert_eq!(lines, vec!["- a.example:1", "- b.example:2", "- c.example:3"]);
    Ok(())
}

/// Addresses taken from a real bound listener render as a reachable URL.
#[test]
fn announces_bound_listener() -> anyhow::Result<()> {
    let listener: TcpListener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))?;
    let local: SocketAddr = listener.local_addr()?;

    let mut announcer = AddrAnnouncer::new(AnnounceConfig::default().with_default_protocol("tcp"));
    announcer.add_addrs([local], None);

    let mut out: Vec<u8> = Vec::new();
    announcer.announce_to(&mut out)?;
    assert_eq!(
        String::from_utf8(out)?,
        format!("Listening on:\n- tcp://127.0.0.1:{}\n", local.port())
    );
    Ok(())
}

#[test]
fn parsed_addresses_announce() -> anyhow::Result<()> {
    let addrs: Vec<AddressRecord> = ["0.0.0.0:22", "https://[::1]:8443", "unix:/run/app.sock", "example.com"]
        .iter()
        .map(|s| s.parse::<AddressRecord>())
        .collect::<Result<_, _>>()?;

    assert_eq!(
        format_addrs(&addrs, &AnnounceConfig::default().with_title("Serving:")),
        "Serving:\n- ssh://localhost:22\n- https://::1:8443\n- example.com"
    );
    Ok(())
}

#[test]
fn ipv6_brackets_are_opt_in() -> anyhow::Result<()> {
    let addrs: Vec<AddressRecord> = vec![AddressRecord::new("::1", 8080).with_protocol("http")];

    assert_eq!(
        capture(&addrs, &AnnounceConfig::default())?,
        "Listening on:\n- http://::1:8080\n"
    );
    assert_eq!(
        capture(&addrs, &AnnounceConfig::default().with_bracketed_ipv6())?,
        "Listening on:\n- http://[::1]:8080\n"
    );
    Ok(())
}
