pub mod announce;
pub mod ports;

use clap::{Args, Parser, Subcommand};
use herald_common::config::{AnnounceConfig, DEFAULT_TITLE};
use herald_common::network::addr::AddressRecord;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Prints the addresses a service is listening on.")]
pub struct CommandLine {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Announce one or more listen addresses
    #[command(alias = "a")]
    Announce(AnnounceArgs),
    /// List the protocols assumed for well-known ports
    #[command(alias = "p")]
    Ports,
}

#[derive(Args)]
pub struct AnnounceArgs {
    /// Addresses such as `0.0.0.0:8080`, `https://example.com:8443` or `unix:/tmp/app.sock`
    #[arg(value_name = "ADDR")]
    pub addrs: Vec<AddressRecord>,

    /// Heading printed above the addresses
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Protocol for addresses that have none and no well-known port
    #[arg(short, long, value_name = "LABEL")]
    pub default_protocol: Option<String>,

    /// Protocol forced onto every positional address
    #[arg(short, long, value_name = "LABEL")]
    pub protocol: Option<String>,

    /// Additional addresses announced as https
    #[arg(long, value_name = "ADDR")]
    pub tls: Vec<AddressRecord>,

    /// Wrap IPv6 hosts in brackets so each line is a valid URL
    #[arg(long)]
    pub bracket_ipv6: bool,
}

impl AnnounceArgs {
    pub fn to_config(&self) -> AnnounceConfig {
        let mut config = AnnounceConfig::default().with_title(self.title.as_str());
        if self.bracket_ipv6 {
            config = config.with_bracketed_ipv6();
        }
        match &self.default_protocol {
            Some(protocol) => config.with_default_protocol(protocol.as_str()),
            None => config,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
