pub mod announce;
pub mod announcer;

pub use announce::{announce_addrs, announce_addrs_to, format_addrs};
pub use announcer::AddrAnnouncer;
