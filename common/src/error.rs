use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAddrError {
    #[error("address is empty")]
    Empty,
    #[error("protocol before '://' is empty")]
    EmptyScheme,
    #[error("address has no hostname")]
    EmptyHost,
    #[error("unix socket address has no path")]
    EmptyUnixPath,
    #[error("missing ']' after IPv6 address")]
    UnclosedBracket,
    #[error("unexpected path '{0}' after host")]
    UnexpectedPath(String),
    #[error("invalid port '{0}'")]
    InvalidPort(String),
}
