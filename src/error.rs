//! Error types.
//!
//! [`ParseError`] covers every way a CIDR or address argument can be rejected.
//! [`ConfigError`] covers bad environment settings.

use thiserror::Error;

/// A CIDR or IP address string that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid CIDR {input:?}: no '/'")]
    MissingSeparator { input: String },

    #[error("invalid IP address {addr:?}")]
    InvalidAddress { addr: String },

    #[error("invalid CIDR {input:?}: IPv6 zones cannot be present in a prefix")]
    ZoneInPrefix { input: String },

    #[error("invalid CIDR {input:?}: bad bits after slash: {bits:?}")]
    InvalidLength { input: String, bits: String },

    #[error("invalid CIDR {input:?}: prefix length {len} too large for {family}")]
    LengthOutOfRange {
        input: String,
        len: u32,
        family: crate::models::Family,
    },

    #[error("invalid IP address {addr:?}: zone must be a non-empty string")]
    EmptyZone { addr: String },

    #[error("invalid IP address {addr:?}: IPv4 addresses cannot have a zone")]
    ZoneOnIpv4 { addr: String },
}

/// A setting read from the environment that could not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: unknown log level {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}
