//! Domain models for CIDR membership checks.
//!
//! - [`NetworkPrefix`] - IPv4 or IPv6 network in CIDR notation
//! - [`Address`] - IPv4 or IPv6 address, optionally zoned
//! - [`Family`] - address family tag shared by both

mod address;
mod prefix;

// Re-export public types
pub use address::{Address, Family};
pub use prefix::{
    addr_bits, cut_addr, get_cidr_mask, NetworkPrefix, MAX_LENGTH_V4, MAX_LENGTH_V6,
};
