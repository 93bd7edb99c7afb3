//! CIDR network prefixes and membership testing.
//!
//! Provides [`NetworkPrefix`] for representing an IPv4 or IPv6 network in CIDR
//! notation, along with the mask helpers used to compare address bits.

use super::{Address, Family};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert a prefix length to a netmask, right-aligned in a u128.
///
/// Returns `None` if `len` is wider than the family.
///
/// # Examples
/// ```
/// use cidr_contains::models::{get_cidr_mask, Family};
/// assert_eq!(get_cidr_mask(24, Family::V4), Some(0xFFFFFF00));
/// ```
pub fn get_cidr_mask(len: u8, family: Family) -> Option<u128> {
    let width = family.bits();
    if len > width {
        return None;
    }
    let right_len = u32::from(width - len);
    let all_bits = u128::MAX >> (128 - u32::from(width));

    let mask = all_bits
        .checked_shr(right_len)
        .unwrap_or(0)
        .checked_shl(right_len)
        .unwrap_or(0);
    Some(mask)
}

/// Numeric value of an address, right-aligned in a u128.
pub fn addr_bits(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(ip: IpAddr, len: u8) -> Option<IpAddr> {
    let mask = get_cidr_mask(len, Family::of(&ip))?;
    let bits = addr_bits(ip) & mask;
    Some(match ip {
        IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::from(bits as u32)),
        IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::from(bits)),
    })
}

/// Parse the text after the slash: decimal digits only, no sign and no
/// leading zero unless the whole length is `0`.
fn parse_length(bits: &str) -> Option<u32> {
    if bits.is_empty() || !bits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if bits.len() > 1 && bits.starts_with('0') {
        return None;
    }
    bits.parse().ok()
}

/// An IP network in CIDR notation.
///
/// The base address is kept as written; host bits are ignored by
/// [`NetworkPrefix::contains`] and cleared by [`NetworkPrefix::network`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NetworkPrefix {
    addr: IpAddr,
    len: u8,
}

impl NetworkPrefix {
    /// Create a prefix from a base address and a length valid for its family.
    pub fn new(addr: IpAddr, len: u8) -> Result<NetworkPrefix, ParseError> {
        let family = Family::of(&addr);
        if len > family.bits() {
            return Err(ParseError::LengthOutOfRange {
                input: format!("{addr}/{len}"),
                len: u32::from(len),
                family,
            });
        }
        Ok(NetworkPrefix { addr, len })
    }

    /// Base address as written.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Prefix length in bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn family(&self) -> Family {
        Family::of(&self.addr)
    }

    /// The base address with all host bits cleared.
    pub fn network(&self) -> IpAddr {
        cut_addr(self.addr, self.len).unwrap_or(self.addr)
    }

    /// Report whether `address` falls inside this network.
    ///
    /// Addresses of the other family are never contained, and neither are
    /// zoned IPv6 addresses.
    pub fn contains(&self, address: &Address) -> bool {
        if address.zone().is_some() {
            return false;
        }
        let family = self.family();
        if family != address.family() {
            return false;
        }
        match get_cidr_mask(self.len, family) {
            Some(mask) => (addr_bits(self.addr) ^ addr_bits(address.ip())) & mask == 0,
            None => false,
        }
    }
}

impl FromStr for NetworkPrefix {
    type Err = ParseError;

    /// Parse `address/length`, e.g. `192.0.2.0/24` or `2001:db8::/32`.
    fn from_str(s: &str) -> Result<NetworkPrefix, ParseError> {
        let (addr_part, len_part) = s.rsplit_once('/').ok_or_else(|| {
            ParseError::MissingSeparator {
                input: s.to_string(),
            }
        })?;

        let address = Address::from_str(addr_part)?;
        if address.zone().is_some() {
            return Err(ParseError::ZoneInPrefix {
                input: s.to_string(),
            });
        }

        let len = parse_length(len_part).ok_or_else(|| ParseError::InvalidLength {
            input: s.to_string(),
            bits: len_part.to_string(),
        })?;
        let family = address.family();
        if len > u32::from(family.bits()) {
            return Err(ParseError::LengthOutOfRange {
                input: s.to_string(),
                len,
                family,
            });
        }

        Ok(NetworkPrefix {
            addr: address.ip(),
            len: len as u8,
        })
    }
}

impl fmt::Display for NetworkPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

impl Serialize for NetworkPrefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.len);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for NetworkPrefix {
    fn deserialize<D>(deserializer: D) -> Result<NetworkPrefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkPrefix::from_str(&s).map_err(de::Error::custom)
    }
}
