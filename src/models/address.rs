//! IP address literals, IPv4 and IPv6.

use super::{MAX_LENGTH_V4, MAX_LENGTH_V6};
use crate::error::ParseError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Address family of an [`Address`] or [`super::NetworkPrefix`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Family of a std address.
    pub fn of(ip: &IpAddr) -> Family {
        match ip {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Width of an address in this family, in bits.
    pub fn bits(self) -> u8 {
        match self {
            Family::V4 => MAX_LENGTH_V4,
            Family::V6 => MAX_LENGTH_V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// A parsed IP address, with the zone of a scoped IPv6 literal if one was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    ip: IpAddr,
    zone: Option<String>,
}

impl Address {
    pub fn new(ip: IpAddr) -> Address {
        Address { ip, zone: None }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn family(&self) -> Family {
        Family::of(&self.ip)
    }

    /// Zone suffix of `fe80::1%eth0` style literals.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Parse a bare IPv4 or IPv6 literal, e.g. `192.0.2.1`, `2001:db8::1`, `fe80::1%eth0`.
    fn from_str(s: &str) -> Result<Address, ParseError> {
        let invalid = || ParseError::InvalidAddress {
            addr: s.to_string(),
        };
        match s.split_once('%') {
            None => {
                let ip = IpAddr::from_str(s).map_err(|_| invalid())?;
                Ok(Address::new(ip))
            }
            Some((literal, zone)) => {
                let ip = IpAddr::from_str(literal).map_err(|_| invalid())?;
                if ip.is_ipv4() {
                    return Err(ParseError::ZoneOnIpv4 {
                        addr: s.to_string(),
                    });
                }
                if zone.is_empty() {
                    return Err(ParseError::EmptyZone {
                        addr: s.to_string(),
                    });
                }
                Ok(Address {
                    ip,
                    zone: Some(zone.to_string()),
                })
            }
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Address {
        Address::new(ip)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}%{}", self.ip, zone),
            None => write!(f, "{}", self.ip),
        }
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(de::Error::custom)
    }
}
