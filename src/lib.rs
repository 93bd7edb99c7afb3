//! Check whether a CIDR network contains an IP address.
//!
//! ```
//! assert_eq!(cidr_contains::contains("192.0.2.0/24", "192.0.2.1"), Ok(true));
//! assert_eq!(cidr_contains::contains("192.0.2.0/24", "2001:db8::1"), Ok(false));
//! assert!(cidr_contains::contains("192.0.2.0/33", "192.0.2.1").is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod version;

use error::ParseError;
use models::{Address, NetworkPrefix};
use std::str::FromStr;

/// Parse `cidr` and `address` and report whether the network contains the address.
///
/// The CIDR is parsed first, so when both are malformed the CIDR error wins.
/// Addresses of the other family are not contained; that is an answer, not an error.
pub fn contains(cidr: &str, address: &str) -> Result<bool, ParseError> {
    let prefix = NetworkPrefix::from_str(cidr)?;
    log::debug!("cidr={prefix} family={} network={}", prefix.family(), prefix.network());
    let address = Address::from_str(address)?;
    log::debug!("address={address} family={}", address.family());

    let result = prefix.contains(&address);
    log::info!("{prefix} contains {address}: {result}");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_scenarios() {
        assert_eq!(contains("192.0.2.0/24", "192.0.2.1"), Ok(true));
        assert_eq!(contains("192.0.2.0/24", "192.0.3.1"), Ok(false));
        assert_eq!(contains("2001:db8::/32", "2001:db8::1"), Ok(true));
        assert_eq!(contains("192.0.2.0/24", "2001:db8::1"), Ok(false));
        assert!(contains("not-a-cidr", "192.0.2.1").is_err());
        assert!(contains("192.0.2.0/33", "192.0.2.1").is_err());
    }

    #[test]
    fn test_cidr_error_reported_first() {
        assert!(matches!(
            contains("bogus", "also-bogus"),
            Err(ParseError::MissingSeparator { .. })
        ));
        assert!(matches!(
            contains("192.0.2.0/24", "also-bogus"),
            Err(ParseError::InvalidAddress { .. })
        ));
    }
}
