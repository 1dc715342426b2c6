//! CIDR containment arithmetic.
//!
//! A provider feed declares ranges as CIDR strings; this module answers
//! whether a target address falls inside one of them.

use ipnetwork::{IpNetwork, IpNetworkError};
use std::net::IpAddr;

/// Test whether `addr` falls within the CIDR range `cidr`.
///
/// Returns `Ok(false)` when the address families differ; a malformed CIDR
/// string is an error.
pub fn cidr_contains(cidr: &str, addr: IpAddr) -> Result<bool, IpNetworkError> {
    let network: IpNetwork = cidr.trim().parse()?;
    Ok(network.contains(addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_v4_containment() {
        assert!(cidr_contains("8.8.8.0/24", addr("8.8.8.8")).unwrap());
        assert!(cidr_contains("10.0.0.0/8", addr("10.255.1.2")).unwrap());
        assert!(!cidr_contains("8.8.8.0/24", addr("10.0.0.1")).unwrap());
        assert!(!cidr_contains("192.168.1.0/24", addr("192.168.2.1")).unwrap());
    }

    #[test]
    fn test_v4_host_prefix() {
        assert!(cidr_contains("203.0.113.7/32", addr("203.0.113.7")).unwrap());
        assert!(!cidr_contains("203.0.113.7/32", addr("203.0.113.8")).unwrap());
    }

    #[test]
    fn test_v6_containment() {
        assert!(cidr_contains("2001:db8::/32", addr("2001:db8::1")).unwrap());
        assert!(!cidr_contains("2001:db8::/32", addr("2001:db9::1")).unwrap());
    }

    #[test]
    fn test_family_mismatch_is_false() {
        assert!(!cidr_contains("8.8.8.0/24", addr("2001:db8::1")).unwrap());
        assert!(!cidr_contains("2001:db8::/32", addr("8.8.8.8")).unwrap());
    }

    #[test]
    fn test_malformed_cidr() {
        assert!(cidr_contains("not-a-cidr", addr("8.8.8.8")).is_err());
        assert!(cidr_contains("8.8.8.0/99", addr("8.8.8.8")).is_err());
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(cidr_contains(" 8.8.8.0/24 ", addr("8.8.8.8")).unwrap());
    }
}
