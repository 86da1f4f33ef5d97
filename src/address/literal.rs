//! IP literal parsing.
//!
//! Accepts dotted-decimal IPv4 and colon-hex IPv6, the latter optionally
//! wrapped in brackets (`[::1]`) and optionally carrying a zone suffix
//! (`fe80::1%eth0`). The zone is validated for shape and then dropped;
//! only the address bytes take part in classification.

use crate::base::neterror::NetError;
use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// IP version of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::Ipv4,
            IpAddr::V6(_) => AddressFamily::Ipv6,
        }
    }

    /// Raw address length in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            AddressFamily::Ipv4 => 4,
            AddressFamily::Ipv6 => 16,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("IPv4"),
            AddressFamily::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// A successfully parsed IP literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IpLiteral {
    addr: IpAddr,
    family: AddressFamily,
}

impl IpLiteral {
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn address_family(&self) -> AddressFamily {
        self.family
    }

    /// Network-order address bytes (4 for IPv4, 16 for IPv6).
    pub fn bytes(&self) -> Vec<u8> {
        match self.addr {
            IpAddr::V4(v4) => v4.octets().to_vec(),
            IpAddr::V6(v6) => v6.octets().to_vec(),
        }
    }
}

impl From<IpAddr> for IpLiteral {
    fn from(addr: IpAddr) -> Self {
        Self {
            addr,
            family: AddressFamily::of(&addr),
        }
    }
}

impl fmt::Display for IpLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

/// Parses `input` as an IP literal.
///
/// Never panics. Empty input yields `NetError::EmptyHost`; anything else
/// that is not an IP literal, hostnames included, yields
/// `NetError::AddressInvalidFor`.
pub fn parse_literal(input: &str) -> Result<IpLiteral, NetError> {
    if input.is_empty() {
        return Err(NetError::EmptyHost);
    }

    if let Ok(v4) = input.parse::<Ipv4Addr>() {
        return Ok(IpLiteral::from(IpAddr::V4(v4)));
    }

    let unbracketed = match input.strip_prefix('[') {
        Some(rest) => rest
            .strip_suffix(']')
            .ok_or_else(|| NetError::invalid_literal(input))?,
        None => input,
    };

    let address = match unbracketed.split_once('%') {
        Some((address, zone)) if is_valid_zone(zone) => address,
        Some(_) => return Err(NetError::invalid_literal(input)),
        None => unbracketed,
    };

    address
        .parse::<Ipv6Addr>()
        .map(|v6| IpLiteral::from(IpAddr::V6(v6)))
        .map_err(|_| NetError::invalid_literal(input))
}

/// Zone identifiers are interface names or indices.
fn is_valid_zone(zone: &str) -> bool {
    !zone.is_empty()
        && zone
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}
