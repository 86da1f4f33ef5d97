//! Loopback and private-range rules.
//!
//! The checks work on raw network-order bytes so they read the same way
//! the address blocks are written in the RFCs.
//!
//! | Block              | Rule                                        |
//! |--------------------|---------------------------------------------|
//! | `127.0.0.0/8`      | `b[0] == 127` (loopback)                    |
//! | `::1`              | all zero but `b[15] == 1` (loopback)        |
//! | `10.0.0.0/8`       | `b[0] == 10`                                |
//! | `172.16.0.0/12`    | `b[0] == 172 && 16 <= b[1] <= 31`           |
//! | `192.168.0.0/16`   | `b[0] == 192 && b[1] == 168`                |
//! | `fd00::/8`         | `b[0] == 0xFD` (unique local)               |
//! | `fe80::/10`        | `b[0] == 0xFE && b[1] & 0xC0 == 0x80`       |
//! | `fec0::/10`        | `b[0] == 0xFE && b[1] & 0xC0 == 0xC0`       |

use serde::Serialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// A named private block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrivateRange {
    /// `10.0.0.0/8`
    Rfc1918_10,
    /// `172.16.0.0/12`
    Rfc1918_172_16,
    /// `192.168.0.0/16`
    Rfc1918_192_168,
    /// `fd00::/8`
    UniqueLocal,
    /// `fe80::/10`
    LinkLocal,
    /// `fec0::/10`, deprecated by RFC 3879 but still never global.
    SiteLocal,
}

impl PrivateRange {
    pub fn cidr(self) -> &'static str {
        match self {
            PrivateRange::Rfc1918_10 => "10.0.0.0/8",
            PrivateRange::Rfc1918_172_16 => "172.16.0.0/12",
            PrivateRange::Rfc1918_192_168 => "192.168.0.0/16",
            PrivateRange::UniqueLocal => "fd00::/8",
            PrivateRange::LinkLocal => "fe80::/10",
            PrivateRange::SiteLocal => "fec0::/10",
        }
    }
}

impl fmt::Display for PrivateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cidr())
    }
}

/// Loopback for the address's own family: `127.0.0.0/8` or `::1`.
///
/// IPv4-mapped forms such as `::ffff:127.0.0.1` are IPv6 addresses and are
/// not loopback here.
pub fn is_loopback(addr: IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => v4.octets()[0] == 127,
        IpAddr::V6(v6) => v6 == Ipv6Addr::LOCALHOST,
    }
}

/// Returns the private block containing `addr`, if any.
pub fn private_range(addr: IpAddr) -> Option<PrivateRange> {
    match addr {
        IpAddr::V4(v4) => private_range_v4(v4),
        IpAddr::V6(v6) => private_range_v6(v6),
    }
}

fn private_range_v4(addr: Ipv4Addr) -> Option<PrivateRange> {
    match addr.octets() {
        [10, ..] => Some(PrivateRange::Rfc1918_10),
        [172, b, ..] if (16..=31).contains(&b) => Some(PrivateRange::Rfc1918_172_16),
        [192, 168, ..] => Some(PrivateRange::Rfc1918_192_168),
        _ => None,
    }
}

fn private_range_v6(addr: Ipv6Addr) -> Option<PrivateRange> {
    let b = addr.octets();
    match (b[0], b[1] & 0xC0) {
        (0xFD, _) => Some(PrivateRange::UniqueLocal),
        (0xFE, 0x80) => Some(PrivateRange::LinkLocal),
        (0xFE, 0xC0) => Some(PrivateRange::SiteLocal),
        _ => None,
    }
}

pub fn is_in_private_range(addr: IpAddr) -> bool {
    private_range(addr).is_some()
}

/// Loopback or inside a private block.
pub fn is_private_addr(addr: IpAddr) -> bool {
    let private = is_loopback(addr) || is_in_private_range(addr);
    tracing::trace!(%addr, private, "classified address");
    private
}
