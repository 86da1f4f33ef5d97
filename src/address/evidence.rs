//! Classification rules shared by the async classifier and the blocking
//! facade.
//!
//! Both front ends gather the same two pieces of evidence (the literal
//! parse and the forward resolution) and hand them to these functions, so
//! the rules live in one place regardless of how the resolver is driven.

use super::literal::{parse_literal, AddressFamily};
use super::range::{is_loopback, is_private_addr, private_range};
use crate::base::neterror::NetError;
use std::net::IpAddr;

/// True iff `host` parses as an IPv4 or IPv6 literal.
pub fn is_valid_ip(host: &str) -> bool {
    parse_literal(host).is_ok()
}

/// True iff `host` parses as an IPv4 literal.
pub fn is_valid_ipv4(host: &str) -> bool {
    literal_family(host) == Some(AddressFamily::Ipv4)
}

/// True iff `host` parses as an IPv6 literal.
pub fn is_valid_ipv6(host: &str) -> bool {
    literal_family(host) == Some(AddressFamily::Ipv6)
}

fn literal_family(host: &str) -> Option<AddressFamily> {
    parse_literal(host).ok().map(|lit| lit.address_family())
}

/// Literal branch of the privacy check.
///
/// False when `host` is not a literal; parse failures never propagate.
pub(crate) fn literal_is_private(host: &str) -> bool {
    let literal = match parse_literal(host) {
        Ok(literal) => literal,
        Err(e) => {
            tracing::trace!(host = %host, error = %e, "not an IP literal");
            return false;
        }
    };

    let addr = literal.addr();
    if is_loopback(addr) {
        tracing::trace!(host = %host, "literal is loopback");
        return true;
    }
    match private_range(addr) {
        Some(range) => {
            tracing::trace!(host = %host, %range, "literal is in a private range");
            true
        }
        None => false,
    }
}

/// Resolution branch of the privacy check: any loopback or private
/// address among the resolved set makes the host private.
pub(crate) fn resolved_is_private(host: &str, resolved: &[IpAddr]) -> bool {
    let hit = resolved.iter().copied().find(|ip| is_private_addr(*ip));
    if let Some(ip) = hit {
        tracing::trace!(host = %host, %ip, "resolved to a private address");
    }
    hit.is_some()
}

/// Swallows a resolver failure, keeping it only in the logs.
pub(crate) fn resolution_outcome(
    host: &str,
    result: Result<Vec<IpAddr>, NetError>,
) -> Option<Vec<IpAddr>> {
    match result {
        Ok(ips) => Some(ips),
        Err(e) => {
            tracing::debug!(host = %host, error = %e, "host did not resolve");
            None
        }
    }
}
