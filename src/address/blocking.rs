//! Synchronous classification API.
//!
//! Free functions over the system resolver. Each call parses the host and,
//! where needed, performs one blocking `getaddrinfo` lookup on the calling
//! thread. Do not call the resolving functions from inside an async
//! runtime; use [`HostClassifier`](super::classifier::HostClassifier)
//! there instead.
//!
//! ```rust,ignore
//! assert!(hostclass::is_private("10.0.0.5"));
//! assert!(hostclass::is_valid_ipv6("::1"));
//! assert!(!hostclass::is_host_valid(""));
//! ```

use super::evidence::{self, resolution_outcome};
use super::literal::parse_literal;
use super::report::HostReport;
use crate::dns::{GaiResolver, Name};
use std::net::IpAddr;

pub use super::evidence::{is_valid_ip, is_valid_ipv4, is_valid_ipv6};

fn resolve(host: &str) -> Option<Vec<IpAddr>> {
    if host.is_empty() {
        return None;
    }
    let result = GaiResolver::new()
        .lookup_blocking(&Name::new(host))
        .map(|addrs| addrs.into_iter().map(|addr| addr.ip()).collect());
    resolution_outcome(host, result)
}

/// True iff the system resolver resolves `host`.
pub fn is_valid_fqdn(host: &str) -> bool {
    resolve(host).is_some()
}

/// True iff `host` is an IP literal or a resolvable name.
pub fn is_host_valid(host: &str) -> bool {
    !host.is_empty() && (is_valid_ip(host) || is_valid_fqdn(host))
}

/// True iff `host` is, or resolves to, a loopback or private address.
pub fn is_private(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    if evidence::literal_is_private(host) {
        return true;
    }
    resolve(host).is_some_and(|resolved| evidence::resolved_is_private(host, &resolved))
}

/// Computes every classification with a single parse and lookup.
pub fn classify(host: &str) -> HostReport {
    if host.is_empty() {
        return HostReport::empty(host);
    }
    HostReport::from_evidence(host, parse_literal(host).ok(), resolve(host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_host() {
        assert!(!is_host_valid(""));
        assert!(!is_valid_fqdn(""));
        assert!(!is_private(""));
        assert_eq!(classify(""), HostReport::empty(""));
    }

    #[test]
    fn test_private_literals_without_dns() {
        // getaddrinfo answers numeric hosts locally.
        assert!(is_private("127.0.0.1"));
        assert!(is_private("172.16.0.1"));
        assert!(is_private("fd12:3456::1"));
        assert!(!is_private("172.15.0.1"));
        assert!(!is_private("2001:db8::1"));
    }

    #[test]
    fn test_classify_literal() {
        let report = classify("192.168.1.1");
        assert!(report.is_valid_ipv4);
        assert!(report.is_host_valid);
        assert!(report.is_private);
        assert_eq!(report.literal.map(|lit| lit.to_string()).as_deref(), Some("192.168.1.1"));
    }
}
