//! One-shot classification report.

use super::literal::{AddressFamily, IpLiteral};
use serde::Serialize;
use std::net::IpAddr;

/// Every classification of a single host, computed from one parse and one
/// resolution.
///
/// Each flag has exactly the meaning of the operation of the same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostReport {
    pub host: String,
    pub literal: Option<IpLiteral>,
    /// Addresses from the resolver, in resolver order. Empty when
    /// resolution failed or was skipped.
    pub resolved: Vec<IpAddr>,
    pub is_valid_ip: bool,
    pub is_valid_ipv4: bool,
    pub is_valid_ipv6: bool,
    pub is_valid_fqdn: bool,
    pub is_host_valid: bool,
    pub is_private: bool,
}

impl HostReport {
    /// Report for input that never reaches a collaborator.
    pub(crate) fn empty(host: &str) -> Self {
        Self {
            host: host.to_string(),
            literal: None,
            resolved: Vec::new(),
            is_valid_ip: false,
            is_valid_ipv4: false,
            is_valid_ipv6: false,
            is_valid_fqdn: false,
            is_host_valid: false,
            is_private: false,
        }
    }

    /// Builds a report from the gathered evidence.
    pub(crate) fn from_evidence(
        host: &str,
        literal: Option<IpLiteral>,
        resolved: Option<Vec<IpAddr>>,
    ) -> Self {
        if host.is_empty() {
            return Self::empty(host);
        }

        let family = literal.map(|lit| lit.address_family());
        let is_valid_ip = literal.is_some();
        let is_valid_fqdn = resolved.is_some();
        let resolved = resolved.unwrap_or_default();

        let is_private = super::evidence::literal_is_private(host)
            || super::evidence::resolved_is_private(host, &resolved);

        Self {
            host: host.to_string(),
            literal,
            resolved,
            is_valid_ip,
            is_valid_ipv4: family == Some(AddressFamily::Ipv4),
            is_valid_ipv6: family == Some(AddressFamily::Ipv6),
            is_valid_fqdn,
            is_host_valid: is_valid_ip || is_valid_fqdn,
            is_private,
        }
    }

    /// Serializes the report as a JSON object.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_all_false() {
        let report = HostReport::from_evidence("", None, Some(vec![]));
        assert_eq!(report, HostReport::empty(""));
        assert!(!report.is_host_valid);
    }

    #[test]
    fn test_literal_without_resolution() {
        let literal = "10.0.0.1".parse::<IpAddr>().map(IpLiteral::from).ok();
        let report = HostReport::from_evidence("10.0.0.1", literal, None);

        assert!(report.is_valid_ip);
        assert!(report.is_valid_ipv4);
        assert!(!report.is_valid_ipv6);
        assert!(!report.is_valid_fqdn);
        assert!(report.is_host_valid);
        assert!(report.is_private);
        assert!(report.resolved.is_empty());
    }

    #[test]
    fn test_name_resolving_to_nothing_is_still_valid() {
        let report = HostReport::from_evidence("empty.test", None, Some(vec![]));
        assert!(report.is_valid_fqdn);
        assert!(report.is_host_valid);
        assert!(!report.is_private);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json() {
        let literal = "::1".parse::<IpAddr>().map(IpLiteral::from).ok();
        let report = HostReport::from_evidence("::1", literal, None);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["host"], "::1");
        assert_eq!(json["literal"]["family"], "ipv6");
        assert_eq!(json["literal"]["addr"], "::1");
        assert_eq!(json["is_private"], true);
        assert_eq!(json["resolved"], serde_json::json!([]));
    }
}
