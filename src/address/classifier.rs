//! Async host classifier.
//!
//! `HostClassifier` bundles a resolver with the classification rules. It
//! holds no state besides the resolver handle and is cheap to clone, so one
//! instance can serve any number of concurrent callers.

use super::evidence::{self, resolution_outcome};
use super::literal::parse_literal;
use super::report::HostReport;
use crate::base::neterror::NetError;
use crate::dns::{lookup_ips, DnsResolverWithOverrides, GaiResolver, HickoryResolver, Name, Resolve};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Which built-in resolver backs the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverBackend {
    /// System `getaddrinfo`, honouring /etc/hosts and nsswitch.
    #[default]
    System,
    /// hickory-dns, talking to the configured name servers directly.
    Hickory,
}

/// Configuration options for [`HostClassifier`].
#[derive(Clone, Default)]
pub struct HostClassifierConfig {
    /// Built-in resolver to use when `dns_resolver` is not set.
    pub backend: ResolverBackend,

    /// Custom DNS resolver (None = use `backend`).
    pub dns_resolver: Option<Arc<dyn Resolve>>,

    /// DNS hostname overrides (hostname -> addresses).
    pub dns_overrides: HashMap<Cow<'static, str>, Vec<SocketAddr>>,
}

impl fmt::Debug for HostClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostClassifierConfig")
            .field("backend", &self.backend)
            .field("dns_resolver", &self.dns_resolver.is_some())
            .field("dns_overrides_count", &self.dns_overrides.len())
            .finish()
    }
}

/// Classifies hosts as valid, IPv4/IPv6 literals, or private.
///
/// # Example
///
/// ```rust,ignore
/// use hostclass::HostClassifier;
///
/// let classifier = HostClassifier::new();
/// assert!(classifier.is_private("192.168.1.1").await);
/// assert!(!classifier.is_private("8.8.8.8").await);
/// ```
#[derive(Clone)]
pub struct HostClassifier {
    resolver: Arc<dyn Resolve>,
}

impl HostClassifier {
    /// Create a classifier backed by the system resolver.
    pub fn new() -> Self {
        Self::with_config(HostClassifierConfig::default())
    }

    /// Create a classifier from a configuration.
    pub fn with_config(config: HostClassifierConfig) -> Self {
        let base_resolver: Arc<dyn Resolve> = match config.dns_resolver {
            Some(resolver) => resolver,
            None => match config.backend {
                ResolverBackend::System => Arc::new(GaiResolver::new()),
                ResolverBackend::Hickory => Arc::new(HickoryResolver::new()),
            },
        };

        let resolver: Arc<dyn Resolve> = if config.dns_overrides.is_empty() {
            base_resolver
        } else {
            Arc::new(DnsResolverWithOverrides::new(
                base_resolver,
                config.dns_overrides,
            ))
        };

        Self { resolver }
    }

    /// Create a classifier around an arbitrary resolver.
    pub fn with_resolver(resolver: impl Resolve + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Get the resolver.
    pub fn resolver(&self) -> &Arc<dyn Resolve> {
        &self.resolver
    }

    pub fn is_valid_ip(&self, host: &str) -> bool {
        evidence::is_valid_ip(host)
    }

    pub fn is_valid_ipv4(&self, host: &str) -> bool {
        evidence::is_valid_ipv4(host)
    }

    pub fn is_valid_ipv6(&self, host: &str) -> bool {
        evidence::is_valid_ipv6(host)
    }

    /// True iff the resolver succeeds for `host`, even with no addresses.
    pub async fn is_valid_fqdn(&self, host: &str) -> bool {
        self.resolve(host).await.is_some()
    }

    /// True iff `host` is an IP literal or a resolvable name.
    ///
    /// Literals are answered without consulting the resolver.
    pub async fn is_host_valid(&self, host: &str) -> bool {
        if host.is_empty() {
            return false;
        }
        self.is_valid_ip(host) || self.is_valid_fqdn(host).await
    }

    /// True iff `host` is, or resolves to, a loopback or private address.
    ///
    /// A literal that is neither loopback nor private is still handed to
    /// the resolver, and any private answer from it makes the host private.
    pub async fn is_private(&self, host: &str) -> bool {
        if host.is_empty() {
            return false;
        }
        if evidence::literal_is_private(host) {
            return true;
        }
        match self.resolve(host).await {
            Some(resolved) => evidence::resolved_is_private(host, &resolved),
            None => false,
        }
    }

    /// Computes every classification with a single parse and resolution.
    pub async fn classify(&self, host: &str) -> HostReport {
        if host.is_empty() {
            return HostReport::empty(host);
        }
        let literal = parse_literal(host).ok();
        let resolved = self.resolve(host).await;
        HostReport::from_evidence(host, literal, resolved)
    }

    async fn resolve(&self, host: &str) -> Option<Vec<IpAddr>> {
        let result = if host.is_empty() {
            Err(NetError::EmptyHost)
        } else {
            lookup_ips(&self.resolver, Name::new(host)).await
        };
        resolution_outcome(host, result)
    }
}

impl Default for HostClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HostClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostClassifier").finish_non_exhaustive()
    }
}
