//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native DNS resolution via
//! `getaddrinfo`. The async path runs it in a thread pool; the blocking
//! path calls it directly and backs the synchronous classification API.
//!
//! # When to Use
//!
//! - When you need to respect system DNS configuration (/etc/hosts,
//!   /etc/resolv.conf, nsswitch)
//! - When DoH/DoT is not required
//! - From synchronous code, via [`GaiResolver::lookup_blocking`]

use super::{Addrs, Name, Resolve, Resolving};
use crate::base::context::IoResultExt;
use crate::base::neterror::NetError;
use std::{
    io,
    net::{SocketAddr, ToSocketAddrs},
};

/// System DNS resolver using `getaddrinfo`.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait. The
/// [`Resolve`] implementation executes it in `tokio::task::spawn_blocking`
/// to avoid blocking the async runtime.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }

    /// Resolves `name` on the calling thread.
    ///
    /// Blocks for as long as the system resolver takes; no timeout is
    /// added here.
    pub fn lookup_blocking(&self, name: &Name) -> Result<Vec<SocketAddr>, NetError> {
        let domain = name.as_str();
        tracing::debug!(domain = %domain, "resolving via getaddrinfo");

        let addrs: Vec<SocketAddr> = (domain, 0u16)
            .to_socket_addrs()
            .map(|iter| iter.collect::<Vec<_>>())
            .dns_context(domain)
            .inspect_err(|e| tracing::debug!(domain = %domain, error = %e, "DNS resolution failed"))?;

        if addrs.is_empty() {
            return Err(NetError::dns_failed(
                domain,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "No addresses returned by getaddrinfo",
                ),
            ));
        }

        tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
        Ok(addrs)
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        Box::pin(async move {
            let result = tokio::task::spawn_blocking(move || resolver.lookup_blocking(&name)).await;

            // Handle task join error (cancellation, panic)
            let addrs = result.map_err(|e| {
                tracing::error!(error = %e, "DNS resolution task failed");
                NetError::NameNotResolved
            })??;

            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_lookup_blocking_numeric_ipv4() {
        // Numeric hosts are answered by getaddrinfo without touching DNS.
        let addrs = GaiResolver::new()
            .lookup_blocking(&Name::new("127.0.0.1"))
            .unwrap();
        assert_eq!(addrs[0].ip(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(addrs[0].port(), 0);
    }

    #[test]
    fn test_lookup_blocking_numeric_ipv6() {
        let addrs = GaiResolver::new()
            .lookup_blocking(&Name::new("::1"))
            .unwrap();
        assert_eq!(addrs[0].ip(), IpAddr::V6(Ipv6Addr::LOCALHOST));
    }

    #[test]
    fn test_lookup_blocking_invalid_domain() {
        let err = GaiResolver::new()
            .lookup_blocking(&Name::new("this-domain-definitely-does-not-exist.invalid"))
            .unwrap_err();
        match err {
            NetError::NameNotResolvedFor { domain, .. } => {
                assert_eq!(domain, "this-domain-definitely-does-not-exist.invalid");
            }
            other => panic!("Unexpected error type: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_gai_resolver_localhost() {
        let resolver = GaiResolver::new();
        let result = resolver.resolve(Name::new("localhost")).await;

        // localhost should always resolve
        assert!(result.is_ok());
        let addrs: Vec<_> = result.unwrap().collect();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|a| a.ip().is_loopback()));
    }
}
