//! # hostclass
//!
//! Classifies a host identifier, either an IP literal or a domain name, by
//! validity, address family, and whether it is (or resolves to) a loopback
//! or private address.
//!
//! ## Features
//!
//! - **Literal Parsing**: Dotted-decimal IPv4, colon-hex IPv6, bracketed and zoned forms
//! - **Private Ranges**: RFC 1918 IPv4 blocks, IPv6 unique-local and link-local
//! - **Pluggable DNS**: System getaddrinfo, hickory-dns, static overrides
//! - **Two Front Ends**: Blocking free functions and an async `HostClassifier`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! // Blocking, system resolver
//! assert!(hostclass::is_private("192.168.1.1"));
//! assert!(hostclass::is_valid_ipv4("8.8.8.8"));
//!
//! // Async, any resolver
//! use hostclass::HostClassifier;
//!
//! #[tokio::main]
//! async fn main() {
//!     let classifier = HostClassifier::new();
//!     let report = classifier.classify("localhost").await;
//!     println!("{report:?}");
//! }
//! ```
//!
//! ## Failure Model
//!
//! Every public predicate returns `bool`. Parse and resolution failures are
//! logged through `tracing` and count as "no evidence", so `false` means
//! either "not private" or "could not be determined".
//!
//! ## Modules
//!
//! - [`address`] - Literal parsing, range rules, and the classifiers
//! - [`base`] - Error definitions
//! - [`dns`] - Resolver trait and implementations

pub mod address;
pub mod base;
pub mod dns;

pub use address::blocking::{
    classify, is_host_valid, is_private, is_valid_fqdn, is_valid_ip, is_valid_ipv4, is_valid_ipv6,
};
pub use address::{AddressFamily, HostClassifier, HostClassifierConfig, HostReport, ResolverBackend};
pub use base::neterror::NetError;
