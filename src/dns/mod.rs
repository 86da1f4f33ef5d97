//! DNS Resolution Module
//!
//! Provides pluggable forward resolution for the classifier:
//! - System resolver (getaddrinfo, async via thread pool or blocking)
//! - Async hickory-dns resolver
//! - Hostname-to-IP override mechanism
//!
//! # Architecture
//!
//! The `Resolve` trait is the seam between classification and name
//! resolution. Classification only ever sees `Result<Vec<IpAddr>, NetError>`;
//! which resolver produced it is a configuration choice.
//!
//! # Example
//!
//! ```rust,ignore
//! use hostclass::dns::{lookup_ips, GaiResolver, Name};
//!
//! let ips = lookup_ips(&GaiResolver::new(), Name::new("example.com")).await?;
//! for ip in ips {
//!     println!("Resolved: {}", ip);
//! }
//! ```

mod gai;
mod hickory;
mod resolve;

pub use gai::GaiResolver;
pub use hickory::HickoryResolver;
pub use resolve::{lookup_ips, Addrs, DnsResolverWithOverrides, Name, Resolve, Resolving};
