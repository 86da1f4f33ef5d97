//! Host classification.
//!
//! - [`literal`]: IP literal parsing and address families
//! - [`range`]: Loopback and private-range rules on raw address bytes
//! - [`classifier`]: Async [`HostClassifier`] over any [`Resolve`](crate::dns::Resolve)
//! - [`blocking`]: Synchronous free functions over the system resolver
//! - [`report`]: All classifications of one host in a single value

pub mod blocking;
pub mod classifier;
mod evidence;
pub mod literal;
pub mod range;
pub mod report;

pub use classifier::{HostClassifier, HostClassifierConfig, ResolverBackend};
pub use literal::{parse_literal, AddressFamily, IpLiteral};
pub use range::{is_in_private_range, is_loopback, is_private_addr, private_range, PrivateRange};
pub use report::HostReport;
