//! Base types and error handling.
//!
//! Provides foundational types mirroring Chromium's `net/base/`:
//! - [`NetError`](neterror::NetError): Error codes matching `net_error_list.h`
//! - [`IoResultExt`](context::IoResultExt): Context helpers for IO errors

pub mod context;
pub mod neterror;
