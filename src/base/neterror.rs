use std::{io, sync::Arc};
use thiserror::Error;

/// Errors raised by the literal parser and the resolvers.
///
/// Codes follow Chromium's `net_error_list.h` where a matching entry
/// exists. Crate-specific failures use codes below -10000.
#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("Name not resolved")]
    NameNotResolved,
    #[error("Address invalid")]
    AddressInvalid,
    #[error("Name resolution failed")]
    NameResolutionFailed,
    #[error("Empty host")]
    EmptyHost,

    #[error("Name not resolved for {domain}: {source}")]
    NameNotResolvedFor {
        domain: String,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("Address invalid: {input:?} is not an IP literal")]
    AddressInvalidFor { input: String },

    #[error("Unknown error: {0}")]
    Unknown(i32),
}

impl NetError {
    /// DNS failure for `domain`, keeping the underlying I/O error.
    pub fn dns_failed(domain: impl Into<String>, source: io::Error) -> Self {
        NetError::NameNotResolvedFor {
            domain: domain.into(),
            source: Arc::new(source),
        }
    }

    /// Literal parse failure for `input`.
    pub fn invalid_literal(input: impl Into<String>) -> Self {
        NetError::AddressInvalidFor {
            input: input.into(),
        }
    }

    /// True for every variant that means a name could not be resolved.
    pub fn is_name_not_resolved(&self) -> bool {
        matches!(
            self,
            NetError::NameNotResolved
                | NetError::NameNotResolvedFor { .. }
                | NetError::NameResolutionFailed
        )
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::NameNotResolved => -105,
            NetError::NameNotResolvedFor { .. } => -105,
            NetError::AddressInvalid => -108,
            NetError::AddressInvalidFor { .. } => -108,
            NetError::NameResolutionFailed => -137,
            // Crate-specific codes
            NetError::EmptyHost => -10001,
            NetError::Unknown(code) => *code,
        }
    }
}

impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -105 => NetError::NameNotResolved,
            -108 => NetError::AddressInvalid,
            -137 => NetError::NameResolutionFailed,
            -10001 => NetError::EmptyHost,
            _ => NetError::Unknown(code),
        }
    }
}
