//! Shared error type across reqstat crates.

use thiserror::Error;

/// Stable error codes (used in logs and by tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration failed to parse or validate.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Statsd backend could not be dialed.
    Unreachable,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Unreachable => "UNREACHABLE",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ReqstatError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ReqstatError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("statsd backend unreachable: {0}")]
    Unreachable(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ReqstatError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ReqstatError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            ReqstatError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ReqstatError::Unreachable(_) => ErrorCode::Unreachable,
            ReqstatError::Internal(_) => ErrorCode::Internal,
        }
    }
}
