//! Shared error type across rcPrism crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / missing parameter.
    BadRequest,
    /// API key missing or wrong.
    AuthFailed,
    /// The upstream RC page could not be fetched.
    Upstream,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RcPrismError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RcPrismError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Invalid or missing API key")]
    AuthFailed,
    #[error("Network error: {0}")]
    Upstream(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RcPrismError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RcPrismError::BadRequest(_) => ClientCode::BadRequest,
            RcPrismError::AuthFailed => ClientCode::AuthFailed,
            RcPrismError::Upstream(_) => ClientCode::Upstream,
            RcPrismError::Internal(_) => ClientCode::Internal,
        }
    }
}
