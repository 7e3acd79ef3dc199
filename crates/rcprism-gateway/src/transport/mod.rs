//! Transport layer (HTTP).
//!
//! Exposes the route handlers and the mapping from `RcPrismError` to HTTP
//! responses.

pub mod error;
pub mod http;

pub use error::ApiError;
