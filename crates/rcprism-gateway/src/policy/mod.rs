//! Policy layer (request admission).
//!
//! Compiles the auth section of the config into a check the HTTP handlers
//! run before doing any upstream work.

pub mod api_key;

pub use api_key::ApiKeyPolicy;
