//! rcPrism gateway library entry.
//!
//! This crate wires config, the API key policy, the upstream RC page client,
//! metrics, and the HTTP handlers into one axum service. It is intended to
//! be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod policy;
pub mod router;
pub mod transport;
pub mod upstream;
