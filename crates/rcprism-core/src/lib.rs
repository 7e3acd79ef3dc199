//! rcPrism core: RC lookup primitives, error types, and the page extractor.
//!
//! This crate defines the fixed field list, the ordered report that the
//! gateway serializes, and the pure label lookup over parsed HTML. It carries
//! no transport or runtime dependencies so it can be reused outside the
//! gateway (batch tools, tests against saved pages).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A page that does not look like what we expect yields missing fields,
//! never a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod extract;
pub mod record;

/// Shared result type.
pub use error::{Result, RcPrismError};
pub use extract::{extract, extract_record};
pub use record::{Field, LookupReport, VehicleRecord, COPYRIGHT, SERVICE_HEADER, TAG};
