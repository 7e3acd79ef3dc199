//! Upstream RC page source.
//!
//! `RecordSource` is the seam between the HTTP handler and the scraper so
//! the handler can run against the live site or a test double.

pub mod client;

use async_trait::async_trait;

use rcprism_core::error::Result;
use rcprism_core::VehicleRecord;

pub use client::VahanxClient;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch and extract the record for an already normalized RC number.
    async fn fetch_record(&self, rc: &str) -> Result<VehicleRecord>;
}

/// Trim and uppercase a user-supplied RC number.
pub fn normalize_rc(raw: &str) -> String {
    raw.trim().to_uppercase()
}
