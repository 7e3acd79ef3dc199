//! Shared application state for the rcPrism gateway.
//!
//! Everything here is built once at startup and read-only afterwards; the
//! only mutation is metric counters.

use std::sync::Arc;

use rcprism_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;
use crate::policy::ApiKeyPolicy;
use crate::upstream::{RecordSource, VahanxClient};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    source: Arc<dyn RecordSource>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    api_key: ApiKeyPolicy,
}

impl AppState {
    /// Build state with the live upstream client.
    /// Returns Result so main can report a bad upstream config without panicking.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let client = VahanxClient::from_config(&cfg.upstream)?;
        Ok(Self::with_source(cfg, Arc::new(client)))
    }

    /// Build state around any record source.
    pub fn with_source(cfg: GatewayConfig, source: Arc<dyn RecordSource>) -> Self {
        let api_key = ApiKeyPolicy::from_config(&cfg.auth);
        Self {
            inner: Arc::new(AppStateInner { api_key }),
            source,
            metrics: Arc::new(GatewayMetrics::default()),
        }
    }

    pub fn api_key(&self) -> &ApiKeyPolicy {
        &self.inner.api_key
    }

    pub fn source(&self) -> Arc<dyn RecordSource> {
        Arc::clone(&self.source)
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }
}
