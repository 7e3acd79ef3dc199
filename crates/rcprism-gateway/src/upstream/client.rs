//! reqwest-backed fetcher for the vahanx RC search page.
//!
//! One GET per lookup with a mobile Chrome header set. Compressed bodies are
//! negotiated and decoded by reqwest. The body is parsed synchronously after
//! the await so the (non-`Send`) DOM never crosses a suspension point.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER, USER_AGENT};
use reqwest::{Client, Url};

use rcprism_core::error::{Result, RcPrismError};
use rcprism_core::{extract_record, VehicleRecord};

use crate::config::UpstreamSection;
use crate::upstream::RecordSource;

const MOBILE_UA: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Mobile Safari/537.36";
const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const ACCEPT_LANG: &str = "en-US,en;q=0.9";

#[derive(Debug, Clone)]
pub struct VahanxClient {
    http: Client,
    base: Url,
}

impl VahanxClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| RcPrismError::Internal(format!("invalid upstream base url: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(RcPrismError::Internal(format!(
                "upstream base url cannot carry a path: {base_url}"
            )));
        }

        let referer = format!("{}/rc-search", base_url.trim_end_matches('/'));

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_UA));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));
        headers.insert(
            REFERER,
            HeaderValue::from_str(&referer)
                .map_err(|e| RcPrismError::Internal(format!("invalid referer header: {e}")))?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| RcPrismError::Internal(format!("http client build failed: {e}")))?;

        Ok(Self { http, base })
    }

    pub fn from_config(cfg: &UpstreamSection) -> Result<Self> {
        Self::new(&cfg.base_url, Duration::from_millis(cfg.timeout_ms))
    }

    /// `{base}/rc-search/{rc}` with `rc` encoded as a single path segment.
    pub fn page_url(&self, rc: &str) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RcPrismError::Internal("upstream base url cannot carry a path".into()))?
            .pop_if_empty()
            .push("rc-search")
            .push(rc);
        Ok(url)
    }

    pub async fn fetch_page(&self, rc: &str) -> Result<String> {
        let url = self.page_url(rc)?;
        tracing::debug!(%url, "fetching rc page");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RcPrismError::Upstream(e.to_string()))?;

        resp.text()
            .await
            .map_err(|e| RcPrismError::Upstream(e.to_string()))
    }
}

#[async_trait]
impl RecordSource for VahanxClient {
    async fn fetch_record(&self, rc: &str) -> Result<VehicleRecord> {
        let body = self.fetch_page(rc).await?;
        Ok(extract_record(&body))
    }
}
