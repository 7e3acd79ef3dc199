//! HTTP handlers.
//!
//! - `GET /`: identity payload
//! - `GET /lookup?rc=...&key=...`: API key check, RC fetch, ordered report
//! - `GET /metrics`: Prometheus text

use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use rcprism_core::error::{Result, RcPrismError};
use rcprism_core::{LookupReport, COPYRIGHT, SERVICE_HEADER, TAG};

use crate::app_state::AppState;
use crate::policy::api_key::API_KEY_HEADER;
use crate::transport::ApiError;
use crate::upstream::normalize_rc;

pub const GREETING: &str = "🚗 Vehicle Info API by Mohd Kaif is running!";
pub const MISSING_RC: &str = "Please provide ?rc= parameter";

/// `/lookup` parameters. A repeated parameter keeps its first value.
#[derive(Debug, Default)]
pub struct LookupQuery {
    pub rc: Option<String>,
    pub key: Option<String>,
}

impl LookupQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut q = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "rc" => &mut q.rc,
                "key" => &mut q.key,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        q
    }
}

#[derive(Debug, Serialize)]
struct Greeting {
    message: &'static str,
    developer: &'static str,
    tag: &'static str,
}

pub async fn index() -> impl IntoResponse {
    Json(Greeting {
        message: GREETING,
        developer: COPYRIGHT,
        tag: TAG,
    })
}

pub async fn lookup(
    State(app): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> std::result::Result<Response, ApiError> {
    let q = LookupQuery::from_pairs(pairs);

    // Settles the in-flight gauge even if the client goes away mid-fetch.
    let tracker = app.metrics().track_lookup();
    let result = run_lookup(&app, &headers, &q).await;
    tracker.finish(match &result {
        Ok(_) => "ok",
        Err(e) => e.client_code().as_str(),
    });

    let report = result?;
    Ok(([SERVICE_HEADER], Json(report)).into_response())
}

async fn run_lookup(
    app: &AppState,
    headers: &HeaderMap,
    q: &LookupQuery,
) -> Result<LookupReport> {
    let header_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    app.api_key().check(header_key, q.key.as_deref())?;

    let rc = q
        .rc
        .as_deref()
        .map(normalize_rc)
        .filter(|rc| !rc.is_empty())
        .ok_or_else(|| RcPrismError::BadRequest(MISSING_RC.into()))?;

    let started = Instant::now();
    let fetched = app.source().fetch_record(&rc).await;
    let elapsed = started.elapsed();

    let result_label = if fetched.is_ok() { "ok" } else { "error" };
    app.metrics()
        .upstream_duration
        .observe(&[("result", result_label)], elapsed);

    match fetched {
        Ok(record) => {
            tracing::info!(rc = %rc, fields = record.len(), elapsed_ms = elapsed.as_millis() as u64, "lookup complete");
            Ok(LookupReport::new(record))
        }
        Err(e) => {
            tracing::warn!(rc = %rc, error = %e, "upstream fetch failed");
            Err(e)
        }
    }
}

pub async fn metrics(State(app): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        app.metrics().render(),
    )
}
