//! Router tests against a stub record source.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;

use rcprism_core::error::{Result, RcPrismError};
use rcprism_core::{Field, VehicleRecord};
use rcprism_gateway::app_state::AppState;
use rcprism_gateway::config::GatewayConfig;
use rcprism_gateway::router::build_router;
use rcprism_gateway::transport::http;
use rcprism_gateway::upstream::RecordSource;

const COPYRIGHT: &str = "@mynk_mynk_mynk this source maker";

#[derive(Default)]
struct StubSource {
    fields: Vec<(Field, &'static str)>,
    fail: bool,
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl RecordSource for StubSource {
    async fn fetch_record(&self, rc: &str) -> Result<VehicleRecord> {
        self.seen.lock().unwrap().push(rc.to_string());
        if self.fail {
            return Err(RcPrismError::Upstream("connection refused".into()));
        }
        Ok(self
            .fields
            .iter()
            .map(|(f, v)| (*f, v.to_string()))
            .collect())
    }
}

fn server_with(api_key: Option<&str>, source: Arc<StubSource>) -> TestServer {
    let mut cfg = GatewayConfig::default();
    cfg.auth.api_key = api_key.map(str::to_string);
    let state = AppState::with_source(cfg, source);
    TestServer::new(build_router(state)).unwrap()
}

fn owner_and_city() -> Arc<StubSource> {
    Arc::new(StubSource {
        fields: vec![(Field::CityName, "Pune"), (Field::OwnerName, "John Doe")],
        ..Default::default()
    })
}

fn api_key_header() -> HeaderName {
    HeaderName::from_static("x-api-key")
}

#[tokio::test]
async fn index_payload() {
    let server = server_with(None, Arc::new(StubSource::default()));
    let resp = server.get("/").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(
        resp.text(),
        format!(
            r#"{{"message":"🚗 Vehicle Info API by Mohd Kaif is running!","developer":"{COPYRIGHT}","tag":"api by mynk"}}"#
        )
    );
}

#[tokio::test]
async fn lookup_example_output() {
    let source = owner_and_city();
    let server = server_with(None, source.clone());
    let resp = server.get("/lookup").add_query_param("rc", "mh12ab1234").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(
        resp.text(),
        format!(
            r#"{{"Owner Name":"John Doe","City Name":"Pune","copyright":"{COPYRIGHT}","tag":"api by mynk"}}"#
        )
    );
    assert_eq!(resp.headers().get("x-api-by").unwrap(), "mynk");
    assert_eq!(*source.seen.lock().unwrap(), vec!["MH12AB1234".to_string()]);
}

#[tokio::test]
async fn rc_is_trimmed_before_lookup() {
    let source = owner_and_city();
    let server = server_with(None, source.clone());
    server.get("/lookup").add_query_param("rc", "  dl01c0001 ").await;
    assert_eq!(*source.seen.lock().unwrap(), vec!["DL01C0001".to_string()]);
}

#[tokio::test]
async fn missing_rc_is_bad_request() {
    let source = owner_and_city();
    let server = server_with(None, source.clone());
    let resp = server.get("/lookup").await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.text(),
        format!(r#"{{"error":"Please provide ?rc= parameter","copyright":"{COPYRIGHT}","tag":"api by mynk"}}"#)
    );
    assert!(source.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn blank_rc_is_bad_request() {
    let server = server_with(None, owner_and_city());
    let resp = server.get("/lookup").add_query_param("rc", "").await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_rc_with_valid_key_is_bad_request() {
    let server = server_with(Some("s3cret"), owner_and_city());
    let resp = server
        .get("/lookup")
        .add_header(api_key_header(), HeaderValue::from_static("s3cret"))
        .await;
    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn configured_key_required() {
    let source = owner_and_city();
    let server = server_with(Some("s3cret"), source.clone());
    let resp = server.get("/lookup").add_query_param("rc", "MH12AB1234").await;

    assert_eq!(resp.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(resp.text(), r#"{"error":"Invalid or missing API key"}"#);
    assert!(resp.headers().get("x-api-by").is_none());
    assert!(source.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_key_rejected() {
    let server = server_with(Some("s3cret"), owner_and_city());

    let by_header = server
        .get("/lookup")
        .add_query_param("rc", "MH12AB1234")
        .add_header(api_key_header(), HeaderValue::from_static("guess"))
        .await;
    assert_eq!(by_header.status_code(), StatusCode::UNAUTHORIZED);

    let by_query = server
        .get("/lookup")
        .add_query_param("rc", "MH12AB1234")
        .add_query_param("key", "guess")
        .await;
    assert_eq!(by_query.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn correct_key_in_header_or_query() {
    let server = server_with(Some("s3cret"), owner_and_city());

    let by_header = server
        .get("/lookup")
        .add_query_param("rc", "MH12AB1234")
        .add_header(api_key_header(), HeaderValue::from_static("s3cret"))
        .await;
    assert_eq!(by_header.status_code(), StatusCode::OK);

    let by_query = server
        .get("/lookup")
        .add_query_param("rc", "MH12AB1234")
        .add_query_param("key", "s3cret")
        .await;
    assert_eq!(by_query.status_code(), StatusCode::OK);
    assert_eq!(by_query.headers().get("x-api-by").unwrap(), "mynk");
}

#[tokio::test]
async fn key_ignored_when_unconfigured() {
    let server = server_with(None, owner_and_city());
    let resp = server
        .get("/lookup")
        .add_query_param("rc", "MH12AB1234")
        .add_query_param("key", "whatever")
        .await;
    assert_eq!(resp.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn full_record_in_desired_order() {
    let source = Arc::new(StubSource {
        fields: Field::ALL.iter().rev().map(|f| (*f, "x")).collect(),
        ..Default::default()
    });
    let server = server_with(None, source);
    let text = server.get("/lookup").add_query_param("rc", "KA01").await.text();

    let mut cursor = 0;
    let keys = Field::ALL
        .iter()
        .map(|f| f.label())
        .chain(["copyright", "tag"]);
    for key in keys {
        let needle = serde_json::to_string(key).unwrap();
        let at = text[cursor..].find(&needle).expect("key missing or out of order");
        cursor += at + needle.len();
    }
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let source = Arc::new(StubSource {
        fail: true,
        ..Default::default()
    });
    let server = server_with(None, source);
    let resp = server.get("/lookup").add_query_param("rc", "MH12AB1234").await;

    assert_eq!(resp.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        resp.text(),
        format!(
            r#"{{"error":"Network error: connection refused","copyright":"{COPYRIGHT}","tag":"api by mynk"}}"#
        )
    );
}

#[tokio::test]
async fn metrics_count_outcomes() {
    let server = server_with(Some("s3cret"), owner_and_city());
    server.get("/lookup").add_query_param("rc", "A1").await;
    server
        .get("/lookup")
        .add_query_param("rc", "A1")
        .add_query_param("key", "s3cret")
        .await;

    let body = server.get("/metrics").await.text();
    assert!(body.contains(r#"rcprism_lookups_total{outcome="AUTH_FAILED"} 1"#));
    assert!(body.contains(r#"rcprism_lookups_total{outcome="ok"} 1"#));
    assert!(body.contains("rcprism_lookups_in_flight 0"));
    assert!(body.contains(r#"rcprism_upstream_fetch_duration_millis_count{result="ok"} 1"#));
}

#[tokio::test]
async fn repeated_rc_uses_first_value() {
    let source = owner_and_city();
    let server = server_with(None, source.clone());
    let resp = server
        .get("/lookup")
        .add_query_param("rc", "mh12ab1234")
        .add_query_param("rc", "mh13zz9999")
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(*source.seen.lock().unwrap(), vec!["MH12AB1234".to_string()]);
}

#[tokio::test]
async fn repeated_key_uses_first_value() {
    let server = server_with(Some("s3cret"), owner_and_city());

    let first_good = server
        .get("/lookup")
        .add_query_param("rc", "A1")
        .add_query_param("key", "s3cret")
        .add_query_param("key", "guess")
        .await;
    assert_eq!(first_good.status_code(), StatusCode::OK);

    let first_bad = server
        .get("/lookup")
        .add_query_param("rc", "A1")
        .add_query_param("rc", "A2")
        .add_query_param("key", "guess")
        .add_query_param("key", "s3cret")
        .await;
    assert_eq!(first_bad.status_code(), StatusCode::UNAUTHORIZED);
}

struct SlowSource;

#[async_trait]
impl RecordSource for SlowSource {
    async fn fetch_record(&self, _rc: &str) -> Result<VehicleRecord> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(VehicleRecord::new())
    }
}

#[tokio::test]
async fn dropped_lookup_leaves_no_request_in_flight() {
    let app = AppState::with_source(GatewayConfig::default(), Arc::new(SlowSource));

    let call = http::lookup(
        State(app.clone()),
        HeaderMap::new(),
        Query(vec![("rc".to_string(), "MH12AB1234".to_string())]),
    );
    let timed_out = tokio::time::timeout(Duration::from_millis(50), call).await;
    assert!(timed_out.is_err());

    let body = app.metrics().render();
    assert!(body.contains("rcprism_lookups_in_flight 0"));
    assert!(body.contains(r#"rcprism_lookups_total{outcome="cancelled"} 1"#));
}
