//! HTTP rendering of gateway errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use rcprism_core::error::{ClientCode, RcPrismError};
use rcprism_core::{COPYRIGHT, TAG};

/// `RcPrismError` as returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub RcPrismError);

impl From<RcPrismError> for ApiError {
    fn from(e: RcPrismError) -> Self {
        Self(e)
    }
}

/// Error body carrying the attribution keys, in this key order.
#[derive(Debug, Serialize)]
pub struct AttributedError {
    pub error: String,
    pub copyright: &'static str,
    pub tag: &'static str,
}

impl AttributedError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            copyright: COPYRIGHT,
            tag: TAG,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::AuthFailed => StatusCode::UNAUTHORIZED,
            ClientCode::Upstream => StatusCode::BAD_GATEWAY,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            // Auth rejections carry no attribution.
            RcPrismError::AuthFailed => {
                (status, Json(json!({ "error": RcPrismError::AuthFailed.to_string() })))
                    .into_response()
            }
            e => (status, Json(AttributedError::new(e.to_string()))).into_response(),
        }
    }
}
