//! HTTP response types
//!
//! Every JSON endpoint except the agent card and health probes wraps its
//! payload in a [`RestResult`].

use actix_web::{HttpResponse, HttpResponseBuilder, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, SUCCESS};

/// REST API result type with convenient builder methods
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestResult<T> {
    pub code: i32,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> RestResult<T> {
    /// Create a successful result with data
    pub fn ok(data: Option<T>) -> Self {
        RestResult {
            code: SUCCESS.code,
            message: Some(SUCCESS.message.to_string()),
            data,
        }
    }

    /// Create an error result
    pub fn err(code: i32, message: &str) -> Self {
        RestResult {
            code,
            message: Some(message.to_string()),
            data: None,
        }
    }
}

impl<T: Serialize> RestResult<T> {
    pub fn http_success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(RestResult::ok(Some(data)))
    }
}

impl RestResult<()> {
    /// Error body with the given HTTP status
    pub fn http_error(status: u16, error: ErrorCode<'_>, message: &str) -> HttpResponse {
        HttpResponseBuilder::new(
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .json(RestResult::<()>::err(error.code, message))
    }
}

/// Error body for requests that never reach a handler
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResult {
    pub timestamp: String,
    pub status: i32,
    pub error: String,
    pub message: String,
    pub path: String,
}

impl ErrorResult {
    pub fn new(status: StatusCode, message: &str, path: &str) -> Self {
        ErrorResult {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16() as i32,
            error: status.canonical_reason().unwrap_or_default().to_string(),
            message: message.to_string(),
            path: path.to_string(),
        }
    }
}
