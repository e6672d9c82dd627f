//! Static greeting reflecting the caller's request and user IDs.

use axum::{http::HeaderMap, Json};
use serde::Serialize;

use crate::http::request::header_text;

pub const GREETING: &str = "Hello from Python Service A";
pub const X_REQUEST_ID: &str = "x-request-id";
pub const X_USER_ID: &str = "x-user-id";

/// Placeholder for headers that are missing.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub request_id: String,
    pub user_id: String,
}

pub async fn hello(headers: HeaderMap) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: GREETING,
        request_id: header_or_unknown(&headers, X_REQUEST_ID),
        user_id: header_or_unknown(&headers, X_USER_ID),
    })
}

fn header_or_unknown(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(header_text)
        .unwrap_or_else(|| UNKNOWN.to_string())
}
