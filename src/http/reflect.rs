//! Request reflection: turns an incoming request into the echo payload.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::http::body::NormalizedBody;
use crate::http::headers::filter_headers;
use crate::http::request::{first_wins, IncomingRequest};

/// Identifier reported by every payload this service produces.
pub const SERVICE_NAME: &str = "service-a";

/// Payload returned by `/echo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoResponse {
    pub service: &'static str,
    pub method: String,
    pub path: String,
    pub query_params: Map<String, Value>,
    pub headers: Map<String, Value>,
    pub body: NormalizedBody,
}

impl EchoResponse {
    /// Assemble the echo payload. The same logic applies to every verb.
    pub fn reflect(request: IncomingRequest, body: NormalizedBody) -> Self {
        let IncomingRequest {
            method,
            path,
            query_params,
            headers,
            ..
        } = request;

        Self {
            service: SERVICE_NAME,
            method,
            path,
            query_params,
            headers: first_wins(filter_headers(headers)),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use serde_json::json;

    fn request(method: &str, headers: &[(&str, &str)]) -> IncomingRequest {
        IncomingRequest {
            method: method.to_string(),
            path: "/echo".to_string(),
            query_params: first_wins([("a", "1"), ("b", "2")]),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: Bytes::new(),
        }
    }

    #[test]
    fn test_reflect_shape() {
        let response = EchoResponse::reflect(
            request("POST", &[("Host", "x"), ("Content-Length", "15"), ("X-User-ID", "u1")]),
            NormalizedBody::Structured(json!({"key": "value"})),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "service": "service-a",
                "method": "POST",
                "path": "/echo",
                "query_params": {"a": "1", "b": "2"},
                "headers": {"X-User-ID": "u1"},
                "body": {"key": "value"},
            })
        );
    }

    #[test]
    fn test_method_copied_verbatim() {
        for method in ["GET", "POST", "PUT", "DELETE", "PATCH", "custom"] {
            let response = EchoResponse::reflect(request(method, &[]), NormalizedBody::Absent);
            assert_eq!(response.method, method);
        }
    }

    #[test]
    fn test_absent_body_serializes_as_null() {
        let response = EchoResponse::reflect(request("GET", &[]), NormalizedBody::Absent);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["body"], Value::Null);
    }

    #[test]
    fn test_duplicate_headers_keep_first() {
        let response = EchoResponse::reflect(
            request("GET", &[("x-tag", "one"), ("HOST", "h"), ("x-tag", "two")]),
            NormalizedBody::Absent,
        );
        assert_eq!(Value::Object(response.headers), json!({"x-tag": "one"}));
    }
}
