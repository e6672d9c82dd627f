//! Incoming request model.
//!
//! # Responsibilities
//! - Capture method, path, query parameters, headers and body of a request
//! - Decode the query string (percent-decoding, `+` as space)
//! - Collapse repeated keys into a single value
//!
//! # Design Decisions
//! - Repeated query keys and header names keep the FIRST value
//! - Header names are taken as the transport delivers them. The http crate
//!   normalizes names to lowercase while parsing, so `X-Custom` on the wire
//!   is reflected as `x-custom`; values keep their case
//! - Header values are decoded as UTF-8, lossily (U+FFFD) for invalid bytes

use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue, Method, Uri};
use serde_json::{Map, Value};

/// A buffered, transport-independent view of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingRequest {
    pub method: String,
    pub path: String,
    pub query_params: Map<String, Value>,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl IncomingRequest {
    /// Build from the pieces axum hands to a handler.
    pub fn from_parts(method: &Method, uri: &Uri, headers: &HeaderMap, body: Bytes) -> Self {
        Self {
            method: method.as_str().to_string(),
            path: uri.path().to_string(),
            query_params: parse_query(uri.query().unwrap_or_default()),
            headers: header_pairs(headers),
            body,
        }
    }

    /// The declared `Content-Type`, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header::CONTENT_TYPE.as_str()))
            .map(|(_, value)| value.as_str())
    }
}

/// Decode a query string into a key → value mapping (first value wins).
pub fn parse_query(query: &str) -> Map<String, Value> {
    first_wins(url::form_urlencoded::parse(query.as_bytes()))
}

/// Collapse pairs into a mapping, keeping the first value seen per key.
pub fn first_wins<I, K, V>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut map = Map::new();
    for (key, value) in pairs {
        map.entry(key.into())
            .or_insert_with(|| Value::String(value.into()));
    }
    map
}

/// Decode a header value as UTF-8 text, substituting U+FFFD for invalid bytes.
pub fn header_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| (name.as_str().to_string(), header_text(value)))
        .collect()
}
