//! Body normalization for the echo endpoint.
//!
//! # Design Decisions
//! - Content-type agnostic: any body that parses as JSON is structured
//! - Malformed JSON is not an error; it falls back to raw text
//! - Invalid UTF-8 is decoded lossily rather than rejected

use serde::Serialize;
use serde_json::Value;

/// A request body after best-effort decoding.
///
/// Serializes untagged: the JSON value itself, a JSON string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedBody {
    /// The body parsed as JSON (any value, not just objects).
    Structured(Value),
    /// The body was not valid JSON; holds its text.
    Raw(String),
    /// The body was empty.
    Absent,
}

impl NormalizedBody {
    /// Normalize raw body bytes.
    ///
    /// `content_type` is the declared `Content-Type`, if any. It does not
    /// influence the result.
    pub fn from_bytes(bytes: &[u8], content_type: Option<&str>) -> Self {
        if bytes.is_empty() {
            return NormalizedBody::Absent;
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => NormalizedBody::Structured(value),
            Err(e) => {
                if content_type.is_some_and(is_json_content_type) {
                    tracing::debug!(error = %e, "Declared JSON body failed to parse");
                }
                NormalizedBody::Raw(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }

    /// Short label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizedBody::Structured(_) => "structured",
            NormalizedBody::Raw(_) => "raw",
            NormalizedBody::Absent => "absent",
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
