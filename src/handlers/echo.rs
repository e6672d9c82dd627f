//! Echo endpoint: reflects the request back as JSON.

use axum::{
    body::Bytes,
    http::{HeaderMap, Method, Uri},
    Json,
};

use crate::http::body::NormalizedBody;
use crate::http::reflect::EchoResponse;
use crate::http::request::IncomingRequest;

/// Serves GET, POST, PUT, DELETE and PATCH on `/echo`.
///
/// Never fails: an empty body becomes `null` and a body that is not JSON is
/// echoed as a string.
pub async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<EchoResponse> {
    let request = IncomingRequest::from_parts(&method, &uri, &headers, body);
    let body = NormalizedBody::from_bytes(&request.body, request.content_type());

    tracing::debug!(
        method = %request.method,
        path = %request.path,
        body = body.kind(),
        "Echoing request"
    );

    Json(EchoResponse::reflect(request, body))
}
