//! Liveness check.

use axum::Json;
use serde::Serialize;

use crate::http::reflect::SERVICE_NAME;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Always healthy while the process can answer HTTP.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}
