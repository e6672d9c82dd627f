//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the health, hello and echo handlers
//! - Wire up middleware (tracing, timeouts, body limits, metrics)
//! - Serve on a bound listener until shutdown is signalled

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::handlers::{echo, health, hello};
use crate::observability::metrics;

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once `shutdown` fires (or its sender is dropped) and in-flight
    /// requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A handle to the router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Build the axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/hello", get(hello))
        .route(
            "/echo",
            get(echo).post(echo).put(echo).delete(echo).patch(echo),
        )
        .route_layer(middleware::from_fn(metrics::track_requests))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.limits.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
}
