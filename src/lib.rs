//! service-a: a minimal HTTP service with health, hello and echo routes.

pub mod config;
pub mod handlers;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
