//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware)
//!     → handlers (health / hello / echo)
//!
//! /echo:
//!     → request.rs (method, path, query, headers, buffered body)
//!     → body.rs (Structured | Raw | Absent)
//!     → headers.rs (drop host, content-length)
//!     → reflect.rs (EchoResponse)
//!     → JSON response
//! ```

pub mod body;
pub mod headers;
pub mod reflect;
pub mod request;
pub mod server;

pub use body::NormalizedBody;
pub use reflect::{EchoResponse, SERVICE_NAME};
pub use request::IncomingRequest;
pub use server::HttpServer;
