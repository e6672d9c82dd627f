//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! signals.rs: SIGTERM / Ctrl+C
//!     → shutdown.rs: Shutdown::trigger
//!     → HttpServer::run stops accepting, drains, returns
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_signal;
