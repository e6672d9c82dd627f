//! service-a
//!
//! ```text
//!     Client Request  ──▶  TraceLayer ─▶ Timeout ─▶ BodyLimit ─▶ Router
//!                                                                  │
//!                                   ┌──────────────┬───────────────┤
//!                                   ▼              ▼               ▼
//!                                /health        /hello           /echo
//!                                                         request → body → reflect
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use service_a::config::load_config;
use service_a::lifecycle::{shutdown_signal, Shutdown};
use service_a::observability::{logging, metrics};
use service_a::HttpServer;

#[derive(Parser)]
#[command(name = "service-a")]
#[command(about = "Health, hello and echo HTTP service", long_about = None)]
struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port (overrides the config file and PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.port)?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation has already checked the address.
        let addr: std::net::SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
