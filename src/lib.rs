//! # mailvariant Worker
//!
//! Generates alternate email addresses that route to the same mailbox:
//!
//! - **Dot variants**: every way of inserting `.` between local-part characters,
//!   for providers that ignore dots (Gmail)
//! - **Plus variants**: `local+N@domain` over a counter range plus custom
//!   `local+tag@domain` tags, for providers that ignore `+suffix`
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        Worker Service                         │
//! ├───────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌─────────────┐  ┌────────────────────────┐ │
//! │  │  API Layer  │  │   Service   │  │  Generators            │ │
//! │  │  (Axum)     │→ │   Layer     │→ │  (dot, plus; pure)     │ │
//! │  └─────────────┘  └─────────────┘  └────────────────────────┘ │
//! └───────────────────────────────────────────────────────────────┘
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod telemetry;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

/// Run the mailvariant worker service.
///
/// This function:
/// 1. Initializes logging
/// 2. Installs the Prometheus recorder (if enabled)
/// 3. Creates the services and router
/// 4. Starts the HTTP server
/// 5. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The metrics recorder cannot be installed
/// - HTTP server fails to bind
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting mailvariant worker"
    );

    let config = Arc::new(config);
    let mut state = AppState::new(Arc::clone(&config));

    if config.observability.metrics_enabled {
        let handle = telemetry::install_recorder()?;
        state = state.with_metrics(handle);
        info!(path = %config.observability.metrics_path, "Metrics recorder installed");
    }

    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
