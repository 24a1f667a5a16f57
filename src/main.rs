//! Movie Catalog HTTP Service
//!
//! A small movie catalog service built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌──────────────────────────────────────────────┐
//!                       │                  MOVIE-API                   │
//!                       │                                              │
//!    REST Client        │  ┌──────────┐   ┌──────────┐   ┌─────────┐  │
//!    ───────────────────┼─▶│   api    │──▶│  movies  │──▶│  store  │  │
//!                       │  │  server  │   │ handlers │   │ (memory)│  │
//!                       │  └──────────┘   └──────────┘   └─────────┘  │
//!                       │                                              │
//!    Raw HTTP Client    │  ┌──────────────────────────┐                │
//!    ───────────────────┼─▶│   bootstrap listener     │                │
//!                       │  │ (method, path) dispatch  │                │
//!                       │  └──────────────────────────┘                │
//!                       │                                              │
//!                       │  ┌────────────────────────────────────────┐  │
//!                       │  │         Cross-Cutting Concerns         │  │
//!                       │  │  ┌────────┐ ┌───────────┐ ┌─────────┐  │  │
//!                       │  │  │ config │ │ observa-  │ │lifecycle│  │  │
//!                       │  │  │        │ │ bility    │ │shutdown │  │  │
//!                       │  │  └────────┘ └───────────┘ └─────────┘  │  │
//!                       │  └────────────────────────────────────────┘  │
//!                       └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use movie_api::config::{self, AppConfig};
use movie_api::http::{bootstrap, ApiServer};
use movie_api::lifecycle::{signals, Shutdown};
use movie_api::movies::MovieStore;
use movie_api::observability::logging;

#[derive(Parser)]
#[command(name = "movie-api")]
#[command(about = "In-memory movie catalog HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration (compiled-in defaults when no file is given)
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability);

    tracing::info!("movie-api v0.1.0 starting");
    tracing::info!(
        api_address = %config.api.bind_address,
        bootstrap_address = %config.bootstrap.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // The collection is reseeded on every start; there is no persistence.
    let store = Arc::new(MovieStore::with_seed());

    let shutdown = Shutdown::new();

    // Spawn the bootstrap listener alongside the API server
    if config.bootstrap.enabled {
        let listener = TcpListener::bind(&config.bootstrap.bind_address).await?;
        tracing::info!(
            address = %listener.local_addr()?,
            "Bootstrap listener bound"
        );

        let rx = shutdown.subscribe();
        tokio::spawn(async move {
            if let Err(e) = bootstrap::run(listener, rx).await {
                tracing::error!(error = %e, "Bootstrap listener failed");
            }
        });
    }

    // Bind API listener
    let listener = TcpListener::bind(&config.api.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for API requests"
    );

    // Trigger coordinated shutdown on Ctrl+C
    let api_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        shutdown.trigger();
    });

    // Create and run the API server
    let server = ApiServer::new(config, store);
    server.run(listener, api_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
