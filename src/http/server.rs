//! API server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the movie resource routes
//! - Wire up middleware (tracing, request timeout)
//! - Bind the server to a listener
//! - Shut down gracefully on the lifecycle signal

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::movies::{self, MovieStore};

/// HTTP server for the movie resource API.
pub struct ApiServer {
    router: Router,
}

impl ApiServer {
    /// Create a new API server with the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<MovieStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, store: Arc<MovieStore>) -> Router {
        movies::router(store)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "API server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("API server shutting down");
            })
            .await?;

        tracing::info!("API server stopped");
        Ok(())
    }
}
