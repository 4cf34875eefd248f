// ABOUTME: HTTP server assembly for the Macrocycle training tracker
// ABOUTME: Owns the shared resource container, the merged router, and the serve loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! # HTTP Server
//!
//! Wires the route modules over a shared [`ServerResources`] container and
//! runs the axum serve loop. Resources are created once at startup and
//! handed to every handler through router state, never through globals.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::setup_cors;
use crate::routes::{DashboardRoutes, HealthRoutes, LogRoutes, ProgramRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared resource container for dependency injection
///
/// Holds the expensive handles every route needs, so handlers share one
/// database pool instead of each creating their own.
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle shared by all routes
    pub database: Arc<Database>,
    /// Server configuration loaded at startup
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create the resource container with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }
}

/// Build the full application router
///
/// Every route group shares the same resources; tracing and CORS layers
/// wrap the merged router.
pub fn router(resources: &Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(ProgramRoutes::routes(resources.clone()))
        .merge(LogRoutes::routes(resources.clone()))
        .merge(DashboardRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes(resources.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind the HTTP listener and serve until the process is stopped
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server loop fails.
pub async fn run_http_server(resources: Arc<ServerResources>, port: u16) -> Result<()> {
    let app = router(&resources);

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("Failed to bind HTTP port {port}"))?;

    info!("HTTP server listening on port {}", port);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")
}
