// ABOUTME: Dashboard route handlers for the derived training state and progress charts
// ABOUTME: Computes current phase, suggested next workout, and the volume/rating/pain series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Dashboard routes
//!
//! Nothing here is stored: both endpoints load the log history and the
//! program tree, then derive their responses with the pure functions in
//! [`crate::status`].

use crate::database::{LogsManager, ProgramManager};
use crate::errors::AppError;
use crate::server::ServerResources;
use crate::status::{derive_status, progress_series};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/status", get(Self::handle_get_status))
            .route("/progress", get(Self::handle_get_progress))
            .with_state(resources)
    }

    /// Return the athlete's current phase, week, and suggested next workout
    async fn handle_get_status(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let logs = LogsManager::new(resources.database.pool().clone())
            .get_logs()
            .await?;
        let program = ProgramManager::new(resources.database.pool().clone())
            .get_program()
            .await?;

        let status = derive_status(&logs, &program);

        Ok((StatusCode::OK, Json(status)).into_response())
    }

    /// Return the progress chart series, oldest session first
    async fn handle_get_progress(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let logs = LogsManager::new(resources.database.pool().clone())
            .get_logs()
            .await?;

        let series = progress_series(&logs);

        Ok((StatusCode::OK, Json(series)).into_response())
    }
}
