// ABOUTME: Session log route handlers for recording and listing training sessions
// ABOUTME: Provides the log history feed and the atomic log-with-entries write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Session log routes
//!
//! Logs are append-only: the API can record and list sessions but never
//! edit or delete them.

use crate::database::LogsManager;
use crate::errors::AppError;
use crate::models::CreateLogRequest;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Response after successfully recording a session
#[derive(Debug, Serialize)]
pub struct CreateLogResponse {
    /// Always true on the success path
    pub success: bool,
    /// Row id of the newly created log
    pub id: i64,
}

/// Session log routes
pub struct LogRoutes;

impl LogRoutes {
    /// Create all session log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/logs", get(Self::handle_get_logs))
            .route("/logs", post(Self::handle_create_log))
            .with_state(resources)
    }

    /// Return the full session history, most recent first, entries nested
    async fn handle_get_logs(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let logs = Self::manager(&resources).get_logs().await?;

        Ok((StatusCode::OK, Json(logs)).into_response())
    }

    /// Record one session and its entries in a single transaction
    async fn handle_create_log(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateLogRequest>,
    ) -> Result<Response, AppError> {
        let id = Self::manager(&resources).create_log(&request).await?;

        info!(
            log_id = id,
            session_type = %request.session_type,
            week = request.week,
            "Session logged"
        );

        Ok((StatusCode::OK, Json(CreateLogResponse { success: true, id })).into_response())
    }

    fn manager(resources: &Arc<ServerResources>) -> LogsManager {
        LogsManager::new(resources.database.pool().clone())
    }
}
