// ABOUTME: Program catalog route handlers for the training plan endpoints
// ABOUTME: Serves the fully nested phase/workout/exercise tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Program catalog routes
//!
//! The catalog is read-only over HTTP; it changes only through seeding.

use crate::database::ProgramManager;
use crate::errors::AppError;
use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

/// Program catalog routes
pub struct ProgramRoutes;

impl ProgramRoutes {
    /// Create all program catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/program", get(Self::handle_get_program))
            .with_state(resources)
    }

    /// Return the complete program as nested phases, workouts, and exercises
    async fn handle_get_program(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let program = Self::manager(&resources).get_program().await?;

        Ok((StatusCode::OK, Json(program)).into_response())
    }

    fn manager(resources: &Arc<ServerResources>) -> ProgramManager {
        ProgramManager::new(resources.database.pool().clone())
    }
}
