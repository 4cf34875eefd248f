// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database creation, program seeding, and server resource helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Shared test utilities for `macrocycle`
//!
//! Common setup functions to reduce duplication across integration tests.

use macrocycle::config::environment::ServerConfig;
use macrocycle::database::{seed, Database};
use macrocycle::models::{CreateLogRequest, NewLogEntry, ShoulderStatus};
use macrocycle::server::ServerResources;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG environment variable controls test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Empty in-memory database with the schema applied
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// In-memory database with the reference program seeded
pub async fn create_seeded_database() -> Database {
    let database = create_test_database().await;
    seed::ensure_seeded(&database).await.unwrap();
    database
}

/// Server resources over a fresh seeded in-memory database
pub async fn create_test_server_resources() -> Arc<ServerResources> {
    let database = create_seeded_database().await;
    Arc::new(ServerResources::new(
        database,
        Arc::new(ServerConfig::default()),
    ))
}

/// A log request with two realistic entries
pub fn sample_log_request(date: &str, session_type: &str) -> CreateLogRequest {
    CreateLogRequest {
        date: date.parse().unwrap(),
        phase: 1,
        week: 3,
        session_type: session_type.to_owned(),
        shoulder_status: ShoulderStatus::Leve,
        overall_status: 8,
        notes: Some("Felt strong".to_owned()),
        entries: vec![
            NewLogEntry {
                exercise_name: "Incline Dumbbell Press".to_owned(),
                sets_completed: 3,
                weight: 22.5,
                reps_achieved: 12,
                rpe: 7,
                notes: None,
            },
            NewLogEntry {
                exercise_name: "Chest Supported Row".to_owned(),
                sets_completed: 3,
                weight: 40.0,
                reps_achieved: 12,
                rpe: 7,
                notes: Some("Slow eccentric".to_owned()),
            },
        ],
    }
}
