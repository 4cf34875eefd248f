// ABOUTME: Database management for the Macrocycle training tracker
// ABOUTME: Owns the SQLite pool, schema migrations, and the query/write managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! # Database Management
//!
//! SQLite storage for the program catalog (phases, workouts, exercises) and
//! the session log history (logs, log entries). The catalog is seeded once
//! and read-only afterwards; logs are append-only. The [`Database`] handle
//! is an explicitly owned resource passed to the query and write managers,
//! never global state.

/// Session log queries and the atomic log write
pub mod logs;
/// Program catalog queries and the nested program tree
pub mod program;
/// Idempotent reference-program seeding
pub mod seed;

pub use logs::LogsManager;
pub use program::ProgramManager;
pub use seed::SeedReport;

use crate::errors::{AppError, AppResult};
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::debug;

/// Database manager owning the connection pool
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// The schema keeps the foreign-key columns as documentation of the
    /// intended relationships; application logic never deletes or updates
    /// parent rows, so no cascade behavior is relied upon.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS phases (
                id INTEGER PRIMARY KEY,
                name TEXT,
                start_week INTEGER,
                end_week INTEGER,
                description TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create phases table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY,
                phase_id INTEGER,
                day_name TEXT,
                description TEXT,
                FOREIGN KEY(phase_id) REFERENCES phases(id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create workouts table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id INTEGER PRIMARY KEY,
                workout_id INTEGER,
                name TEXT,
                sets TEXT,
                reps TEXT,
                rpe TEXT,
                notes TEXT,
                is_shoulder_risk BOOLEAN DEFAULT 0,
                FOREIGN KEY(workout_id) REFERENCES workouts(id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                phase INTEGER,
                week INTEGER,
                session_type TEXT,
                shoulder_status TEXT,
                overall_status INTEGER,
                notes TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create logs table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS log_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                log_id INTEGER,
                exercise_name TEXT,
                sets_completed INTEGER,
                weight REAL,
                reps_achieved INTEGER,
                rpe INTEGER,
                notes TEXT,
                FOREIGN KEY(log_id) REFERENCES logs(id)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create log_entries table: {e}")))?;

        debug!("Database migrations completed");

        Ok(())
    }

    /// Check that the store answers a trivial query, for readiness probes
    ///
    /// # Errors
    ///
    /// Returns an error if the database does not respond
    pub async fn is_ready(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database not ready: {e}")))?;

        Ok(())
    }
}
