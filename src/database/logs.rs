// ABOUTME: Session log queries and the atomic log write
// ABOUTME: Reads logs date-descending with nested entries and inserts sessions transactionally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Session log query and write service
//!
//! Reads return logs newest-first with their entries nested in memory.
//! The write inserts one log header plus all of its entries inside a single
//! transaction: either the whole session becomes visible or none of it does.
//! A partial session (header without entries, or the reverse) would corrupt
//! the volume series, so the all-or-nothing boundary is a hard contract, not
//! an implementation detail.

use crate::errors::{AppError, AppResult};
use crate::models::{CreateLogRequest, Log, LogEntry, LogWithEntries, ShoulderStatus};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use tracing::debug;

/// Session log operations manager
pub struct LogsManager {
    pool: SqlitePool,
}

impl LogsManager {
    /// Create a new logs manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch all logs ordered by date descending, each with its entries
    /// nested in insertion order.
    ///
    /// Date ties keep the store's native order. Dates are ISO-8601 text in
    /// the store, so the string sort is the chronological sort.
    ///
    /// # Errors
    ///
    /// Returns an error if either table scan fails
    pub async fn get_logs(&self) -> AppResult<Vec<LogWithEntries>> {
        let log_rows = sqlx::query(
            r"
            SELECT id, date, phase, week, session_type, shoulder_status,
                   overall_status, notes, created_at
            FROM logs
            ORDER BY date DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch logs: {e}")))?;

        let entry_rows = sqlx::query(
            r"
            SELECT id, log_id, exercise_name, sets_completed, weight,
                   reps_achieved, rpe, notes
            FROM log_entries
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch log entries: {e}")))?;

        let mut entries_by_log: HashMap<i64, Vec<LogEntry>> = HashMap::new();
        for row in &entry_rows {
            let entry = row_to_log_entry(row)?;
            entries_by_log.entry(entry.log_id).or_default().push(entry);
        }

        log_rows
            .iter()
            .map(|row| {
                let log = row_to_log(row)?;
                let entries = entries_by_log.remove(&log.id).unwrap_or_default();
                Ok(LogWithEntries { log, entries })
            })
            .collect()
    }

    /// Insert one session log with all of its entries atomically and return
    /// the new log's id.
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; the transaction rolls back and
    /// no partial rows remain visible.
    pub async fn create_log(&self, request: &CreateLogRequest) -> AppResult<i64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let result = sqlx::query(
            r"
            INSERT INTO logs (date, phase, week, session_type, shoulder_status,
                              overall_status, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(request.date)
        .bind(request.phase)
        .bind(request.week)
        .bind(&request.session_type)
        .bind(request.shoulder_status.as_str())
        .bind(request.overall_status)
        .bind(request.notes.as_deref())
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert log: {e}")))?;

        let log_id = result.last_insert_rowid();

        for entry in &request.entries {
            sqlx::query(
                r"
                INSERT INTO log_entries (log_id, exercise_name, sets_completed,
                                         weight, reps_achieved, rpe, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                ",
            )
            .bind(log_id)
            .bind(&entry.exercise_name)
            .bind(entry.sets_completed)
            .bind(entry.weight)
            .bind(entry.reps_achieved)
            .bind(entry.rpe)
            .bind(entry.notes.as_deref())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert log entry: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit log transaction: {e}")))?;

        debug!(
            log_id,
            entries = request.entries.len(),
            "Session log created"
        );

        Ok(log_id)
    }
}

fn row_to_log(row: &SqliteRow) -> AppResult<Log> {
    let shoulder_status: String = row.try_get("shoulder_status")?;

    Ok(Log {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        phase: row.try_get("phase")?,
        week: row.try_get("week")?,
        session_type: row.try_get("session_type")?,
        shoulder_status: ShoulderStatus::parse(&shoulder_status),
        overall_status: row.try_get("overall_status")?,
        notes: row.try_get("notes")?,
        created_at: row.try_get("created_at")?,
    })
}

fn row_to_log_entry(row: &SqliteRow) -> AppResult<LogEntry> {
    Ok(LogEntry {
        id: row.try_get("id")?,
        log_id: row.try_get("log_id")?,
        exercise_name: row.try_get("exercise_name")?,
        sets_completed: row.try_get("sets_completed")?,
        weight: row.try_get("weight")?,
        reps_achieved: row.try_get("reps_achieved")?,
        rpe: row.try_get("rpe")?,
        notes: row.try_get("notes")?,
    })
}
