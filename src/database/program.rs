// ABOUTME: Program catalog queries for phases, workouts, and exercises
// ABOUTME: Reconstructs the nested program tree from flat relational rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Program catalog query service
//!
//! The catalog tables are tiny and immutable after seeding, so the program
//! query scans all three tables unbounded and performs the three-level nest
//! in memory, preserving each table's natural scan order.

use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, Phase, ProgramPhase, ProgramWorkout, Workout};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;

/// Program catalog operations manager
pub struct ProgramManager {
    pool: SqlitePool,
}

impl ProgramManager {
    /// Create a new program manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the full program as an ordered tree of phases, each with its
    /// workouts, each with its exercises.
    ///
    /// A parent with no matching children gets an empty child list, never a
    /// missing one.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three table scans fails
    pub async fn get_program(&self) -> AppResult<Vec<ProgramPhase>> {
        let phases = self.all_phases().await?;
        let workouts = self.all_workouts().await?;
        let exercises = self.all_exercises().await?;

        let mut exercises_by_workout: HashMap<i64, Vec<Exercise>> = HashMap::new();
        for exercise in exercises {
            exercises_by_workout
                .entry(exercise.workout_id)
                .or_default()
                .push(exercise);
        }

        let mut workouts_by_phase: HashMap<i64, Vec<ProgramWorkout>> = HashMap::new();
        for workout in workouts {
            let exercises = exercises_by_workout
                .remove(&workout.id)
                .unwrap_or_default();
            workouts_by_phase
                .entry(workout.phase_id)
                .or_default()
                .push(ProgramWorkout { workout, exercises });
        }

        Ok(phases
            .into_iter()
            .map(|phase| {
                let workouts = workouts_by_phase.remove(&phase.id).unwrap_or_default();
                ProgramPhase { phase, workouts }
            })
            .collect())
    }

    /// Scan the phases table in natural order
    async fn all_phases(&self) -> AppResult<Vec<Phase>> {
        let rows = sqlx::query("SELECT id, name, start_week, end_week, description FROM phases")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch phases: {e}")))?;

        rows.iter().map(row_to_phase).collect()
    }

    /// Scan the workouts table in natural order
    async fn all_workouts(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query("SELECT id, phase_id, day_name, description FROM workouts")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to fetch workouts: {e}")))?;

        rows.iter().map(row_to_workout).collect()
    }

    /// Scan the exercises table in natural order
    async fn all_exercises(&self) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT id, workout_id, name, sets, reps, rpe, notes, is_shoulder_risk FROM exercises",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to fetch exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }
}

fn row_to_phase(row: &SqliteRow) -> AppResult<Phase> {
    Ok(Phase {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        start_week: row.try_get("start_week")?,
        end_week: row.try_get("end_week")?,
        description: row.try_get("description")?,
    })
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    Ok(Workout {
        id: row.try_get("id")?,
        phase_id: row.try_get("phase_id")?,
        day_name: row.try_get("day_name")?,
        description: row.try_get("description")?,
    })
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    Ok(Exercise {
        id: row.try_get("id")?,
        workout_id: row.try_get("workout_id")?,
        name: row.try_get("name")?,
        sets: row.try_get("sets")?,
        reps: row.try_get("reps")?,
        rpe: row.try_get("rpe")?,
        notes: row.try_get("notes")?,
        is_shoulder_risk: row.try_get("is_shoulder_risk")?,
    })
}
