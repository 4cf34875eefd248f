// ABOUTME: Reference-program seeding for the Macrocycle training tracker
// ABOUTME: Inserts the 18-week periodized catalog once, guarded by a phase count check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! # Reference Program Seeding
//!
//! The program catalog ships as compiled-in constants and is written to the
//! database exactly once. [`ensure_seeded`] is safe to call on every server
//! startup: it checks the `phases` row count and skips seeding when the
//! catalog already exists. [`force_reseed`] replaces the catalog wholesale
//! and is only reachable through the `seed-program` binary.

use super::Database;
use crate::errors::{AppError, AppResult};
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Phases inserted
    pub phases: usize,
    /// Workouts inserted
    pub workouts: usize,
    /// Exercises inserted
    pub exercises: usize,
    /// True when the catalog already existed and nothing was written
    pub skipped: bool,
}

impl SeedReport {
    const fn skipped() -> Self {
        Self {
            phases: 0,
            workouts: 0,
            exercises: 0,
            skipped: true,
        }
    }
}

/// An exercise prescription within a seeded workout
struct SeedExercise {
    name: &'static str,
    sets: &'static str,
    reps: &'static str,
    rpe: &'static str,
    notes: &'static str,
    shoulder_risk: bool,
}

/// A workout day within a seeded phase
struct SeedWorkout {
    day_name: &'static str,
    description: &'static str,
    exercises: &'static [SeedExercise],
}

/// A training phase in the reference program
struct SeedPhase {
    name: &'static str,
    start_week: i64,
    end_week: i64,
    description: &'static str,
    workouts: &'static [SeedWorkout],
}

/// The 18-week reference program. Phases 3 and 4 carry no workout templates
/// yet; their sessions are programmed week to week.
const REFERENCE_PROGRAM: &[SeedPhase] = &[
    SeedPhase {
        name: "Adaptation Anatomica",
        start_week: 1,
        end_week: 6,
        description: "Focus on tendon health, higher reps, controlled tempo. 4 days/week.",
        workouts: &[
            SeedWorkout {
                day_name: "Upper A",
                description: "Focus on chest/back width",
                exercises: &[
                    SeedExercise {
                        name: "Incline Dumbbell Press",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Neutral grip for shoulder safety",
                        shoulder_risk: true,
                    },
                    SeedExercise {
                        name: "Chest Supported Row",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Squeeze at top",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Overhead Press (Dumbbell)",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Seated, neutral grip",
                        shoulder_risk: true,
                    },
                    SeedExercise {
                        name: "Lat Pulldown",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Wide grip",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Lateral Raises",
                        sets: "3",
                        reps: "15-20",
                        rpe: "8",
                        notes: "Control the eccentric",
                        shoulder_risk: true,
                    },
                ],
            },
            SeedWorkout {
                day_name: "Lower A",
                description: "Quad focus",
                exercises: &[
                    SeedExercise {
                        name: "Leg Press",
                        sets: "3",
                        reps: "15-20",
                        rpe: "7",
                        notes: "Feet low on platform",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Goblet Squat",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Heels elevated",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Leg Extension",
                        sets: "3",
                        reps: "15-20",
                        rpe: "8",
                        notes: "Pause at top",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Seated Calf Raise",
                        sets: "4",
                        reps: "15-20",
                        rpe: "8",
                        notes: "Full stretch",
                        shoulder_risk: false,
                    },
                ],
            },
            SeedWorkout {
                day_name: "Upper B",
                description: "Shoulder/Arm focus",
                exercises: &[
                    SeedExercise {
                        name: "Machine Chest Press",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Controlled tempo",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Cable Row",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Neutral grip",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Face Pulls",
                        sets: "4",
                        reps: "15-20",
                        rpe: "8",
                        notes: "External rotation focus",
                        shoulder_risk: true,
                    },
                    SeedExercise {
                        name: "Tricep Pushdown",
                        sets: "3",
                        reps: "12-15",
                        rpe: "8",
                        notes: "Rope attachment",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Bicep Curl (Dumbbell)",
                        sets: "3",
                        reps: "12-15",
                        rpe: "8",
                        notes: "Supinate at top",
                        shoulder_risk: false,
                    },
                ],
            },
            SeedWorkout {
                day_name: "Lower B",
                description: "Hamstring/Glute focus",
                exercises: &[
                    SeedExercise {
                        name: "Romanian Deadlift (Dumbbell)",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Soft knees",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Leg Curl (Seated)",
                        sets: "3",
                        reps: "15-20",
                        rpe: "8",
                        notes: "Control eccentric",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Walking Lunges",
                        sets: "3",
                        reps: "12-15",
                        rpe: "7",
                        notes: "Steps per leg",
                        shoulder_risk: false,
                    },
                    SeedExercise {
                        name: "Plank",
                        sets: "3",
                        reps: "60s",
                        rpe: "8",
                        notes: "Core stability",
                        shoulder_risk: false,
                    },
                ],
            },
        ],
    },
    SeedPhase {
        name: "Accumulation / Hypertrophy",
        start_week: 7,
        end_week: 10,
        description: "Volume increase. 5 days/week (Push/Pull/Legs/Upper/Lower).",
        workouts: &[SeedWorkout {
            day_name: "Push",
            description: "Chest/Shoulders/Triceps",
            exercises: &[
                SeedExercise {
                    name: "Bench Press (Dumbbell)",
                    sets: "4",
                    reps: "8-12",
                    rpe: "8",
                    notes: "Flat bench",
                    shoulder_risk: true,
                },
                SeedExercise {
                    name: "Incline Machine Press",
                    sets: "3",
                    reps: "10-12",
                    rpe: "8",
                    notes: "",
                    shoulder_risk: false,
                },
                SeedExercise {
                    name: "Lateral Raises (Cable)",
                    sets: "4",
                    reps: "12-15",
                    rpe: "9",
                    notes: "Behind back",
                    shoulder_risk: true,
                },
            ],
        }],
    },
    SeedPhase {
        name: "Intensification",
        start_week: 11,
        end_week: 14,
        description: "Higher intensity, lower volume. 5 days/week.",
        workouts: &[],
    },
    SeedPhase {
        name: "Realization",
        start_week: 15,
        end_week: 18,
        description: "Peaking and deload. 5 days/week.",
        workouts: &[],
    },
];

/// Seed the reference program if the catalog is empty
///
/// # Errors
///
/// Returns an error if the count query or any insert fails.
pub async fn ensure_seeded(db: &Database) -> AppResult<SeedReport> {
    let existing: i64 = sqlx::query_scalar("SELECT count(*) FROM phases")
        .fetch_one(db.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to count phases: {e}")))?;

    if existing > 0 {
        debug!(phases = existing, "Program catalog already seeded, skipping");
        return Ok(SeedReport::skipped());
    }

    info!("Seeding reference program catalog");
    insert_reference_program(db).await
}

/// Drop the existing catalog and seed it again
///
/// Session logs are untouched; only the phases, workouts, and exercises
/// tables are replaced.
///
/// # Errors
///
/// Returns an error if any delete or insert fails.
pub async fn force_reseed(db: &Database) -> AppResult<SeedReport> {
    let mut tx = db
        .pool()
        .begin()
        .await
        .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

    // Children first to satisfy foreign keys
    for table in ["exercises", "workouts", "phases"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to clear {table}: {e}")))?;
    }

    let report = insert_phases(&mut tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

    info!(
        phases = report.phases,
        workouts = report.workouts,
        exercises = report.exercises,
        "Program catalog reseeded"
    );
    Ok(report)
}

async fn insert_reference_program(db: &Database) -> AppResult<SeedReport> {
    let mut tx = db
        .pool()
        .begin()
        .await
        .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

    let report = insert_phases(&mut tx).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit transaction: {e}")))?;

    info!(
        phases = report.phases,
        workouts = report.workouts,
        exercises = report.exercises,
        "Program catalog seeded"
    );
    Ok(report)
}

async fn insert_phases(tx: &mut Transaction<'_, Sqlite>) -> AppResult<SeedReport> {
    let mut report = SeedReport {
        phases: 0,
        workouts: 0,
        exercises: 0,
        skipped: false,
    };

    for phase in REFERENCE_PROGRAM {
        let phase_id = sqlx::query(
            "INSERT INTO phases (name, start_week, end_week, description) VALUES ($1, $2, $3, $4)",
        )
        .bind(phase.name)
        .bind(phase.start_week)
        .bind(phase.end_week)
        .bind(phase.description)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert phase: {e}")))?
        .last_insert_rowid();
        report.phases += 1;

        for workout in phase.workouts {
            let workout_id = sqlx::query(
                "INSERT INTO workouts (phase_id, day_name, description) VALUES ($1, $2, $3)",
            )
            .bind(phase_id)
            .bind(workout.day_name)
            .bind(workout.description)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert workout: {e}")))?
            .last_insert_rowid();
            report.workouts += 1;

            for exercise in workout.exercises {
                sqlx::query(
                    "INSERT INTO exercises (workout_id, name, sets, reps, rpe, notes, is_shoulder_risk) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7)",
                )
                .bind(workout_id)
                .bind(exercise.name)
                .bind(exercise.sets)
                .bind(exercise.reps)
                .bind(exercise.rpe)
                .bind(exercise.notes)
                .bind(exercise.shoulder_risk)
                .execute(&mut **tx)
                .await
                .map_err(|e| AppError::database(format!("Failed to insert exercise: {e}")))?;
                report.exercises += 1;
            }
        }

        debug!(phase = phase.name, "Seeded phase");
    }

    Ok(report)
}
