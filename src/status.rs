// ABOUTME: Pure training-state derivation from session history and the program catalog
// ABOUTME: Computes current phase, suggested next workout, and progress chart series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! # Training Status Derivation
//!
//! The store keeps no "current position" row. Where the athlete stands in
//! the macrocycle is derived on demand from the most recent session log and
//! the program tree. Everything here is a pure function of its inputs, so
//! the rotation rules are testable without a database.

use crate::models::{LogWithEntries, ProgramPhase, ProgramWorkout, ProgressPoint, SessionStatus};

/// Derive the athlete's current training position.
///
/// `logs` must be sorted most-recent-first, as returned by
/// [`LogsManager::get_logs`](crate::database::LogsManager::get_logs).
///
/// With no history the athlete is placed at the start of the program: first
/// phase, week 1, first workout of that phase. Otherwise the most recent log
/// fixes the phase and week, and the suggestion is the workout after that
/// session in the phase's day rotation, wrapping back to the first day.
///
/// Stale references degrade instead of failing: a log whose phase id is no
/// longer in the catalog falls back to the first phase, and a session type
/// that matches no workout restarts the rotation.
#[must_use]
pub fn derive_status(logs: &[LogWithEntries], program: &[ProgramPhase]) -> SessionStatus {
    let Some(last) = logs.first() else {
        return SessionStatus {
            phase: program.first().cloned(),
            week: 1,
            next_workout: program.first().and_then(|p| p.workouts.first()).cloned(),
            last_log: None,
        };
    };

    let current_phase = program
        .iter()
        .find(|p| p.phase.id == last.log.phase)
        .or_else(|| program.first());

    SessionStatus {
        phase: current_phase.cloned(),
        week: last.log.week,
        next_workout: current_phase
            .and_then(|p| next_in_rotation(p, &last.log.session_type))
            .cloned(),
        last_log: Some(last.clone()),
    }
}

/// Pick the workout after `session_type` in the phase's day order.
///
/// Returns `None` only when the phase has no workout templates.
fn next_in_rotation<'a>(phase: &'a ProgramPhase, session_type: &str) -> Option<&'a ProgramWorkout> {
    let index = phase
        .workouts
        .iter()
        .position(|w| w.workout.day_name == session_type)
        .map_or(0, |last_index| (last_index + 1) % phase.workouts.len());
    phase.workouts.get(index)
}

/// Total volume of one session: sets x reps x weight, summed over entries.
#[must_use]
pub fn session_volume(log: &LogWithEntries) -> f64 {
    log.entries
        .iter()
        .map(|entry| entry.sets_completed as f64 * entry.reps_achieved as f64 * entry.weight)
        .sum()
}

/// Build the progress chart series.
///
/// `logs` must be sorted most-recent-first; the output is reversed so the
/// series reads oldest-first, left to right in time.
#[must_use]
pub fn progress_series(logs: &[LogWithEntries]) -> Vec<ProgressPoint> {
    logs.iter()
        .rev()
        .map(|log| ProgressPoint {
            date: log.log.date,
            volume: session_volume(log),
            rating: log.log.overall_status,
            shoulder: log.log.shoulder_status.ordinal(),
        })
        .collect()
}
