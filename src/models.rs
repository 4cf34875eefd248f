// ABOUTME: Core data models for the Macrocycle training tracker
// ABOUTME: Defines the program catalog, session logs, and derived dashboard types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! # Data Models
//!
//! Core data structures for the training program catalog and the session
//! log history.
//!
//! ## Design Principles
//!
//! - **Catalog vs snapshot**: the program catalog ([`Phase`], [`Workout`],
//!   [`Exercise`]) is immutable reference data owned by the seed. A logged
//!   session ([`Log`], [`LogEntry`]) is a point-in-time snapshot: it records
//!   the workout's `day_name` and each exercise's name *by value*, never by
//!   foreign key, so later catalog edits cannot rewrite history.
//! - **Serializable**: every model is the JSON shape the HTTP surface
//!   returns; nested read shapes flatten their row type so the wire format
//!   stays flat.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A multi-week block of the training macrocycle (e.g. hypertrophy,
/// intensification). Seeded once, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Row id, also referenced loosely by `Log::phase`
    pub id: i64,
    /// Display name (e.g. "Adaptation Anatomica")
    pub name: String,
    /// First week of the phase, 1-based
    pub start_week: i64,
    /// Last week of the phase, inclusive
    pub end_week: i64,
    /// Free-text coaching notes for the block
    pub description: String,
}

/// A named training-day template within a phase (e.g. "Upper A").
///
/// `day_name` doubles as the join key logged sessions store in
/// `session_type`; it is a denormalized string match, not a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Row id
    pub id: i64,
    /// Owning phase
    pub phase_id: i64,
    /// Template label, matched by value against `Log::session_type`
    pub day_name: String,
    /// Free-text focus description
    pub description: String,
}

/// A catalog entry prescribing one movement within a workout template.
///
/// `sets`, `reps`, and `rpe` are free text so ranges like "12-15" survive
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Row id
    pub id: i64,
    /// Owning workout template
    pub workout_id: i64,
    /// Movement name, copied by value into log entries at logging time
    pub name: String,
    /// Prescribed set count (free text)
    pub sets: String,
    /// Prescribed rep range (free text)
    pub reps: String,
    /// Prescribed intensity (free text)
    pub rpe: String,
    /// Coaching cue
    pub notes: String,
    /// Flags movements that load the injured shoulder
    pub is_shoulder_risk: bool,
}

/// A phase with its workouts embedded, as returned by the program query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramPhase {
    /// The phase row
    #[serde(flatten)]
    pub phase: Phase,
    /// Workouts whose `phase_id` matches, in catalog order
    pub workouts: Vec<ProgramWorkout>,
}

/// A workout with its exercises embedded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramWorkout {
    /// The workout row
    #[serde(flatten)]
    pub workout: Workout,
    /// Exercises whose `workout_id` matches, in catalog order
    pub exercises: Vec<Exercise>,
}

/// Four-level shoulder-pain indicator tracked per session.
///
/// Stored and serialized as the Spanish level names the original log sheet
/// used. Unknown strings coerce to [`ShoulderStatus::SinMolestias`] rather
/// than erroring, matching the store's loose string typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShoulderStatus {
    /// No discomfort
    #[default]
    SinMolestias,
    /// Mild discomfort
    Leve,
    /// Moderate pain
    Moderado,
    /// Severe pain
    Intenso,
}

impl ShoulderStatus {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SinMolestias => "sin molestias",
            Self::Leve => "leve",
            Self::Moderado => "moderado",
            Self::Intenso => "intenso",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "leve" => Self::Leve,
            "moderado" => Self::Moderado,
            "intenso" => Self::Intenso,
            _ => Self::SinMolestias,
        }
    }

    /// Ordinal pain level for charting: none=0, mild=1, moderate=2, severe=3.
    /// Never persisted.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::SinMolestias => 0,
            Self::Leve => 1,
            Self::Moderado => 2,
            Self::Intenso => 3,
        }
    }
}

impl Serialize for ShoulderStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShoulderStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// One completed, dated training session (header row).
///
/// `phase` holds a [`Phase`] id by value and `session_type` holds the
/// matching workout's `day_name` by value; neither is a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Row id
    pub id: i64,
    /// Session date (ISO-8601 in the store, so date order is string order)
    pub date: NaiveDate,
    /// Phase id the user logged against
    pub phase: i64,
    /// Program week the user logged against, taken verbatim
    pub week: i64,
    /// The workout's `day_name` at logging time
    pub session_type: String,
    /// Shoulder-pain level for the session
    pub shoulder_status: ShoulderStatus,
    /// Overall session rating, 1-10
    pub overall_status: i64,
    /// Free-text session notes
    pub notes: Option<String>,
    /// Insertion timestamp, returned verbatim from the store
    pub created_at: String,
}

/// The recorded performance for one exercise within a session.
///
/// `exercise_name` is a snapshot of the catalog name at logging time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Row id
    pub id: i64,
    /// Owning log row
    pub log_id: i64,
    /// Exercise name copied from the catalog at logging time
    pub exercise_name: String,
    /// Sets actually completed
    pub sets_completed: i64,
    /// Working weight in kilograms
    pub weight: f64,
    /// Reps achieved per set
    pub reps_achieved: i64,
    /// Perceived exertion, 1-10
    pub rpe: i64,
    /// Free-text entry notes
    pub notes: Option<String>,
}

/// A log with its entries embedded, as returned by the log query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogWithEntries {
    /// The session header row
    #[serde(flatten)]
    pub log: Log,
    /// Entries whose `log_id` matches, in insertion order
    pub entries: Vec<LogEntry>,
}

/// Request body for creating one session log.
///
/// Input validation is typed coercion only: wrong JSON types are rejected
/// by deserialization, an absent `entries` field is an empty list, and no
/// numeric range checks are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    /// Session date
    pub date: NaiveDate,
    /// Phase id logged against
    pub phase: i64,
    /// Program week logged against
    pub week: i64,
    /// The chosen workout's `day_name`
    pub session_type: String,
    /// Shoulder-pain level
    pub shoulder_status: ShoulderStatus,
    /// Overall session rating, 1-10
    pub overall_status: i64,
    /// Free-text session notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Per-exercise performance entries, possibly empty
    #[serde(default)]
    pub entries: Vec<NewLogEntry>,
}

/// One per-exercise entry within a [`CreateLogRequest`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLogEntry {
    /// Exercise name snapshot
    pub exercise_name: String,
    /// Sets actually completed
    pub sets_completed: i64,
    /// Working weight in kilograms
    pub weight: f64,
    /// Reps achieved per set
    pub reps_achieved: i64,
    /// Perceived exertion, 1-10
    pub rpe: i64,
    /// Free-text entry notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Dashboard state derived from the log history and the program tree.
///
/// All fields except `week` are absent when the program is empty; `last_log`
/// is additionally absent when no session has been logged yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    /// The phase the user is currently in
    pub phase: Option<ProgramPhase>,
    /// The current program week
    pub week: i64,
    /// The suggested next workout, cycling through the phase's day order
    pub next_workout: Option<ProgramWorkout>,
    /// The most recent session, if any
    pub last_log: Option<LogWithEntries>,
}

/// One chart point of the progress series, oldest-first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Session date
    pub date: NaiveDate,
    /// Total session volume: Σ sets × reps × weight over the entries
    pub volume: f64,
    /// The session's `overall_status` rating
    pub rating: i64,
    /// Shoulder-pain ordinal, 0 (none) to 3 (severe)
    pub shoulder: u8,
}
