// ABOUTME: Main library entry point for the Macrocycle training tracker
// ABOUTME: Exposes the program store, session logging services, and HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

#![deny(unsafe_code)]

//! # Macrocycle
//!
//! A personal strength-training tracker served as a small HTTP JSON API.
//! A fixed periodized program (phases, workouts, exercises) lives in
//! SQLite; completed sessions are logged against it and summarized for a
//! dashboard (current phase, next workout) and progress charts (volume,
//! session rating, shoulder-pain trend).
//!
//! ## Architecture
//!
//! - **Models**: program catalog types and session-log snapshot types
//! - **Database**: SQLite store with nested read queries and atomic log writes
//! - **Status**: pure derivation of dashboard state from logs + program
//! - **Routes**: axum handlers for the JSON endpoints
//! - **Config**: environment-driven server configuration
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use macrocycle::config::environment::ServerConfig;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! println!("macrocycle-server will bind port {}", config.http_port);
//! # Ok(())
//! # }
//! ```

/// Environment and server configuration
pub mod config;
/// SQLite store, query services, and the reference-program seed
pub mod database;
/// Unified error handling and HTTP error responses
pub mod errors;
/// Structured logging initialization
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// Program catalog and session log data structures
pub mod models;
/// HTTP routes organized by domain
pub mod routes;
/// Shared server state and HTTP serving loop
pub mod server;
/// Pure dashboard-state derivation and progress aggregation
pub mod status;
