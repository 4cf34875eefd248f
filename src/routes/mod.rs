// ABOUTME: Route module organization for the Macrocycle HTTP endpoints
// ABOUTME: Groups route definitions by domain with thin handlers over the database managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Route modules for the Macrocycle server
//!
//! Each domain module owns its route definitions and thin handler functions
//! that delegate to the database managers and the status derivation. All
//! routes share the same [`ServerResources`](crate::server::ServerResources)
//! state.

/// Dashboard status and progress chart routes
pub mod dashboard;
/// Health check and readiness routes
pub mod health;
/// Session log routes
pub mod logs;
/// Program catalog routes
pub mod program;

pub use dashboard::DashboardRoutes;
pub use health::HealthRoutes;
pub use logs::LogRoutes;
pub use program::ProgramRoutes;
