// ABOUTME: HTTP middleware for the Macrocycle API surface
// ABOUTME: Provides CORS configuration for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

/// CORS configuration
pub mod cors;

pub use cors::setup_cors;
