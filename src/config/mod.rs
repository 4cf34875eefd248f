// ABOUTME: Configuration management module for server settings
// ABOUTME: Centralizes environment-derived configuration for the binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Configuration module
//!
//! Centralized configuration management:
//!
//! - **Environment**: server configuration from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, LogLevel, ServerConfig};
