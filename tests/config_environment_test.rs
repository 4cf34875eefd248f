// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, overrides, and parse failures for every config key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macrocycle::config::environment::{DatabaseUrl, LogLevel, ServerConfig};
use serial_test::serial;
use std::env;

const CONFIG_KEYS: [&str; 4] = [
    "HTTP_PORT",
    "LOG_LEVEL",
    "DATABASE_URL",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_config_env() {
    for key in CONFIG_KEYS {
        env::remove_var(key);
    }
}

// ============================================================================
// from_env Tests (mutate process environment, so they run serially)
// ============================================================================

#[test]
#[serial]
fn test_from_env_applies_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 3000);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(
        config.database_url.to_connection_string(),
        "sqlite:./data/training.db"
    );
    assert_eq!(config.cors_allowed_origins, "*");
}

#[test]
#[serial]
fn test_from_env_honors_overrides() {
    clear_config_env();
    env::set_var("HTTP_PORT", "8080");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173");

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.database_url.is_memory());
    assert_eq!(config.cors_allowed_origins, "http://localhost:5173");

    clear_config_env();
}

#[test]
#[serial]
fn test_from_env_rejects_invalid_port() {
    clear_config_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    assert!(result.is_err());

    clear_config_env();
}

// ============================================================================
// Pure Parsing Tests
// ============================================================================

#[test]
fn test_default_config_matches_the_original_deployment() {
    let config = ServerConfig::default();

    assert_eq!(config.http_port, 3000);
    assert_eq!(
        config
            .database_url
            .file_path()
            .map(|p| p.display().to_string()),
        Some("./data/training.db".to_owned())
    );
}

#[test]
fn test_database_url_round_trip() {
    for url in ["sqlite:./data/training.db", "sqlite::memory:"] {
        assert_eq!(DatabaseUrl::parse_url(url).to_connection_string(), url);
    }
}

#[test]
fn test_log_level_to_tracing_level() {
    assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
    assert_eq!(
        LogLevel::from_str_or_default("nonsense").to_tracing_level(),
        tracing::Level::INFO
    );
}
