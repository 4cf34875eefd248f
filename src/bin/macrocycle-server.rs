// ABOUTME: Main server binary for the Macrocycle training tracker
// ABOUTME: Loads configuration, seeds the program catalog on first run, and serves the JSON API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! # Macrocycle Server Binary
//!
//! Starts the training-tracker HTTP API: loads environment configuration,
//! opens (and on first run seeds) the SQLite store, and serves the program,
//! log, and dashboard endpoints.

use anyhow::Result;
use clap::Parser;
use macrocycle::{
    config::environment::ServerConfig,
    database::{seed, Database},
    logging,
    server::{run_http_server, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "macrocycle-server")]
#[command(about = "Macrocycle - personal strength-training tracker API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment, then apply CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = &args.database_url {
        config.database_url =
            macrocycle::config::environment::DatabaseUrl::parse_url(database_url);
    }

    logging::init_from_env()?;

    info!("Starting Macrocycle training tracker");

    // SQLite creates the file, not its parent directory
    if let Some(parent) = config
        .database_url
        .file_path()
        .and_then(|path| path.parent())
    {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let database = Database::new(&config.database_url.to_connection_string()).await?;
    info!("Database initialized: {}", config.database_url);

    let report = seed::ensure_seeded(&database).await?;
    if report.skipped {
        info!("Program catalog already present");
    } else {
        info!(
            phases = report.phases,
            workouts = report.workouts,
            exercises = report.exercises,
            "Program catalog seeded on first run"
        );
    }

    let resources = Arc::new(ServerResources::new(database, Arc::new(config.clone())));

    display_available_endpoints(&config);
    info!("Ready to log training sessions!");

    if let Err(e) = run_http_server(resources, config.http_port).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Program:");
    info!("   GET  http://{host}:{port}/program");
    info!("Session logs:");
    info!("   GET  http://{host}:{port}/logs");
    info!("   POST http://{host}:{port}/logs");
    info!("Dashboard:");
    info!("   GET  http://{host}:{port}/status");
    info!("   GET  http://{host}:{port}/progress");
    info!("Monitoring:");
    info!("   GET  http://{host}:{port}/health");
    info!("   GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
