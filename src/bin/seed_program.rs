// ABOUTME: Reference-program seeding utility for the Macrocycle tracker
// ABOUTME: Writes the 18-week periodized catalog into the database from the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

//! Reference-program seeder for the Macrocycle tracker.
//!
//! The server seeds the catalog automatically on first run; this binary
//! exists for provisioning a database ahead of time and for rebuilding a
//! catalog after manual edits.
//!
//! Usage:
//! ```bash
//! # Seed the program catalog (uses DATABASE_URL from environment)
//! cargo run --bin seed-program
//!
//! # Override database URL
//! cargo run --bin seed-program -- --database-url sqlite:./data/training.db
//!
//! # Verbose output
//! cargo run --bin seed-program -- -v
//!
//! # Replace an existing catalog (session logs are kept)
//! cargo run --bin seed-program -- --force
//! ```

use anyhow::Result;
use clap::Parser;
use macrocycle::config::environment::DatabaseUrl;
use macrocycle::database::{seed, Database};
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-program",
    about = "Macrocycle reference-program seeder",
    long_about = "Write the 18-week periodized training program into the catalog tables"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Replace the catalog even if it is already seeded
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Macrocycle Reference Program Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite:./data/training.db".into());

    // SQLite creates the file, not its parent directory
    let parsed = DatabaseUrl::parse_url(&database_url);
    if let Some(parent) = parsed.file_path().and_then(|path| path.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Connecting to database: {}", database_url);
    let database = Database::new(&database_url).await?;

    let report = if args.force {
        seed::force_reseed(&database).await?
    } else {
        seed::ensure_seeded(&database).await?
    };

    if report.skipped {
        info!("Program catalog already seeded. Use --force to replace it.");
        return Ok(());
    }

    info!("");
    info!("=== Seeding Complete ===");
    info!("Created {} phases", report.phases);
    info!("Created {} workouts", report.workouts);
    info!("Created {} exercises", report.exercises);

    Ok(())
}
