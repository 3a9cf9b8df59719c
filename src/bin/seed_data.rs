//! Seed data script - loads a SQL dump into the configured database
//!
//! Run with: cargo run --bin seed-data -- [--file <path>]
//!
//! The dump is executed as-is; run it on a freshly migrated database.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use warehouse_api::{config, db, migrator::SeedLoader};

#[derive(Debug, Parser)]
#[command(name = "seed-data", about = "Load demo data from a SQL dump")]
struct Cli {
    /// SQL dump to execute
    #[arg(long, default_value = "docs/db/seed/dump.sql")]
    file: PathBuf,

    /// Database DSN; defaults to the one assembled from configuration
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // No-op when configuration loaded and tracing is already installed.
            config::init_tracing("info", false);
            error!("Seeding failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut cfg = config::load_config().context("failed to load configuration")?;
    config::init_tracing(&cfg.log_level, cfg.log_json);
    if cli.database_url.is_some() {
        cfg.database_url = cli.database_url;
    }

    let pool = db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to the database")?;

    SeedLoader::new(pool.clone()).load(&cli.file).await?;

    db::close_pool(pool).await?;
    Ok(())
}
