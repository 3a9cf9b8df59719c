//! Applies the SQL migrations in `docs/db/migrations` to the configured database.
//!
//! Run with: cargo run --bin migration -- [--dir <path>] [--status]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use warehouse_api::{config, db, migrator::SqlMigrator};

#[derive(Debug, Parser)]
#[command(name = "migration", about = "Apply pending SQL migrations")]
struct Cli {
    /// Directory holding the `*.sql` migration files
    #[arg(long, default_value = "docs/db/migrations")]
    dir: PathBuf,

    /// List applied and pending migrations without applying anything
    #[arg(long)]
    status: bool,

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
            error!("Migration failed: {:#}", e);
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
    let migrator = SqlMigrator::new(pool.clone(), &cli.dir);

    if cli.status {
        let status = migrator.status().await?;
        for file in &status.applied {
            println!("applied  {file}");
        }
        for file in &status.pending {
            println!("pending  {file}");
        }
        info!(
            applied = status.applied.len(),
            pending = status.pending.len(),
            "Migration status"
        );
    } else {
        let applied = migrator.run().await?;
        for file in &applied {
            println!("applied  {file}");
        }
    }

    db::close_pool(pool).await?;
    Ok(())
}
