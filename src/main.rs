use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};

use warehouse_api as api;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();

    let cfg = match api::config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            api::config::init_tracing("info", false);
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    api::config::init_tracing(&cfg.log_level, cfg.log_json);

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server terminated: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: api::config::AppConfig) -> anyhow::Result<()> {
    let addr = cfg.bind_address()?;

    let db_pool = api::db::establish_connection_from_app_config(&cfg)
        .await
        .context("failed to connect to the database")?;
    let db_arc = Arc::new(db_pool);

    api::handlers::health::init_start_time();
    let app_state = api::AppState::new(db_arc.clone(), cfg);
    let app = api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("warehouse-api listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped, releasing database pool");
    // Handlers and services drop their clones during shutdown.
    match Arc::try_unwrap(db_arc) {
        Ok(pool) => api::db::close_pool(pool)
            .await
            .context("failed to close database pool")?,
        Err(_) => warn!("Database pool still shared at shutdown; dropping it instead"),
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
