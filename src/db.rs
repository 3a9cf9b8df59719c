use crate::config::AppConfig;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Type alias for a database connection pool
pub type DbPool = DatabaseConnection;

/// MySQL server error raised when the selected schema does not exist.
const MYSQL_UNKNOWN_DATABASE: &str = "1049";

/// Configuration for database connection
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Idle timeout duration
    pub idle_timeout: Duration,
    /// Acquire connection timeout
    pub acquire_timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            acquire_timeout: Duration::from_secs(8),
        }
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(cfg: &AppConfig) -> Self {
        Self {
            url: cfg.database_url(),
            max_connections: cfg.db_max_connections,
            min_connections: cfg.db_min_connections,
            connect_timeout: cfg.db_connect_timeout(),
            idle_timeout: cfg.db_idle_timeout(),
            acquire_timeout: cfg.db_acquire_timeout(),
        }
    }
}

/// Establishes a connection pool to the database with custom configuration
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(true);

    debug!(
        max_connections = config.max_connections,
        "Connecting to database"
    );

    let db_pool = Database::connect(opt).await?;

    info!("Database connection pool established successfully");
    Ok(db_pool)
}

/// Establishes a connection pool to the database with default tuning.
pub async fn establish_connection(database_url: &str) -> Result<DbPool, DbErr> {
    let config = DbConfig {
        url: database_url.to_string(),
        ..Default::default()
    };
    establish_connection_with_config(&config).await
}

/// Establish DB pool using AppConfig tuning.
///
/// When the DSN was assembled from `DB_*` settings and the server reports an
/// unknown database, the schema is created and the connection retried once.
pub async fn establish_connection_from_app_config(cfg: &AppConfig) -> Result<DbPool, DbErr> {
    let db_cfg: DbConfig = cfg.into();

    match establish_connection_with_config(&db_cfg).await {
        Ok(pool) => Ok(pool),
        Err(err) if cfg.uses_managed_mysql() && is_unknown_database(&err) => {
            warn!(database = %cfg.db_name, "Database does not exist, creating it");
            create_database(cfg, &db_cfg).await?;
            establish_connection_with_config(&db_cfg).await
        }
        Err(err) => Err(err),
    }
}

fn is_unknown_database(err: &DbErr) -> bool {
    let text = err.to_string();
    text.contains(MYSQL_UNKNOWN_DATABASE) || text.contains("Unknown database")
}

async fn create_database(cfg: &AppConfig, db_cfg: &DbConfig) -> Result<(), DbErr> {
    let server_cfg = DbConfig {
        url: cfg.server_url(),
        max_connections: 1,
        min_connections: 0,
        ..db_cfg.clone()
    };
    let server = establish_connection_with_config(&server_cfg).await?;

    // db_name is restricted to identifier characters by config validation.
    let sql = format!("CREATE DATABASE IF NOT EXISTS `{}`", cfg.db_name);
    let result = server
        .execute(Statement::from_string(DbBackend::MySql, sql))
        .await;
    if let Err(e) = server.close().await {
        warn!(error = %e, "Failed to close bootstrap connection");
    }
    result.map(|_| ())
}

/// Checks if the database connection is active
pub async fn check_connection(pool: &DbPool) -> Result<(), DbErr> {
    let start = std::time::Instant::now();
    let result = pool.ping().await;

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => debug!("Database connection check successful in {:?}", elapsed),
        Err(e) => error!(
            "Database connection check failed after {:?}: {}",
            elapsed, e
        ),
    }
    result
}

/// Closes the database connection pool
pub async fn close_pool(pool: DbPool) -> Result<(), DbErr> {
    info!("Closing database connection pool");
    pool.close().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_tuning_carries_over() {
        let cfg = AppConfig {
            db_max_connections: 3,
            db_acquire_timeout_secs: 2,
            ..AppConfig::default()
        };
        let db_cfg = DbConfig::from(&cfg);
        assert_eq!(db_cfg.url, "mysql://root@127.0.0.1:3306/warehouse");
        assert_eq!(db_cfg.max_connections, 3);
        assert_eq!(db_cfg.acquire_timeout, Duration::from_secs(2));
    }

    #[test]
    fn recognizes_unknown_database_errors() {
        let err = DbErr::Conn(sea_orm::RuntimeErr::Internal(
            "error returned from database: 1049 (42000): Unknown database 'warehouse'".into(),
        ));
        assert!(is_unknown_database(&err));
        assert!(!is_unknown_database(&DbErr::Custom("timeout".into())));
    }

    #[tokio::test]
    async fn connects_pings_and_closes_sqlite() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        assert!(check_connection(&pool).await.is_ok());
        assert!(close_pool(pool).await.is_ok());
    }
}
