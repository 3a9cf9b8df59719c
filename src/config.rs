use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::env as std_env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
const DEFAULT_ADDRESS: &str = ":8080";
const DEFAULT_DB_HOST: &str = "127.0.0.1:3306";
const DEFAULT_DB_USER: &str = "root";
const DEFAULT_DB_NAME: &str = "warehouse";
const DEFAULT_LOG_LEVEL: &str = "info";
const CONFIG_DIR: &str = "config";

/// Application configuration structure with validation.
///
/// Keys map one-to-one onto unprefixed environment variables
/// (`ADDRESS`, `DB_HOST`, `DB_USER`, `DB_PASS`, `DB_NAME`, ...).
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AppConfig {
    /// Listen address. `:8080` binds every interface, `127.0.0.1:8080` one.
    #[serde(default = "default_address")]
    #[validate(custom = "validate_address")]
    pub address: String,

    /// MySQL server as `host:port`
    #[serde(default = "default_db_host")]
    #[validate(length(min = 1))]
    pub db_host: String,

    #[serde(default = "default_db_user")]
    pub db_user: String,

    #[serde(default)]
    pub db_pass: String,

    #[serde(default = "default_db_name")]
    #[validate(custom = "validate_db_name")]
    pub db_name: String,

    /// Full DSN overriding the `DB_*` settings, e.g. `sqlite://warehouse.db?mode=rwc`
    #[serde(default)]
    pub database_url: Option<String>,

    /// Logging level
    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    #[validate(range(min = 1))]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB timeouts (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,
    #[serde(default = "default_db_idle_timeout_secs")]
    pub db_idle_timeout_secs: u64,
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            db_host: default_db_host(),
            db_user: default_db_user(),
            db_pass: String::new(),
            db_name: default_db_name(),
            database_url: None,
            log_level: default_log_level(),
            log_json: false,
            db_max_connections: default_db_max_connections(),
            db_min_connections: default_db_min_connections(),
            db_connect_timeout_secs: default_db_connect_timeout_secs(),
            db_idle_timeout_secs: default_db_idle_timeout_secs(),
            db_acquire_timeout_secs: default_db_acquire_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> Result<SocketAddr, AppConfigError> {
        resolve_bind_address(&self.address)
            .ok_or_else(|| AppConfigError::Address(self.address.clone()))
    }

    /// DSN of the application database.
    pub fn database_url(&self) -> String {
        match self.database_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("{}/{}", self.server_url(), self.db_name),
        }
    }

    /// DSN of the MySQL server without selecting a database.
    pub fn server_url(&self) -> String {
        let credentials = if self.db_pass.is_empty() {
            encode_userinfo(&self.db_user)
        } else {
            format!(
                "{}:{}",
                encode_userinfo(&self.db_user),
                encode_userinfo(&self.db_pass)
            )
        };
        format!("mysql://{}@{}", credentials, self.db_host)
    }

    /// True when the DSN was assembled from `DB_*` settings rather than given whole.
    pub fn uses_managed_mysql(&self) -> bool {
        self.database_url
            .as_deref()
            .map_or(true, |url| url.trim().is_empty())
    }

    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout_secs)
    }

    pub fn db_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.db_idle_timeout_secs)
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid listen address: {0}")]
    Address(String),
}

/// Accepts `host:port`, `[v6]:port` or the bare `:port` form meaning all interfaces.
pub fn resolve_bind_address(raw: &str) -> Option<SocketAddr> {
    let raw = raw.trim();
    let candidate = if raw.starts_with(':') {
        format!("0.0.0.0{}", raw)
    } else if raw.starts_with("localhost:") {
        raw.replacen("localhost", "127.0.0.1", 1)
    } else {
        raw.to_string()
    };
    candidate.parse().ok()
}

fn encode_userinfo(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}
fn default_db_host() -> String {
    DEFAULT_DB_HOST.to_string()
}
fn default_db_user() -> String {
    DEFAULT_DB_USER.to_string()
}
fn default_db_name() -> String {
    DEFAULT_DB_NAME.to_string()
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
fn default_db_max_connections() -> u32 {
    16
}
fn default_db_min_connections() -> u32 {
    2
}
fn default_db_connect_timeout_secs() -> u64 {
    30
}
fn default_db_idle_timeout_secs() -> u64 {
    600
}
fn default_db_acquire_timeout_secs() -> u64 {
    8
}

fn validate_address(value: &str) -> Result<(), ValidationError> {
    if resolve_bind_address(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("address");
        err.message = Some("Must be host:port or :port".into());
        Err(err)
    }
}

/// The name is interpolated into `CREATE DATABASE`, so only identifier characters pass.
fn validate_db_name(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        let mut err = ValidationError::new("db_name");
        err.message = Some("Must contain only letters, digits and underscores".into());
        Err(err)
    }
}

fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Installs the global `tracing` subscriber. `RUST_LOG`, when set, wins over `level`.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!(
        "{level},warehouse_api={level},tower_http=debug,sqlx=warn",
        level = level
    );
    let filter_directive = std_env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    if json {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .json()
            .try_init();
    } else {
        let _ = fmt()
            .with_env_filter(EnvFilter::new(filter_directive))
            .try_init();
    }
}

/// Loads application configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. `config/default.toml`, if present
/// 3. Environment variables, unprefixed (`ADDRESS`, `DB_HOST`, ...)
///
/// `.env` is expected to have been loaded into the process environment already.
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    build_config(None)
}

fn build_config(env_source: Option<HashMap<String, String>>) -> Result<AppConfig, AppConfigError> {
    let config = Config::builder()
        .set_default("address", DEFAULT_ADDRESS)?
        .set_default("db_host", DEFAULT_DB_HOST)?
        .set_default("db_user", DEFAULT_DB_USER)?
        .set_default("db_name", DEFAULT_DB_NAME)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(Environment::default().try_parsing(true).source(env_source))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!(address = %app_config.address, db_host = %app_config.db_host, "Configuration loaded");
    Ok(app_config)
}
