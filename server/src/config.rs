//! Server Configuration
//!
//! Read once at startup from `TODO_*` environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 3000;
const DB_FILE: &str = "todo.db";

/// Where items are kept
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// SQLite database at the given path (`:memory:` for a private in-memory db)
    Sqlite(PathBuf),
    /// Process-local map, lost on exit
    Memory,
}

/// Browser origins allowed to call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsConfig {
    Any,
    Origins(Vec<HeaderValue>),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub storage: StorageConfig,
    pub log_dir: PathBuf,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
    NoDataDir,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => {
                write!(f, "Invalid value for {}: {:?}", var, value)
            }
            ConfigError::NoDataDir => write!(f, "No data directory found, set TODO_DATA_DIR"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = match lookup("TODO_HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "TODO_HOST", value })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port_var = lookup("TODO_PORT")
            .map(|v| ("TODO_PORT", v))
            .or_else(|| lookup("PORT").map(|v| ("PORT", v)));
        let port = match port_var {
            Some((var, value)) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var, value })?,
            None => DEFAULT_PORT,
        };

        let data_dir = match lookup("TODO_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir().ok_or(ConfigError::NoDataDir)?.join("todo-app"),
        };

        let storage = match lookup("TODO_STORAGE").as_deref() {
            None | Some("sqlite") => StorageConfig::Sqlite(
                lookup("TODO_DB_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| data_dir.join(DB_FILE)),
            ),
            Some("memory") => StorageConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "TODO_STORAGE",
                    value: other.to_string(),
                })
            }
        };

        let log_dir = lookup("TODO_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("logs"));

        let cors = match lookup("TODO_CORS_ORIGIN") {
            None => CorsConfig::Any,
            Some(value) if value.trim() == "*" => CorsConfig::Any,
            Some(value) => parse_origins(&value)
                .ok_or(ConfigError::Invalid { var: "TODO_CORS_ORIGIN", value })?,
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            storage,
            log_dir,
            cors,
        })
    }
}

/// Comma-separated origins, e.g. `http://localhost:8080,https://todo.example`
fn parse_origins(value: &str) -> Option<CorsConfig> {
    let origins = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| match origin {
            "*" => None,
            _ => HeaderValue::from_str(origin).ok(),
        })
        .collect::<Option<Vec<_>>>()?;
    if origins.is_empty() {
        return None;
    }
    Some(CorsConfig::Origins(origins))
}
