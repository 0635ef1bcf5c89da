// src/config.rs
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Where listings are persisted.
#[derive(Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Sqlite {
        db_path: PathBuf,
        schema_path: String,
    },
    Rest {
        base_url: String,
        api_key: String,
        timeout: Duration,
    },
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreConfig::Sqlite {
                db_path,
                schema_path,
            } => f
                .debug_struct("Sqlite")
                .field("db_path", db_path)
                .field("schema_path", schema_path)
                .finish(),
            StoreConfig::Rest {
                base_url, timeout, ..
            } => f
                .debug_struct("Rest")
                .field("base_url", base_url)
                .field("api_key", &"[redacted]")
                .field("timeout", timeout)
                .finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Location of the hosting page; share links are built from it.
    pub public_url: Url,
    pub store: StoreConfig,
    pub log_level: String,
}

/// Load configuration from the process environment, reading `.env` first
/// when one exists.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Parsing and validation, decoupled from the real environment so tests
/// can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let bind_addr = or_default("LISTING_BIND_ADDR", "127.0.0.1:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("LISTING_BIND_ADDR", e.to_string()))?;

    let max_workers = or_default("LISTING_MAX_WORKERS", "8")
        .parse::<usize>()
        .map_err(|e| invalid("LISTING_MAX_WORKERS", e.to_string()))?;
    if max_workers == 0 {
        return Err(invalid("LISTING_MAX_WORKERS", "must be at least 1".into()));
    }

    let public_url = or_default("LISTING_PUBLIC_URL", &format!("http://{bind_addr}/"));
    let public_url =
        Url::parse(&public_url).map_err(|e| invalid("LISTING_PUBLIC_URL", e.to_string()))?;
    if public_url.cannot_be_a_base() {
        return Err(invalid("LISTING_PUBLIC_URL", "must be an absolute http(s) URL".into()));
    }

    let store = match or_default("LISTING_STORE", "sqlite").as_str() {
        "sqlite" => StoreConfig::Sqlite {
            db_path: PathBuf::from(or_default("LISTING_DB_PATH", "listings.sqlite3")),
            schema_path: or_default("LISTING_SCHEMA_PATH", "sql/schema.sql"),
        },
        "rest" => {
            let timeout_secs = or_default("LISTING_REST_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .map_err(|e| invalid("LISTING_REST_TIMEOUT_SECS", e.to_string()))?;
            StoreConfig::Rest {
                base_url: require("LISTING_REST_URL")?,
                api_key: require("LISTING_REST_KEY")?,
                timeout: Duration::from_secs(timeout_secs),
            }
        }
        other => {
            return Err(invalid(
                "LISTING_STORE",
                format!("expected `sqlite` or `rest`, got `{other}`"),
            ))
        }
    };

    Ok(AppConfig {
        bind_addr,
        max_workers,
        public_url,
        store,
        log_level: or_default("LISTING_LOG", "info"),
    })
}
