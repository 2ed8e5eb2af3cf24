use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::matcher::CaseFolding;

/// Application-level constants
pub const APP_NAME: &str = "PharmaQuest";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_PORT: u16 = 3000;
pub const DB_FILE_NAME: &str = "pharma.db";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Longest chat message accepted, in bytes.
pub const MAX_CHAT_MESSAGE_LEN: usize = 2000;

pub const ENV_ADDR: &str = "PHARMAQUEST_ADDR";
pub const ENV_DB: &str = "PHARMAQUEST_DB";
pub const ENV_PUBLIC_DIR: &str = "PHARMAQUEST_PUBLIC_DIR";
pub const ENV_SEED: &str = "PHARMAQUEST_SEED";
pub const ENV_SEARCH_CASE: &str = "PHARMAQUEST_SEARCH_CASE";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "pharmaquest=info,pharmaquest_lib=info,tower_http=warn"
}

/// Get the application data directory.
/// Platform local data dir + `PharmaQuest/`, falling back to the working directory.
pub fn app_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default location of the catalog database.
pub fn default_db_path() -> PathBuf {
    app_data_dir().join(DB_FILE_NAME)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub public_dir: PathBuf,
    /// Re-seed the catalog on startup. When false, the existing table is served as-is.
    pub seed_on_start: bool,
    pub search_case: CaseFolding,
    pub max_message_len: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            db_path: default_db_path(),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            seed_on_start: true,
            search_case: CaseFolding::Exact,
            max_message_len: MAX_CHAT_MESSAGE_LEN,
        }
    }
}

impl ServerConfig {
    /// Read settings from `PHARMAQUEST_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_ADDR) {
            config.bind_addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidValue {
                    key: ENV_ADDR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }
        if let Some(value) = lookup(ENV_DB) {
            if !value.trim().is_empty() {
                config.db_path = PathBuf::from(value.trim());
            }
        }
        if let Some(value) = lookup(ENV_PUBLIC_DIR) {
            if !value.trim().is_empty() {
                config.public_dir = PathBuf::from(value.trim());
            }
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.seed_on_start = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_SEED,
                value: value.clone(),
                reason: "expected true/false".into(),
            })?;
        }
        if let Some(value) = lookup(ENV_SEARCH_CASE) {
            config.search_case = value.parse().map_err(|reason| ConfigError::InvalidValue {
                key: ENV_SEARCH_CASE,
                value: value.clone(),
                reason,
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
