//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file exists either, uses built-in defaults
//!
//! ## Environment Variables
//! - `BITEREC_DB_PATH`: Database file path
//! - `BITEREC_DB_POOL_SIZE`: Connection pool size
//! - `BITEREC_API_BASE_URL`: Base URL of the remote API
//! - `BITEREC_API_TIMEOUT_SECS`: Per-request timeout; unset waits on the
//!   transport
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml`
//! 2. `./biterec.json` or `./biterec.toml`
//! 3. The same names one and two directories up
//! 4. Relative to the executable location

use std::path::{Path, PathBuf};

use biterec_domain::{ApiConfig, BiteRecError, Config, DatabaseConfig, Result};

/// Load configuration with automatic fallback strategy
///
/// Environment variables win; a config file fills in when they are absent;
/// built-in defaults apply when neither exists.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match load_from_file(None) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::debug!(error = ?e, "No config file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `BiteRecError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("BITEREC_DB_PATH")?;
    let db_pool_size = env_var("BITEREC_DB_POOL_SIZE").and_then(|s| {
        s.parse::<u32>().map_err(|e| BiteRecError::Config(format!("Invalid pool size: {e}")))
    })?;

    let base_url = env_var("BITEREC_API_BASE_URL")?;
    let timeout_secs = match std::env::var("BITEREC_API_TIMEOUT_SECS") {
        Ok(s) => Some(s.parse::<u64>().map_err(|e| {
            BiteRecError::Config(format!("Invalid API timeout: {e}"))
        })?),
        Err(_) => None,
    };

    Ok(Config {
        api: ApiConfig { base_url, timeout_secs },
        database: DatabaseConfig { path: db_path, pool_size: db_pool_size },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `BiteRecError::Config` if no file is found or the contents do
/// not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BiteRecError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BiteRecError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| BiteRecError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| BiteRecError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| BiteRecError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(BiteRecError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a config file, first hit wins.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_names(&cwd));
        candidates.extend(candidate_names(&cwd.join("..")));
        candidates.extend(candidate_names(&cwd.join("../..")));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_names(exe_dir));
            candidates.extend(candidate_names(&exe_dir.join("..")));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_names(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("biterec.json"),
        dir.join("biterec.toml"),
    ]
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| BiteRecError::Config(format!("Missing required environment variable: {key}")))
}
