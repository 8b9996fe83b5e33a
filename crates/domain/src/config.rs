//! Application configuration structures
//!
//! Loaded by `biterec-infra::config` from environment variables or files.

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the BiteRec backend (profile + restaurants + places)
    pub base_url: String,
    /// Optional per-request timeout. `None` waits on the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://uyjwympg0a.execute-api.us-east-2.amazonaws.com".to_string(),
            timeout_secs: None,
        }
    }
}

/// Local durable storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path
    pub path: String,
    /// Connection pool size
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "biterec.db".to_string(), pool_size: 4 }
    }
}
