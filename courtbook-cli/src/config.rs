//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

static DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/graphql";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_time_format_24h() -> bool {
    true
}

/// Configuration at ~/.config/courtbook/config.toml
///
/// The stored session token lives next to it under session/, managed by
/// `courtbook_client::session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtbookConfig {
    /// GraphQL endpoint of the booking server.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Show times as HH:MM (true) or H:MM AM/PM (false).
    #[serde(default = "default_time_format_24h")]
    pub time_format_24h: bool,
}

impl Default for CourtbookConfig {
    fn default() -> Self {
        CourtbookConfig {
            endpoint: default_endpoint(),
            time_format_24h: default_time_format_24h(),
        }
    }
}

impl CourtbookConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("courtbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(CourtbookConfig::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }
}
