//! CLI configuration file.
//!
//! Lives at `<config_dir>/catalog-translator/config.json`. A missing file
//! means defaults; a malformed file is an error, not silently ignored.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use catalog_translator_provider::ProviderCredentials;

const CONFIG_DIR: &str = "catalog-translator";
const CONFIG_FILE: &str = "config.json";

/// Persisted CLI defaults. Command-line flags override these per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Provider selection plus its credentials.
    pub credentials: ProviderCredentials,
    /// Default source language code (`"auto"` detects).
    pub default_source: String,
    /// Default target language code.
    pub default_target: String,
    /// Delay between records in milliseconds (backend throttle).
    pub record_pacing_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            credentials: ProviderCredentials::Google {},
            default_source: "auto".to_string(),
            default_target: "ro".to_string(),
            record_pacing_ms: 300,
        }
    }
}

impl AppConfig {
    /// Loads the config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("malformed config file {}", path.display()))
    }

    /// Writes the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let Some(path) = config_path() else {
            anyhow::bail!("no config directory available on this platform");
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
