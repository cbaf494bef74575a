//! Configuration file handling
//!
//! Loads and saves the TOML config under the platform config directory.
//! Every field has a default so a missing or partial file always works.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that forces reduced motion when set to a truthy
/// value (`1`, `true`, `yes`).
pub const REDUCED_MOTION_ENV: &str = "SWEET_SURPRISE_REDUCED_MOTION";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name: "romantic", "classic", or "mono"
    pub theme: String,
    /// Start with sound muted
    pub muted: bool,
    /// Skip the full choreography (accessibility fallback)
    pub reduced_motion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "romantic".to_string(),
            muted: false,
            reduced_motion: false,
        }
    }
}

impl Config {
    /// Path to the config file: `<config_dir>/sweet-surprise/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("sweet-surprise").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file is missing.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save the config, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Sample the reduced-motion environment signal once.
///
/// Precedence: CLI flag, then [`REDUCED_MOTION_ENV`], then the config file.
pub fn reduced_motion(cli_flag: bool, config: &Config) -> bool {
    if cli_flag {
        return true;
    }
    if let Ok(value) = std::env::var(REDUCED_MOTION_ENV) {
        return matches!(value.to_lowercase().as_str(), "1" | "true" | "yes");
    }
    config.reduced_motion
}
