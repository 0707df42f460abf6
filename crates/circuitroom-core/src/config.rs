//! TOML-based application configuration.
//!
//! Stores user preferences: chime behavior and an optional catalog file to
//! seed from instead of the built-in circuit. Timer state itself is never
//! persisted -- every start reseeds from the catalog.
//!
//! Configuration is stored at `~/.config/circuitroom/config.toml`; set
//! `CIRCUITROOM_CONFIG_DIR` to relocate it (tests do).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError, Result};

/// Chime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChimeConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_volume")]
    pub volume: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/circuitroom/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub chime: ChimeConfig,
    /// Catalog file to seed from. `None` means the built-in circuit.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}
fn default_volume() -> u32 {
    50
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chime: ChimeConfig::default(),
            catalog_path: None,
        }
    }
}

/// Returns the config directory, honoring `CIRCUITROOM_CONFIG_DIR`.
pub fn config_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("CIRCUITROOM_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("circuitroom"),
    };
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)
                    .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| {
            CoreError::Config(ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })
        })?;
        Ok(())
    }
}
