//! Global tzpair configuration.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SOURCE_ZONE, DEFAULT_TARGET_ZONE};
use crate::error::{TzPairError, TzPairResult};

fn default_source_zone() -> String {
    DEFAULT_SOURCE_ZONE.to_string()
}

fn default_target_zone() -> String {
    DEFAULT_TARGET_ZONE.to_string()
}

fn is_default_source_zone(zone: &String) -> bool {
    zone == DEFAULT_SOURCE_ZONE
}

fn is_default_target_zone(zone: &String) -> bool {
    zone == DEFAULT_TARGET_ZONE
}

/// Configuration at ~/.config/tzpair/config.toml
///
/// Only the pair of zone names is configured; conversions themselves
/// are never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TzPairConfig {
    #[serde(default = "default_source_zone", skip_serializing_if = "is_default_source_zone")]
    pub source_zone: String,

    #[serde(default = "default_target_zone", skip_serializing_if = "is_default_target_zone")]
    pub target_zone: String,
}

impl Default for TzPairConfig {
    fn default() -> Self {
        TzPairConfig {
            source_zone: default_source_zone(),
            target_zone: default_target_zone(),
        }
    }
}

impl TzPairConfig {
    pub fn config_path() -> TzPairResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TzPairError::Config("Could not determine config directory".into()))?
            .join("tzpair");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out default
    /// config first if none exists yet.
    pub fn load() -> TzPairResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> TzPairResult<Self> {
        debug!("Loading config from {}", path.display());

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()
            .map_err(|e| TzPairError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TzPairError::Config(e.to_string()))
    }

    /// Write the config as TOML, leaving out values that match the defaults.
    pub fn save_to(&self, path: &Path) -> TzPairResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| TzPairError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> TzPairResult<()> {
        let contents = format!(
            "\
# tzpair configuration

# Zone that input times are read in (IANA name or fixed offset like \"+05:30\"):
# source_zone = \"{}\"

# Zone that converted times are shown in:
# target_zone = \"{}\"
",
            DEFAULT_SOURCE_ZONE, DEFAULT_TARGET_ZONE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
