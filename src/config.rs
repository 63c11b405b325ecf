//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/hoplist/hoplist.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `HOPLIST_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, Delimiters, IoResultExt};

/// Raw delimiter settings for intermediate parsing (`None` means "inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDelimiters {
    pub prefix: Option<String>,
    pub separator: Option<String>,
    pub suffix: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub delimiters: RawDelimiters,
}

/// Unified configuration for hoplist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Text wrapped around printed chains
    pub delimiters: Delimiters,
}

/// Get the XDG config directory for hoplist.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "hoplist").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("hoplist.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Delimiters {
    /// Overlay wins field by field where it is specified.
    fn merge(&self, overlay: &RawDelimiters) -> Self {
        Self {
            prefix: overlay.prefix.clone().unwrap_or_else(|| self.prefix.clone()),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            suffix: overlay.suffix.clone().unwrap_or_else(|| self.suffix.clone()),
        }
    }
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            delimiters: self.delimiters.merge(&overlay.delimiters),
        }
    }

    /// Load settings with layered precedence: XDG global config, `local`, then
    /// `HOPLIST_*` environment variables.
    ///
    /// # Arguments
    /// * `local` - Optional config file given on the command line; must exist if given
    pub fn load(local: Option<&Path>) -> ApplicationResult<Self> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_from(global.as_deref(), local)?.with_env_overrides()
    }

    /// Load settings from explicit file layers only; the environment is not consulted.
    ///
    /// A missing `global` file is skipped; a missing `local` file is an error
    /// because the user asked for it.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Local config
        if let Some(local_path) = local {
            if !local_path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local_path.display()),
                });
            }
            debug!("local config: {}", local_path.display());
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        Ok(current)
    }

    /// Apply HOPLIST_* environment variables as explicit overrides.
    ///
    /// Nested keys use `__`, e.g. `HOPLIST_DELIMITERS__PREFIX=[`.
    pub fn with_env_overrides(mut self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("HOPLIST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("delimiters.prefix") {
            self.delimiters.prefix = val;
        }
        if let Ok(val) = config.get_string("delimiters.separator") {
            self.delimiters.separator = val;
        }
        if let Ok(val) = config.get_string("delimiters.suffix") {
            self.delimiters.suffix = val;
        }

        Ok(self)
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
