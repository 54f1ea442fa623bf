//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/langlab/langlab.toml`
//! 3. Local config: `./langlab.toml`
//! 4. Environment variables: `LANGLAB_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Unified configuration for langlab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pumping factor k used when the caller does not pass one
    pub default_factor: u64,
    /// Largest derivation depth the tree renderer accepts
    pub max_tree_depth: usize,
    /// Fixed seed for decomposition draws; None draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_factor: 2,
            max_tree_depth: 64,
            seed: None,
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not
/// specified" during layer merging).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub default_factor: Option<u64>,
    pub max_tree_depth: Option<usize>,
    pub seed: Option<u64>,
}

/// Get the XDG config directory for langlab.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "langlab").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("langlab.toml"))
}

/// Get the path to the local config file in the working directory.
pub fn local_config_path() -> PathBuf {
    PathBuf::from("langlab.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Settings {
    /// Merge overlay config onto self; overlay scalars win if specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            default_factor: overlay.default_factor.unwrap_or(self.default_factor),
            max_tree_depth: overlay.max_tree_depth.unwrap_or(self.max_tree_depth),
            seed: overlay.seed.or(self.seed),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/langlab/langlab.toml`
    /// 3. Local config: `./langlab.toml`
    /// 4. Environment variables: `LANGLAB_*` prefix
    pub fn load() -> Result<Self, ConfigError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        let local_path = local_config_path();
        if local_path.exists() {
            let raw = load_raw_settings(&local_path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply LANGLAB_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("LANGLAB"))
            .build()
            .map_err(|e| ConfigError::Env(e.to_string()))?;

        if let Ok(val) = config.get_int("default_factor") {
            settings.default_factor = val.max(0) as u64;
        }
        if let Ok(val) = config.get_int("max_tree_depth") {
            settings.max_tree_depth = val.max(0) as usize;
        }
        if let Ok(val) = config.get_int("seed") {
            settings.seed = Some(val.max(0) as u64);
        }

        Ok(settings)
    }

    /// Write a commented config template to `path`.
    pub fn write_template(path: &Path) -> Result<(), ConfigError> {
        let template = r#"# langlab configuration
# Precedence: defaults < global < local < LANGLAB_* env vars

# Pumping factor k used when --factor is not given
# default_factor = 2

# Largest derivation depth the tree renderer accepts
# max_tree_depth = 64

# Fixed seed for decomposition draws (omit for OS entropy)
# seed = 42
"#;
        std::fs::write(path, template).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Render the merged settings as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}
