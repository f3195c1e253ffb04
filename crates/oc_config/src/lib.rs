//! Typed configuration for the OpsChat assistant.
//!
//! Configuration is assembled from three layers, later layers winning:
//!
//! 1. built-in defaults,
//! 2. `config.toml` in the user's project configuration directory,
//! 3. `OC_*` environment variables and `--config KEY=VALUE` CLI overrides.

pub mod assistant;
mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use crate::{
    assistant::{AssistantConfig, ParametersConfig},
    error::Error,
};
use crate::error::Result;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "OC_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Assistant-specific configuration.
    pub assistant: AssistantConfig,

    /// Export-specific configuration.
    pub export: ExportConfig,

    /// Styling configuration.
    pub style: StyleConfig,
}

/// Conversation-export configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory in which export artifacts are created.
    ///
    /// Defaults to the current working directory.
    pub dir: Option<PathBuf>,
}

/// Styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Color theme for syntax-highlighted code artifacts.
    ///
    /// `None` disables highlighting.
    pub theme: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: Some("base16-ocean.dark".to_owned()),
        }
    }
}

impl Config {
    /// Load the configuration from the default file location and the
    /// process environment.
    pub fn load() -> Result<Self> {
        let mut config = match config_file() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_env_overrides(std::env::vars())?;
        Ok(config)
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration file.");

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse the configuration from a TOML document. Missing fields fall
    /// back to their defaults; out-of-range sampling parameters are clamped
    /// to their documented bounds.
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.assistant.parameters.validate()?;

        Ok(config)
    }

    /// Apply `OC_*` environment variables as configuration overrides.
    ///
    /// Takes the variables as an iterator so callers (and tests) control the
    /// source. Variables without the prefix are ignored.
    pub fn apply_env_overrides(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<()> {
        for (key, value) in vars {
            let Some(key) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            trace!(key, "Applying environment override.");
            self.set(&key.to_ascii_lowercase(), &value)?;
        }

        Ok(())
    }

    /// Assign a single configuration value by key.
    ///
    /// Out-of-range sampling parameters are clamped rather than rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "model" => self.assistant.parameters.model = value.to_owned(),
            "temperature" | "max_tokens" | "top_p" | "extended_thinking" => {
                self.assistant.parameters.set(key, value)?;
            }
            "instructions" => self.assistant.instructions = value.to_owned(),
            "api_key_env" => self.assistant.api_key_env = value.to_owned(),
            "theme" => {
                self.style.theme = (!value.is_empty()).then(|| value.to_owned());
            }
            "export_dir" => {
                self.export.dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => return Err(Error::UnknownKey(key.to_owned())),
        }

        Ok(())
    }
}

/// Path of the user's configuration file, if a home directory is known.
fn config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "opschat").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
