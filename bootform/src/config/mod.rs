//! Configuration management for bootform
//!
//! Configuration only decides where model metadata is read from and how much
//! is logged; it never changes the generated markup. Sources, highest
//! precedence first:
//!
//! 1. Environment variables (`BOOTFORM_` prefix, `__` for nesting)
//! 2. `./bootform.toml`
//! 3. `~/.config/bootform/config.toml` (user config, XDG)
//! 4. Hardcoded defaults
//!
//! Command-line flags are applied on top by the CLI.
//!
//! # Example Configuration
//!
//! ```toml
//! schema = "schema/models.toml"
//!
//! [log]
//! filter = "bootform=debug"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the project-local config file
pub const LOCAL_CONFIG_FILE: &str = "bootform.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive; `RUST_LOG` still wins when set
    pub filter: Option<String>,
}

/// Complete bootform configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootformConfig {
    /// Schema file describing apps and models
    pub schema: PathBuf,

    /// Logging settings
    pub log: LogSettings,
}

impl Default for BootformConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from("models.toml"),
            log: LogSettings::default(),
        }
    }
}

impl BootformConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed, or if
    /// an environment variable holds a value of the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        let config = figment
            .merge(Env::prefixed("BOOTFORM_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file, with environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values of the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("BOOTFORM_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Get the recommended XDG config path
    ///
    /// ```rust
    /// use bootform::config::BootformConfig;
    ///
    /// let path = BootformConfig::recommended_path();
    /// assert!(path.ends_with("config.toml"));
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join("bootform").join("config.toml"),
        )
    }

    /// Override the schema path (from `--schema`)
    #[must_use]
    pub fn with_schema(mut self, schema: Option<PathBuf>) -> Self {
        if let Some(schema) = schema {
            self.schema = schema;
        }
        self
    }
}
