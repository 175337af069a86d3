//! Project configuration (`cursus.toml`).
//!
//! Every key is optional:
//!
//! ```toml
//! input = "cursus.xml"     # curriculum document
//! output = "cursus.mmd"    # generated diagram
//! direction = "LR"         # LR, TB (or TD), RL or BT, any case
//! id_prefix = "id"         # rendered course identifiers: id0, id1, ...
//! ```
//!
//! The file is looked up at the path given by `--config` (or `CURSUS_CONFIG`),
//! then as `cursus.toml` in the working directory. Relative paths inside the
//! file are relative to the file's directory. Command-line flags override
//! file values.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_ID_PREFIX, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::core::CursusError;
use crate::render::FlowDirection;

/// Settings read from `cursus.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursusConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub direction: FlowDirection,
    pub id_prefix: String,
}

impl Default for CursusConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            direction: FlowDirection::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl CursusConfig {
    /// Load from an explicit path, or from `cursus.toml` if present.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file yields the defaults.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                if !fs::try_exists(&path).await.unwrap_or(false) {
                    return Err(CursusError::ConfigError {
                        message: format!("configuration file {} does not exist", path.display()),
                    }
                    .into());
                }
                Self::load_from(&path).await
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if fs::try_exists(&path).await.unwrap_or(false) {
                    Self::load_from(&path).await
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and validate a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| CursusError::ConfigError {
            message: format!("cannot read {}: {e}", path.display()),
        })?;

        let mut config = Self::parse(&content).map_err(|e| CursusError::ConfigError {
            message: format!("{}: {e}", path.display()),
        })?;

        if let Some(base) = path.parent() {
            config.input = base.join(&config.input);
            config.output = base.join(&config.output);
        }

        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.message().to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Identifiers must stay valid Mermaid node ids.
    fn validate(&self) -> Result<(), String> {
        let prefix_is_valid = self
            .id_prefix
            .chars()
            .next()
            .is_some_and(|first| first.is_ascii_alphabetic())
            && self.id_prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !prefix_is_valid {
            return Err(format!(
                "id_prefix '{}' must start with a letter and contain only letters, digits or '_'",
                self.id_prefix
            ));
        }
        Ok(())
    }
}
