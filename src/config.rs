//! Front-end configuration.
//!
//! Settings come from a YAML file. Every field has a default, so an empty or
//! partial file is valid and a missing default file means "all defaults".

use crate::export::PageLayout;
use crate::model::DEFAULT_PLACEHOLDER_IMAGE;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "recipe-browser.yaml";
pub const DEFAULT_DATA_FILE: &str = "recipesJSONFormat.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    IoError {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Recipe dataset
    pub data: Utf8PathBuf,
    /// Image shown for recipes without one
    pub placeholder_image: String,
    pub export: ExportConfig,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            data: Utf8PathBuf::from(DEFAULT_DATA_FILE),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported documents are written to
    pub out_dir: Utf8PathBuf,
    pub page: PageLayout,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            out_dir: Utf8PathBuf::from("."),
            page: PageLayout::default(),
        }
    }
}

impl BrowserConfig {
    /// Parses a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads the config at `path`, or [`DEFAULT_CONFIG_FILE`] from the
    /// working directory when `path` is `None`.
    ///
    /// # Errors
    ///
    /// An explicitly named file must exist. A missing default file yields the
    /// defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Utf8Path::new(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            tracing::debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents)?;
        tracing::debug!(path = %path, "loaded config");
        Ok(config)
    }
}
