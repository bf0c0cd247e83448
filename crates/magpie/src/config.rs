//! Engine configuration.
//!
//! Loaded from YAML; every field is optional.
//!
//! ```yaml
//! workers: 8
//! default_output: to_new_image
//! default_alpha: premultiplied
//! ```

use std::path::Path;

use magpie_core::AlphaMode;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where a draw call writes when it doesn't name an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultOutput {
    /// Overwrite the destination.
    #[default]
    ToDst,
    /// Allocate a new image covering the processed region.
    ToNewImage,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row workers. `0` and `1` both mean serial.
    pub workers: usize,
    /// Output used when a draw call passes `None`.
    pub default_output: DefaultOutput,
    /// Representation for pixels entering the engine from outside.
    pub default_alpha: AlphaMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            default_output: DefaultOutput::default(),
            default_alpha: AlphaMode::default(),
        }
    }
}

/// Half the hardware threads, at least one.
pub fn default_workers() -> usize {
    (magpie_ops::iter::available_workers() / 2).max(1)
}

impl Config {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
