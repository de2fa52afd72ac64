//! Configuration management for the generator CLI

use crate::palette::{PaletteInput, builtin};
use crate::paths;
use anyhow::{Context, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Directory the package directory is written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Built-in palette name or path to a palette JSON file
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Version written into the generated manifest
    #[serde(default = "default_version")]
    pub version: String,

    /// Overwrite files that already exist
    #[serde(default)]
    pub force: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_palette() -> String {
    "monokai".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            palette: default_palette(),
            version: default_version(),
            force: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path();
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("themer-vscode")
            .join("config.json")
    }

    /// The manifest version, checked to be semver as the marketplace requires
    ///
    /// # Errors
    ///
    /// Returns an error if `version` is not a valid semantic version
    pub fn validated_version(&self) -> Result<Version> {
        Version::parse(&self.version)
            .with_context(|| format!("Invalid package version \"{}\"", self.version))
    }

    /// Resolve `palette` as a built-in name, falling back to a JSON file path
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not built in and the file cannot be
    /// read or does not describe a complete palette
    pub fn load_palette(&self) -> Result<PaletteInput> {
        if let Some(palette) = builtin::find(&self.palette) {
            debug!(name = %self.palette, "Using built-in palette");
            return Ok(palette);
        }

        let path = Path::new(&self.palette);
        let contents = fs::read_to_string(path).with_context(|| {
            format!(
                "\"{}\" is not a built-in palette ({}) and could not be read as a file",
                self.palette,
                builtin::NAMES.join(", ")
            )
        })?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid palette in {}", path.display()))
    }
}
