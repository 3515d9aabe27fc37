//! Configuration management for sdv CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::PathArgs;

const DEFAULT_DATA_DIR: &str = "content/Data";
const DEFAULT_STRINGS_DIR: &str = "content/Strings";
const DEFAULT_OUTPUT_DIR: &str = "src/data";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub strings_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Effective locations after applying flags, config and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub strings_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Paths {
    pub fn content_source(&self) -> sdv::ContentSource {
        sdv::ContentSource::new(&self.data_dir, &self.strings_dir)
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("sdv");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Store any paths given on the command line. Returns true if anything changed.
    pub fn update(&mut self, args: &PathArgs) -> bool {
        let mut changed = false;
        for (slot, value) in [
            (&mut self.data_dir, &args.data_dir),
            (&mut self.strings_dir, &args.strings_dir),
            (&mut self.output_dir, &args.output_dir),
        ] {
            if let Some(value) = value {
                *slot = Some(value.clone());
                changed = true;
            }
        }
        changed
    }

    /// Command-line value, then configured value, then built-in default
    pub fn resolve(&self, args: &PathArgs) -> Paths {
        let pick = |flag: &Option<PathBuf>, configured: &Option<PathBuf>, default: &str| {
            flag.clone()
                .or_else(|| configured.clone())
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Paths {
            data_dir: pick(&args.data_dir, &self.data_dir, DEFAULT_DATA_DIR),
            strings_dir: pick(&args.strings_dir, &self.strings_dir, DEFAULT_STRINGS_DIR),
            output_dir: pick(&args.output_dir, &self.output_dir, DEFAULT_OUTPUT_DIR),
        }
    }
}
