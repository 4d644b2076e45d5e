use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LocatorGuardError, Result};

pub const LOCAL_CONFIG_NAME: &str = ".locator-guard.toml";

/// Tool configuration, loaded from `.locator-guard.toml` when present.
/// CLI flags override individual fields after loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub exclude: ExcludeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Candidate file name prefix.
    pub prefix: String,
    /// Candidate file extension, without the dot.
    pub extension: String,
    /// Directories to scan when no paths are given on the command line.
    pub include_paths: Vec<String>,
    /// Honor .gitignore files while walking.
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            prefix: "el_".to_string(),
            extension: "py".to_string(),
            include_paths: Vec::new(),
            respect_gitignore: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    pub patterns: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                "**/.git/**".to_string(),
                "**/__pycache__/**".to_string(),
                "**/venv/**".to_string(),
                "**/.venv/**".to_string(),
            ],
        }
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if an existing config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            self.load_from_path(local)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(LocatorGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
