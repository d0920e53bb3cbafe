//! Configuration handling for initpyproj.
//! Settings are read from an optional JSON or YAML file; every field has a default.

use crate::constants::{DEFAULT_COMMIT_MESSAGE, DEFAULT_REMOTE_NAME, GIT_PROGRAM, HOST_PROGRAM};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// User settings for the scaffolding workflow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Version control program
    pub git_program: String,
    /// Repository host CLI program
    pub host_program: String,
    /// Message of the first commit
    pub commit_message: String,
    /// Name of the git remote pointing at the new repository
    pub remote_name: String,
    /// Create remote repositories as private
    pub private: bool,
    /// Write `_core/<name>.py`
    pub seed_module: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_program: GIT_PROGRAM.to_string(),
            host_program: HOST_PROGRAM.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            remote_name: DEFAULT_REMOTE_NAME.to_string(),
            private: false,
            seed_module: true,
        }
    }
}

/// Loads the configuration file, or the defaults when no file is given.
///
/// # Arguments
/// * `config_path` - Optional path to a JSON or YAML configuration file
///
/// # Errors
/// * `Error::ConfigError` if the file does not exist or cannot be parsed
pub fn get_config<P: AsRef<Path>>(config_path: Option<P>) -> Result<Config> {
    let Some(config_path) = config_path else {
        debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid configuration path: {}",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(Error::IoError)?;
    parse_config(&content)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}
