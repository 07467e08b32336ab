//! Configuration loading and management for condensa.
//!
//! Loads settings from `condensa.toml` with environment variable overrides for sensitive data.
//! The config file is optional; the API key alone (via `GEMINI_API_KEY`) is enough to run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Instruction sent to the model when the user declines custom instructions
pub const DEFAULT_INSTRUCTION: &str = "Summarise this file in a few sentences:";

/// Model used when the config file does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("missing API key: set GEMINI_API_KEY or [api].gemini_key in condensa.toml")]
    MissingApiKey,
}

/// Summarisation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Model identifier (e.g., "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Default instruction prepended to the document text
    #[serde(default = "default_instruction")]
    pub instruction: String,
}

/// API keys configuration (normally loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_instruction() -> String {
    DEFAULT_INSTRUCTION.to_string()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            instruction: default_instruction(),
        }
    }
}

impl Config {
    /// Load configuration from the default location (condensa.toml in cwd or home).
    ///
    /// A missing config file is not an error; defaults plus the environment apply.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override API keys from environment variables
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                self.api.gemini_key = Some(key);
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("condensa.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("condensa").join("condensa.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Get the API key, failing when neither config nor environment provides one
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api
            .gemini_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }
}
