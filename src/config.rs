// Simulator Configuration
//
// Model selection, sampling temperature, dispatch timeout and store
// location. The API key is never read from the file; it comes from the
// environment only.

use crate::error::{FaqbotError, Result};
use crate::services::llm::{LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the store location
pub const STORE_PATH_ENV: &str = "FAQBOT_STORE_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Completion model name
    pub model: String,

    /// Sampling temperature, 0.0 to 2.0
    pub temperature: f32,

    /// Maximum wait for one completion (in seconds)
    #[serde(with = "serde_duration")]
    pub dispatch_timeout: Duration,

    /// Completion API root
    pub api_base_url: String,

    /// Knowledge store file
    pub store_path: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            dispatch_timeout: Duration::from_secs(30),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            store_path: None,
        }
    }
}

// Custom serde module for Duration (serialize/deserialize as seconds)
mod serde_duration {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl SimulatorConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: SimulatorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(FaqbotError::Config("model must not be empty".to_string()));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(FaqbotError::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.dispatch_timeout < Duration::from_secs(1) {
            return Err(FaqbotError::Config(
                "dispatch_timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }

    /// Gateway settings, with the API key taken from the environment
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            api_key: LlmConfig::api_key_from_env(),
            model: self.model.clone(),
            temperature: self.temperature,
            base_url: self.api_base_url.clone(),
        }
    }

    /// Resolve the store file: explicit argument, environment, config, then
    /// the platform data directory.
    pub fn resolve_store_path(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| {
                std::env::var(STORE_PATH_ENV)
                    .ok()
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.store_path.clone())
            .unwrap_or_else(default_store_path)
    }
}

/// Get the default store path using XDG_DATA_HOME standard
pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("faqbot")
        .join("knowledge.json")
}
