use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::RecommenderError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: consts::SERVER_HOST.to_string(),
            port: consts::SERVER_PORT,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub api_url: String,
    pub model: String,
    /// Name of the environment variable holding the key; replaced by the
    /// key itself once loaded.
    pub api_key: Option<String>,
    pub system_prompt: String,
    pub temperature: f64,
    pub max_tokens: i32,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: consts::DEFAULT_API_URL.to_string(),
            model: consts::DEFAULT_MODEL.to_string(),
            api_key: None,
            system_prompt: consts::DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: consts::DEFAULT_TEMPERATURE,
            max_tokens: consts::DEFAULT_MAX_TOKENS,
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: consts::READ_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    pub fn http_client(&self) -> Result<reqwest::Client, RecommenderError> {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .read_timeout(Duration::from_secs(self.read_timeout_secs))
            .build()
            .map_err(|e| RecommenderError::ConfigError(e.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MatcherConfig {
    pub cutoff: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            cutoff: consts::DEFAULT_SIMILARITY_CUTOFF,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub matcher: MatcherConfig,
    pub training_data_file: Option<PathBuf>,
}

impl Config {
    pub fn validate(&self) -> Result<(), RecommenderError> {
        if !(0.0..=1.0).contains(&self.matcher.cutoff) {
            return Err(RecommenderError::ConfigError(format!(
                "matcher.cutoff must be in [0.0, 1.0], got {}",
                self.matcher.cutoff
            )));
        }
        if self.llm.api_url.trim().is_empty() {
            return Err(RecommenderError::ConfigError(
                "llm.api_url must not be empty".to_string(),
            ));
        }
        if self.llm.max_tokens <= 0 {
            return Err(RecommenderError::ConfigError(format!(
                "llm.max_tokens must be positive, got {}",
                self.llm.max_tokens
            )));
        }
        Ok(())
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, RecommenderError>;
}

/// Loads `Config` from a JSON file.
///
/// The path comes from `REC_CONFIG_FILE`; without it `./config.json` is used
/// when present, and built-in defaults otherwise.
pub struct FileConfigLoader {
    path: Option<PathBuf>,
}

impl FileConfigLoader {
    pub fn new() -> Self {
        Self {
            path: std::env::var(consts::CONFIG_FILE_ENV).ok().map(PathBuf::from),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn read(path: &Path) -> Result<Config, RecommenderError> {
        let config_str = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| RecommenderError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load_config(&self) -> Result<Config, RecommenderError> {
        let mut config = match &self.path {
            Some(path) => Self::read(path)?,
            None => {
                let default_path = Path::new(consts::DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read(default_path)?
                } else {
                    log::info!("no config file found, using defaults");
                    Config::default()
                }
            }
        };

        config.llm.api_key = config
            .llm
            .api_key
            .as_deref()
            .and_then(|var| std::env::var(var).ok())
            .filter(|key| !key.is_empty());

        config.validate()?;
        Ok(config)
    }
}

pub fn load_config() -> Result<Config, RecommenderError> {
    let loader = FileConfigLoader::new();
    loader.load_config()
}
