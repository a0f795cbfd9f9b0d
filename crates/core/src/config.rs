use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Provider and model selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSettings {
    /// API key for authentication (falls back to `SIAGA_API_KEY` when empty)
    #[serde(default)]
    pub api_key: String,

    /// Model name (e.g., "llama3-8b-8192")
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the OpenAI-compatible completions API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_top_p() -> f32 {
    0.9
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
        }
    }
}

impl ProviderSettings {
    /// Resolve the API key from the config or the `SIAGA_API_KEY` environment variable
    pub fn resolved_api_key(&self) -> Result<String> {
        if !self.api_key.is_empty() {
            return Ok(self.api_key.clone());
        }

        env::var("SIAGA_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("API key missing: set provider.api_key or SIAGA_API_KEY".to_string()))
    }
}

/// File logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingSection {
    /// Enable file logging to the log directory
    #[serde(default)]
    pub enabled: bool,

    /// Log level for the file layer
    #[serde(default = "default_file_level")]
    pub level: String,
}

fn default_file_level() -> String {
    "debug".to_string()
}

impl Default for FileLoggingSection {
    fn default() -> Self {
        Self { enabled: false, level: default_file_level() }
    }
}

/// Logging configuration (`[logging]` in siaga.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Default log level for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for stderr: pretty, json, compact
    #[serde(default = "default_log_format")]
    pub format: String,

    /// File logging
    #[serde(default)]
    pub file: FileLoggingSection,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingSection::default() }
    }
}

/// Root configuration structure for siaga.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Provider and model selection
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Commented example config written on first run
    pub fn example() -> &'static str {
        r#"# Siaga configuration

[provider]
# API key for the completions endpoint. Leave empty to use SIAGA_API_KEY.
api_key = ""
model = "llama3-8b-8192"
base_url = "https://api.groq.com/openai/v1"
temperature = 0.7
max_tokens = 1024
top_p = 0.9

[logging]
level = "warn"
format = "pretty"

[logging.file]
enabled = false
level = "debug"
"#
    }
}
