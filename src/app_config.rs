use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::document::DEFAULT_MAX_CHUNK_CHARS;
use crate::errors::ConfigError;
use crate::file_utils::{DEFAULT_OUTPUT_DIR, DEFAULT_TITLE};
use crate::language_utils::TargetLanguage;
use crate::source::DEFAULT_BOOK_URL;
use crate::translation::core::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Target language identifier (e.g. "thai")
    #[serde(default)]
    pub target_language: String,

    /// Where the book comes from
    #[serde(default)]
    pub source: SourceConfig,

    /// Translation service settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Chunking and pacing
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Where the result goes
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Source document configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SourceConfig {
    /// URL or local path of the book
    #[serde(default = "default_source_location")]
    pub location: String,

    /// Download timeout in seconds
    #[serde(default = "default_source_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_source_location(),
            timeout_secs: default_source_timeout_secs(),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    /// OpenAI-compatible API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key for the service
    #[serde(default = "String::new", skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    /// Maximum number of tokens generated per chunk
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Temperature parameter for text generation (0.0 to 2.0)
    /// Lower values make output more deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: String::new(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Chunking and pacing configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Maximum characters per chunk
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Delay in milliseconds between consecutive translation requests
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
            pacing_delay_ms: default_pacing_delay_ms(),
        }
    }
}

impl PipelineConfig {
    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }
}

/// Output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Output directory, created if missing
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Book title used in the header and default file name
    #[serde(default = "default_title")]
    pub title: String,

    /// Explicit output file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            title: default_title(),
            filename: None,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_location() -> String {
    DEFAULT_BOOK_URL.to_string()
}

fn default_source_timeout_secs() -> u64 {
    60
}

fn default_endpoint() -> String {
    "https://api.sea-lion.ai/v1".to_string()
}

fn default_model() -> String {
    // Gemma-based SEA-LION v4, tuned for Southeast Asian languages
    "aisingapore/Gemma-SEA-LION-v4-27B-IT".to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_max_chunk_chars() -> usize {
    DEFAULT_MAX_CHUNK_CHARS
}

fn default_pacing_delay_ms() -> u64 {
    1000
}

fn default_output_directory() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: String::new(),
            source: SourceConfig::default(),
            translation: TranslationConfig::default(),
            pipeline: PipelineConfig::default(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load the configuration file, or write the defaults there if it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolve the configured target language
    pub fn language(&self) -> Result<TargetLanguage, ConfigError> {
        if self.target_language.trim().is_empty() {
            return Err(ConfigError::MissingLanguage);
        }
        self.target_language.parse()
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<TargetLanguage, ConfigError> {
        let language = self.language()?;

        if self.translation.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        if self.pipeline.max_chunk_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_chunk_chars",
                reason: "must be greater than zero".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.translation.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: format!("{} is outside 0.0 to 2.0", self.translation.temperature),
            });
        }

        if self.translation.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than zero".to_string(),
            });
        }

        if url::Url::parse(&self.translation.endpoint).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: format!("'{}' is not a valid URL", self.translation.endpoint),
            });
        }

        Ok(language)
    }
}
