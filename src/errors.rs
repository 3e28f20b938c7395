/*!
 * Error types for the gutentrans application.
 *
 * This module contains custom error types for the stages of the translation
 * pipeline, using the thiserror crate for ergonomic error definitions.
 *
 * Only configuration, fetch and sink errors are fatal for a run. Provider
 * errors never leave the translation client: they are turned into a fallback
 * result for the chunk that failed.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The provider answered but the answer held no text
    #[error("Provider returned an empty response")]
    EmptyResponse,
}

impl ProviderError {
    /// Classify a non-success HTTP status into the matching variant
    pub fn from_status(status_code: u16, message: String) -> Self {
        match status_code {
            401 | 403 => Self::AuthenticationError(message),
            429 => Self::RateLimitExceeded(message),
            _ => Self::ApiError { status_code, message },
        }
    }
}

/// Errors that can occur while obtaining the source document
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request could not be completed
    #[error("Failed to download {url}: {message}")]
    Request {
        /// Location that was requested
        url: String,
        /// Underlying transport error
        message: String,
    },

    /// The server answered with a non-success status
    #[error("Failed to download {url}: server responded with {status_code}")]
    Status {
        /// Location that was requested
        url: String,
        /// HTTP status code
        status_code: u16,
    },

    /// A local source file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The source was reachable but held no content
    #[error("Source document at {0} is empty")]
    Empty(String),
}

/// Errors detected while validating the configuration
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// The requested target language is not one we translate into
    #[error("Unsupported language: {requested}. Supported languages: {}", supported.join(", "))]
    UnsupportedLanguage {
        /// Value given by the user
        requested: String,
        /// Identifiers of every supported language
        supported: Vec<String>,
    },

    /// No target language was configured
    #[error("No target language given. Use --language or set target_language in the config file")]
    MissingLanguage,

    /// No credential is available for the translation service
    #[error("API key is required. Provide it via --api-key or the SEALION_API_KEY environment variable")]
    MissingApiKey,

    /// A setting holds a value outside its allowed range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending setting
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Errors that can occur while persisting the translated document
#[derive(Error, Debug)]
#[error("Failed to save translation to {path:?}: {source}")]
pub struct SinkError {
    /// Destination that could not be written
    pub path: PathBuf,
    /// Underlying io error
    #[source]
    pub source: std::io::Error,
}

/// Errors that abort the translation pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source document could not be loaded
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the pipeline
    #[error("{0}")]
    Pipeline(#[from] PipelineError),

    /// Error writing the result
    #[error("{0}")]
    Sink(#[from] SinkError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<FetchError> for AppError {
    fn from(error: FetchError) -> Self {
        Self::Pipeline(PipelineError::Fetch(error))
    }
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
