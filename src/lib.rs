//! Tagalog-Scraper: a letter-by-letter dictionary crawler
//!
//! This crate crawls the listing pages of an online Tagalog dictionary,
//! extracts every word entry (headword, part-of-speech tags, definition)
//! and writes the aggregate dictionary to a single JSON document.

pub mod config;
pub mod crawler;
pub mod dictionary;
pub mod output;
pub mod state;

use thiserror::Error;

/// Main error type for Tagalog-Scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Persist error: {0}")]
    Persist(#[from] PersistError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid letter transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::LetterPhase,
        to: state::LetterPhase,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Failure to retrieve a single listing page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. }
            | Self::Status { url, .. }
            | Self::Timeout { url }
            | Self::Network { url, .. } => url,
        }
    }
}

/// Failure to turn one word group into a dictionary entry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No known part of speech found in: {text:?}")]
    NoPartOfSpeechFound { text: String },

    #[error("Word group has no headword link")]
    MissingHeadword,

    #[error("Word group for {headword:?} has no definition paragraph")]
    MissingDefinition { headword: String },
}

/// Failure to write or read the serialized dictionary
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize dictionary: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to deserialize dictionary: {0}")]
    Deserialize(serde_json::Error),
}

/// Result type alias for Tagalog-Scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for page fetches
pub type FetchResult<T> = std::result::Result<T, FetchError>;

// Re-export commonly used types
pub use config::Config;
pub use dictionary::{disambiguate, Dictionary, TagVocabulary, WordEntry};
pub use state::{LetterCrawlState, LetterPhase};
