//! Configuration module for Tagalog-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every field has a default, so a missing file section falls back to crawling
//! the full alphabet of the public dictionary site.
//!
//! # Example
//!
//! ```no_run
//! use tagalog_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Crawling letters: {}", config.site.letters);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DefinitionSplit, ExtractConfig, FetchConfig, OutputConfig, SiteConfig,
    DEFAULT_BASE_URL, DEFAULT_LETTERS, DEFAULT_OUTPUT_PATH, DEFAULT_PARTS_OF_SPEECH,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
