use crate::config::types::{Config, ExtractConfig, FetchConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Largest batch width accepted for concurrent fetching
const MAX_BATCH_SIZE: usize = 1000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    validate_extract_config(&config.extract)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the site to crawl
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if config.letters.is_empty() {
        return Err(ConfigError::Validation("letters cannot be empty".to_string()));
    }

    if !config.letters.chars().all(|c| c.is_alphanumeric()) {
        return Err(ConfigError::Validation(format!(
            "letters must contain only alphanumeric characters, got '{}'",
            config.letters
        )));
    }

    Ok(())
}

/// Validates fetch settings
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.batch_size < 1 || config.batch_size > MAX_BATCH_SIZE {
        return Err(ConfigError::Validation(format!(
            "batch-size must be between 1 and {}, got {}",
            MAX_BATCH_SIZE, config.batch_size
        )));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the tag vocabulary
fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    if config.parts_of_speech.is_empty() {
        return Err(ConfigError::Validation(
            "parts-of-speech cannot be empty".to_string(),
        ));
    }

    if let Some(position) = config.parts_of_speech.iter().position(|t| t.is_empty()) {
        return Err(ConfigError::Validation(format!(
            "parts-of-speech entry {} is empty",
            position
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
