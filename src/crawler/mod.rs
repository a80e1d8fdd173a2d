//! Crawler module for listing page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching, sequential or in bounded concurrent batches
//! - Pagination discovery and listing URL enumeration
//! - Word group extraction from listing pages
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod pagination;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, FetchMode, FetchReport, FetchedPage, Fetcher};
pub use pagination::{discover_last_page, enumerate_urls, letter_url, SINGLE_PAGE_BOUND};
pub use parser::{extract_entries, extract_word_groups, ListingPage, PageEntries, WordGroup};

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::ScraperError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Crawl every configured letter
/// 3. Write the resulting dictionary to the configured output path
pub async fn crawl(config: Config) -> Result<Dictionary, ScraperError> {
    run_crawl(config).await
}
