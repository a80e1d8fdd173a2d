//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the letter loop that coordinates the crawl:
//! - Fetching each letter's first page and discovering its page count
//! - Enumerating and fetching every listing page
//! - Extracting entries and merging them into the dictionary
//! - Persisting the finished dictionary

use crate::config::{Config, DefinitionSplit};
use crate::crawler::fetcher::{FetchMode, Fetcher};
use crate::crawler::pagination::{discover_last_page, enumerate_urls, letter_url};
use crate::crawler::parser::{extract_entries, ListingPage};
use crate::dictionary::{Dictionary, TagVocabulary, WordEntry};
use crate::output::{persist, CrawlStatistics};
use crate::state::{LetterCrawlState, LetterPhase};
use crate::ScraperError;

/// Main crawler coordinator structure
///
/// Owns the dictionary being built. Fetch tasks never touch it; entries are
/// merged only after a letter's pages have all come back.
pub struct Coordinator {
    config: Config,
    fetcher: Fetcher,
    mode: FetchMode,
    vocabulary: TagVocabulary,
    split: DefinitionSplit,
    dictionary: Dictionary,
    stats: CrawlStatistics,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, ScraperError> {
        let fetcher = Fetcher::new(&config.fetch)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Creates a coordinator around an existing fetcher
    pub fn with_fetcher(config: Config, fetcher: Fetcher) -> Self {
        let mode = FetchMode::from_config(&config.fetch);
        let vocabulary = TagVocabulary::new(config.extract.parts_of_speech.iter().cloned());
        let split = config.extract.definition_split;

        Self {
            config,
            fetcher,
            mode,
            vocabulary,
            split,
            dictionary: Dictionary::new(),
            stats: CrawlStatistics::start(),
        }
    }

    /// Crawls every configured letter in order
    ///
    /// Failures on individual listing pages and entries are logged and
    /// skipped. A failure to fetch a letter's first page aborts the crawl.
    pub async fn run(&mut self) -> Result<(), ScraperError> {
        let letters = self.config.letters();
        tracing::info!(
            "Starting crawl of {} letters ({:?})",
            letters.len(),
            self.mode
        );

        for letter in letters {
            self.crawl_letter(letter).await?;
        }

        self.stats.finish();
        self.stats.log_summary();
        Ok(())
    }

    /// Runs one letter through its state machine
    async fn crawl_letter(&mut self, letter: char) -> Result<(), ScraperError> {
        tracing::info!("Current Letter: {}", letter);
        let mut state = LetterCrawlState::new(letter);
        let base_url = self.config.site.base_url.clone();

        let first_page = self.fetcher.fetch(&letter_url(&base_url, letter)).await?;

        state.advance(LetterPhase::DiscoverPagination)?;
        let last_page = discover_last_page(&ListingPage::from(&first_page));
        state.last_page = Some(last_page);

        state.advance(LetterPhase::EnumerateUrls)?;
        state.urls = enumerate_urls(&base_url, letter, last_page);
        tracing::info!("Letter {}: {} pages", letter, state.page_count());

        state.advance(LetterPhase::FetchAllPages)?;
        let report = self.fetcher.fetch_pages(&state.urls, self.mode).await;
        self.stats.pages_fetched += report.pages.len() as u64;
        self.stats.pages_failed += report.failures.len() as u64;

        state.advance(LetterPhase::ExtractAndMerge)?;
        for page in &report.pages {
            let listing = ListingPage::from(page);
            let extracted = extract_entries(&listing, &self.vocabulary, self.split);
            self.stats.entries_skipped += extracted.skipped.len() as u64;
            self.merge_entries(extracted.entries);
        }

        state.advance(LetterPhase::NextLetter)?;
        self.stats.letters_crawled += 1;
        Ok(())
    }

    /// Upserts entries into the dictionary; a repeated headword replaces the earlier entry
    fn merge_entries(&mut self, entries: Vec<WordEntry>) {
        for entry in entries {
            if let Some(previous) = self.dictionary.insert(entry) {
                tracing::debug!("Replaced earlier entry for {}", previous.headword);
                self.stats.entries_replaced += 1;
            }
            self.stats.entries_recorded += 1;
        }
    }

    /// The dictionary built so far
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn statistics(&self) -> &CrawlStatistics {
        &self.stats
    }

    pub fn into_dictionary(self) -> Dictionary {
        self.dictionary
    }
}

/// Runs the full crawl and persists the result
///
/// This function orchestrates the entire crawl process:
///
/// 1. Build the HTTP client
/// 2. For each letter:
///    a. Fetch the first listing page
///    b. Discover the last page number
///    c. Enumerate the listing URLs
///    d. Fetch every page (sequentially or in concurrent batches)
///    e. Extract entries and merge them into the dictionary
/// 3. Write the dictionary to the configured output path
///
/// # Returns
///
/// * `Ok(Dictionary)` - The dictionary that was written
/// * `Err(ScraperError)` - A first-page fetch or the final write failed
///
/// # Example
///
/// ```no_run
/// use tagalog_scraper::config::Config;
/// use tagalog_scraper::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dictionary = run_crawl(Config::default()).await?;
/// println!("{} words", dictionary.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<Dictionary, ScraperError> {
    let output = config.output.clone();
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await?;
    Ok(persist(coordinator.into_dictionary(), &output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(headword: &str, definition: &str) -> WordEntry {
        WordEntry::new(headword, vec!["n.".to_string()], definition)
    }

    #[test]
    fn test_coordinator_creation() {
        let coordinator = Coordinator::new(Config::default()).unwrap();

        assert!(coordinator.dictionary().is_empty());
        assert_eq!(coordinator.mode, FetchMode::Sequential);
        assert_eq!(coordinator.vocabulary, TagVocabulary::default());
    }

    #[test]
    fn test_concurrent_mode_from_config() {
        let mut config = Config::default();
        config.fetch.concurrent = true;
        config.fetch.batch_size = 7;

        let coordinator = Coordinator::new(config).unwrap();

        assert_eq!(coordinator.mode, FetchMode::Batched { batch_size: 7 });
    }

    #[test]
    fn test_merge_last_write_wins() {
        let mut coordinator = Coordinator::new(Config::default()).unwrap();

        coordinator.merge_entries(vec![entry("araw", "sun"), entry("bata", "child")]);
        coordinator.merge_entries(vec![entry("araw", "day")]);

        let dictionary = coordinator.dictionary();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("araw").unwrap().definition, "day");
        assert_eq!(coordinator.statistics().entries_recorded, 3);
        assert_eq!(coordinator.statistics().entries_replaced, 1);
    }
}
