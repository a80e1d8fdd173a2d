//! Crawl and dictionary statistics
//!
//! `CrawlStatistics` is accumulated by the coordinator while crawling;
//! `DictionaryStatistics` summarizes a finished dictionary, either in memory
//! or loaded back from an output file.

use crate::dictionary::Dictionary;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Counters collected during one crawl
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Letters that reached the end of their state machine
    pub letters_crawled: u64,

    /// Listing pages fetched successfully
    pub pages_fetched: u64,

    /// Listing pages whose fetch failed and were skipped
    pub pages_failed: u64,

    /// Entries merged into the dictionary, replacements included
    pub entries_recorded: u64,

    /// Entries that replaced an earlier entry with the same headword
    pub entries_replaced: u64,

    /// Word groups skipped during extraction
    pub entries_skipped: u64,
}

impl CrawlStatistics {
    /// Starts a new set of counters, stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            letters_crawled: 0,
            pages_fetched: 0,
            pages_failed: 0,
            entries_recorded: 0,
            entries_replaced: 0,
            entries_skipped: 0,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Whole seconds between start and finish
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Logs a one-line summary of the crawl
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl finished: {} letters, {} pages fetched, {} pages failed, {} entries ({} replaced, {} skipped) in {}s",
            self.letters_crawled,
            self.pages_fetched,
            self.pages_failed,
            self.entries_recorded,
            self.entries_replaced,
            self.entries_skipped,
            self.duration_seconds().unwrap_or_default()
        );
    }
}

/// Summary of a dictionary's contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStatistics {
    pub total_entries: usize,

    /// Entry count by lowercased first character of the headword
    pub entries_by_initial: BTreeMap<char, usize>,

    /// How many entries carry each tag
    pub tag_counts: HashMap<String, usize>,
}

impl DictionaryStatistics {
    /// Tags ordered by descending count, ties by tag
    pub fn top_tags(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut tags: Vec<_> = self
            .tag_counts
            .iter()
            .map(|(tag, count)| (tag.as_str(), *count))
            .collect();
        tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        tags.truncate(limit);
        tags
    }
}

/// Computes statistics for a dictionary
pub fn dictionary_statistics(dictionary: &Dictionary) -> DictionaryStatistics {
    let mut entries_by_initial = BTreeMap::new();
    let mut tag_counts = HashMap::new();

    for entry in dictionary.iter() {
        if let Some(initial) = entry.headword.chars().next() {
            for lower in initial.to_lowercase() {
                *entries_by_initial.entry(lower).or_insert(0) += 1;
            }
        }
        for tag in &entry.parts_of_speech {
            *tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    DictionaryStatistics {
        total_entries: dictionary.len(),
        entries_by_initial,
        tag_counts,
    }
}

/// Prints dictionary statistics to stdout in a formatted manner
pub fn print_statistics(stats: &DictionaryStatistics) {
    println!("=== Dictionary Statistics ===\n");

    println!("Overview:");
    println!("  Total entries: {}", stats.total_entries);
    println!("  Distinct tags: {}", stats.tag_counts.len());
    println!();

    println!("Entries by Letter:");
    for (initial, count) in &stats.entries_by_initial {
        let percentage = if stats.total_entries > 0 {
            (*count as f64 / stats.total_entries as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", initial, count, percentage);
    }
    println!();

    if !stats.tag_counts.is_empty() {
        println!("Most Common Tags:");
        for (tag, count) in stats.top_tags(10) {
            println!("  {}: {}", tag, count);
        }
    }
}
