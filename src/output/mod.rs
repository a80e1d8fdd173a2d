//! Output module for persisting crawl results
//!
//! This module handles:
//! - Writing the finished dictionary as indented JSON
//! - Reading a written dictionary back
//! - Crawl and dictionary statistics

mod json;
pub mod stats;

pub use json::{format_dictionary, load_dictionary, write_dictionary};
pub use stats::{dictionary_statistics, print_statistics, CrawlStatistics, DictionaryStatistics};

use crate::config::OutputConfig;
use crate::dictionary::Dictionary;
use crate::PersistError;
use std::path::Path;

/// Persists the finished dictionary according to the output configuration
///
/// Sorts entries by headword first when `sort` is enabled; otherwise entries
/// keep the order in which headwords were first seen.
pub fn persist(mut dictionary: Dictionary, config: &OutputConfig) -> Result<Dictionary, PersistError> {
    if config.sort {
        dictionary.sort_by_headword();
    }
    write_dictionary(&dictionary, Path::new(&config.path))?;
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordEntry;
    use tempfile::TempDir;

    fn unsorted() -> Dictionary {
        vec![
            WordEntry::new("tubig", vec!["n.".into()], "water"),
            WordEntry::new("aso", vec!["n.".into()], "dog"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_persist_keeps_insertion_order() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig {
            path: dir.path().join("out.json").to_string_lossy().into_owned(),
            sort: false,
        };

        persist(unsorted(), &config).unwrap();
        let loaded = load_dictionary(Path::new(&config.path)).unwrap();

        assert_eq!(loaded.headwords().collect::<Vec<_>>(), vec!["tubig", "aso"]);
    }

    #[test]
    fn test_persist_sorted() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig {
            path: dir.path().join("out.json").to_string_lossy().into_owned(),
            sort: true,
        };

        let written = persist(unsorted(), &config).unwrap();
        let loaded = load_dictionary(Path::new(&config.path)).unwrap();

        assert_eq!(loaded.headwords().collect::<Vec<_>>(), vec!["aso", "tubig"]);
        assert_eq!(loaded, written);
    }
}
