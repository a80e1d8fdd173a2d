//! HTML parser for listing pages
//!
//! This module handles parsing a fetched listing page to extract:
//! - Word groups (headword link plus definition paragraph)
//! - Dictionary entries, via the part-of-speech disambiguator
//!
//! # Listing Markup
//!
//! ```html
//! <div class="word-group">
//!   <a href="/word/bahay/">bahay</a>
//!   <div class="definition"><p>bahay n. house; home</p></div>
//! </div>
//! ```

use crate::config::DefinitionSplit;
use crate::crawler::fetcher::FetchedPage;
use crate::dictionary::{disambiguate, TagVocabulary, WordEntry};
use crate::ExtractError;
use scraper::{ElementRef, Html, Selector};

/// A parsed listing page
pub struct ListingPage {
    /// The URL the page was fetched from
    pub url: String,

    /// The parsed document tree
    pub document: Html,
}

impl ListingPage {
    /// Parses raw HTML into a listing page
    pub fn parse(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

impl From<&FetchedPage> for ListingPage {
    fn from(page: &FetchedPage) -> Self {
        Self::parse(page.url.clone(), &page.body)
    }
}

/// Raw text of one word group, before disambiguation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub headword: String,
    pub definition_block: String,
}

/// Entries extracted from one page
#[derive(Debug, Default)]
pub struct PageEntries {
    /// Entries in page order
    pub entries: Vec<WordEntry>,

    /// Word groups that could not be turned into entries
    pub skipped: Vec<ExtractError>,
}

/// Extracts the raw word groups of a listing page
///
/// Each `div.word-group` yields one item: the text of its first link and the
/// text of its first `div.definition p`. A page without word groups yields an
/// empty list.
pub fn extract_word_groups(page: &ListingPage) -> Vec<Result<WordGroup, ExtractError>> {
    let (Ok(group_selector), Ok(link_selector), Ok(definition_selector)) = (
        Selector::parse("div.word-group"),
        Selector::parse("a"),
        Selector::parse("div.definition p"),
    ) else {
        return Vec::new();
    };

    page.document
        .select(&group_selector)
        .map(|group| -> Result<WordGroup, ExtractError> {
            let headword = group
                .select(&link_selector)
                .next()
                .map(|link| element_text(&link))
                .filter(|headword| !headword.is_empty())
                .ok_or(ExtractError::MissingHeadword)?;

            let definition_block = group
                .select(&definition_selector)
                .next()
                .map(|paragraph| element_text(&paragraph))
                .ok_or_else(|| ExtractError::MissingDefinition {
                    headword: headword.clone(),
                })?;

            Ok(WordGroup {
                headword,
                definition_block,
            })
        })
        .collect()
}

/// Extracts dictionary entries from a listing page
///
/// A word group that cannot be parsed, including one whose definition has no
/// known part of speech, is logged and skipped; the rest of the page is still
/// extracted.
pub fn extract_entries(
    page: &ListingPage,
    vocabulary: &TagVocabulary,
    split: DefinitionSplit,
) -> PageEntries {
    let mut extracted = PageEntries::default();

    for group in extract_word_groups(page) {
        let entry = group.and_then(|group| {
            let parsed = disambiguate(&group.definition_block, vocabulary, split)?;
            Ok(WordEntry::new(
                group.headword,
                parsed.parts_of_speech,
                parsed.definition,
            ))
        });

        match entry {
            Ok(entry) => {
                tracing::debug!(
                    "Word: {} Part of Speech: {:?} Definition: {}",
                    entry.headword,
                    entry.parts_of_speech,
                    entry.definition
                );
                extracted.entries.push(entry);
            }
            Err(e) => {
                tracing::warn!("Skipping entry on {}: {}", page.url, e);
                extracted.skipped.push(e);
            }
        }
    }

    extracted
}

/// Collects the text content of an element with whitespace runs collapsed
fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(groups: &str) -> ListingPage {
        ListingPage::parse(
            "https://example.com/list/b/",
            &format!("<html><body><div class=\"list\">{}</div></body></html>", groups),
        )
    }

    fn group(headword: &str, definition: &str) -> String {
        format!(
            r#"<div class="word-group"><a href="/word/{0}/">{0}</a><div class="definition"><p>{1}</p></div></div>"#,
            headword, definition
        )
    }

    fn vocabulary() -> TagVocabulary {
        TagVocabulary::new(["n.", "syn.", "adj."])
    }

    #[test]
    fn test_extract_word_groups() {
        let page = listing(&format!(
            "{}{}",
            group("bahay", "bahay n. house"),
            group("masungit", "masungit adj. ill-tempered")
        ));

        let groups: Vec<_> = extract_word_groups(&page)
            .into_iter()
            .map(Result::unwrap)
            .collect();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].headword, "bahay");
        assert_eq!(groups[0].definition_block, "bahay n. house");
        assert_eq!(groups[1].headword, "masungit");
    }

    #[test]
    fn test_empty_page() {
        let page = listing("");
        assert!(extract_word_groups(&page).is_empty());

        let extracted = extract_entries(&page, &vocabulary(), DefinitionSplit::LastFragment);
        assert!(extracted.entries.is_empty());
        assert!(extracted.skipped.is_empty());
    }

    #[test]
    fn test_first_link_and_paragraph_win() {
        let page = listing(
            r#"<div class="word-group">
                <a href="/word/aso/"> aso </a>
                <a href="/word/pusa/">pusa</a>
                <div class="definition"><p>aso n. dog</p><p>ignored</p></div>
            </div>"#,
        );

        let groups = extract_word_groups(&page);
        let group = groups[0].as_ref().unwrap();

        assert_eq!(group.headword, "aso");
        assert_eq!(group.definition_block, "aso n. dog");
    }

    #[test]
    fn test_extract_entries() {
        let page = listing(&group("bahay", "bahay n. syn. tahanan house; home"));

        let extracted = extract_entries(&page, &vocabulary(), DefinitionSplit::LastFragment);

        assert_eq!(extracted.entries.len(), 1);
        let entry = &extracted.entries[0];
        assert_eq!(entry.headword, "bahay");
        assert_eq!(entry.parts_of_speech, vec!["n.", "syn."]);
        assert_eq!(entry.definition, "tahanan house; home");
    }

    #[test]
    fn test_unrecognized_entry_skipped() {
        let page = listing(&format!(
            "{}{}{}",
            group("una", "una n. first"),
            group("walang", "walang tanda"),
            group("pula", "pula adj. red")
        ));

        let extracted = extract_entries(&page, &vocabulary(), DefinitionSplit::LastFragment);

        let headwords: Vec<_> = extracted.entries.iter().map(|e| e.headword.as_str()).collect();
        assert_eq!(headwords, vec!["una", "pula"]);
        assert_eq!(extracted.skipped.len(), 1);
        assert!(matches!(
            extracted.skipped[0],
            ExtractError::NoPartOfSpeechFound { .. }
        ));
    }

    #[test]
    fn test_missing_parts_skipped() {
        let page = listing(
            r#"<div class="word-group"><div class="definition"><p>n. orphan</p></div></div>
               <div class="word-group"><a href="/word/isa/">isa</a></div>"#,
        );

        let extracted = extract_entries(&page, &vocabulary(), DefinitionSplit::LastFragment);

        assert!(extracted.entries.is_empty());
        assert_eq!(
            extracted.skipped,
            vec![
                ExtractError::MissingHeadword,
                ExtractError::MissingDefinition {
                    headword: "isa".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_multiline_text_is_collapsed() {
        let page = listing(
            "<div class=\"word-group\">
                <a href=\"/word/bahay/\">
                    bahay
                </a>
                <div class=\"definition\"><p>bahay
        by
        ext. house;
        home</p></div>
            </div>",
        );

        let groups = extract_word_groups(&page);
        let group = groups[0].as_ref().unwrap();
        assert_eq!(group.headword, "bahay");
        assert_eq!(group.definition_block, "bahay by ext. house; home");

        let vocabulary = TagVocabulary::new(["n.", "by ext."]);
        let extracted = extract_entries(&page, &vocabulary, DefinitionSplit::LastFragment);

        assert!(extracted.skipped.is_empty());
        assert_eq!(extracted.entries[0].parts_of_speech, vec!["by ext."]);
        assert_eq!(extracted.entries[0].definition, "house; home");
    }
}
