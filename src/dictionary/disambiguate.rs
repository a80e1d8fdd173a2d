//! Part-of-speech and definition inference
//!
//! Definition blocks on the site are plain text shaped like
//! `headword <tag(s)> definition`, with no markup separating the pieces.
//! Structure is recovered in two steps:
//!
//! 1. [`index_tags`] records where each known tag first occurs.
//! 2. [`disambiguate`] takes the tag with the highest position as the anchor
//!    nearest to the definition, orders the tags, and cuts the definition
//!    text after the anchor.

use crate::config::{DefinitionSplit, DEFAULT_PARTS_OF_SPEECH};
use crate::ExtractError;
use indexmap::IndexMap;

/// Immutable, ordered list of known part-of-speech tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagVocabulary {
    tags: Vec<String>,
}

impl TagVocabulary {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_PARTS_OF_SPEECH.iter().copied())
    }
}

/// Tags and definition recovered from one definition block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disambiguation {
    /// Never empty; the last tag is the one the definition was cut after
    pub parts_of_speech: Vec<String>,
    pub definition: String,
}

/// Maps the first position of every vocabulary tag found in `text` to that tag
///
/// Positions are byte offsets, which order the same way as character offsets.
/// Entries keep vocabulary scan order. When two tags first occur at the same
/// position, the later tag in the vocabulary replaces the earlier one but keeps
/// the earlier one's place in the order.
pub fn index_tags<'v>(text: &str, vocabulary: &'v TagVocabulary) -> IndexMap<usize, &'v str> {
    let mut positions = IndexMap::new();
    for tag in vocabulary.tags() {
        if let Some(position) = text.find(tag.as_str()) {
            positions.insert(position, tag.as_str());
        }
    }
    positions
}

/// Infers the ordered tags and the definition text of a definition block
///
/// # Errors
///
/// Returns [`ExtractError::NoPartOfSpeechFound`] if no vocabulary tag occurs
/// in `text`.
///
/// # Example
///
/// ```
/// use tagalog_scraper::config::DefinitionSplit;
/// use tagalog_scraper::dictionary::{disambiguate, TagVocabulary};
///
/// let vocabulary = TagVocabulary::new(["n.", "syn."]);
/// let parsed = disambiguate(
///     "bahay n. syn. tahanan house; home",
///     &vocabulary,
///     DefinitionSplit::LastFragment,
/// )
/// .unwrap();
///
/// assert_eq!(parsed.parts_of_speech, vec!["n.", "syn."]);
/// assert_eq!(parsed.definition, "tahanan house; home");
/// ```
pub fn disambiguate(
    text: &str,
    vocabulary: &TagVocabulary,
    split: DefinitionSplit,
) -> Result<Disambiguation, ExtractError> {
    let mut positions = index_tags(text, vocabulary);

    let nearest = positions
        .keys()
        .copied()
        .max()
        .and_then(|position| positions.shift_remove(&position))
        .ok_or_else(|| ExtractError::NoPartOfSpeechFound {
            text: text.to_string(),
        })?;

    let mut parts_of_speech: Vec<String> = positions.values().map(|tag| tag.to_string()).collect();
    parts_of_speech.push(nearest.to_string());

    let definition = cut_definition(text, nearest, split).trim().to_string();

    Ok(Disambiguation {
        parts_of_speech,
        definition,
    })
}

/// Returns the part of `text` after the anchor tag
fn cut_definition<'t>(text: &'t str, anchor: &str, split: DefinitionSplit) -> &'t str {
    match split {
        // A repeated anchor inside the definition truncates it to the last piece.
        DefinitionSplit::LastFragment => text.rsplit(anchor).next().unwrap_or(text),
        DefinitionSplit::FirstOccurrence => text
            .split_once(anchor)
            .map(|(_, rest)| rest)
            .unwrap_or(text),
    }
}
