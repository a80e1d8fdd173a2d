//! Word entries and the headword-keyed dictionary they accumulate into

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};
use serde::Deserialize;

/// One extracted dictionary entry
///
/// The headword is the key of the enclosing [`Dictionary`]; it is not repeated
/// in the serialized entry object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(skip)]
    pub headword: String,

    /// Tags in scan order, with the tag nearest to the definition last
    pub parts_of_speech: Vec<String>,

    pub definition: String,
}

impl WordEntry {
    pub fn new(
        headword: impl Into<String>,
        parts_of_speech: Vec<String>,
        definition: impl Into<String>,
    ) -> Self {
        Self {
            headword: headword.into(),
            parts_of_speech,
            definition: definition.into(),
        }
    }

    /// The tag the definition text was split on
    pub fn anchor_tag(&self) -> Option<&str> {
        self.parts_of_speech.last().map(String::as_str)
    }
}

/// Mapping from headword to entry, in first-insertion order
///
/// Re-inserting a headword replaces the stored entry in place; the newest
/// entry always wins and no fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, WordEntry>")]
pub struct Dictionary {
    entries: IndexMap<String, WordEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the entry it replaced if the headword was already present
    pub fn insert(&mut self, entry: WordEntry) -> Option<WordEntry> {
        self.entries.insert(entry.headword.clone(), entry)
    }

    pub fn get(&self, headword: &str) -> Option<&WordEntry> {
        self.entries.get(headword)
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords in iteration order
    pub fn headwords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Sorts entries by headword (byte-wise)
    pub fn sort_by_headword(&mut self) {
        self.entries.sort_keys();
    }
}

impl Extend<WordEntry> for Dictionary {
    fn extend<I: IntoIterator<Item = WordEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl FromIterator<WordEntry> for Dictionary {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl From<IndexMap<String, WordEntry>> for Dictionary {
    fn from(mut entries: IndexMap<String, WordEntry>) -> Self {
        for (headword, entry) in entries.iter_mut() {
            entry.headword = headword.clone();
        }
        Self { entries }
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}
