//! Dictionary data model and entry disambiguation
//!
//! # Components
//!
//! - `WordEntry`: one headword with its tags and definition
//! - `Dictionary`: headword-keyed accumulation of entries, last write wins
//! - `TagVocabulary`: the fixed list of known part-of-speech markers
//! - `disambiguate`: splits a raw definition block into tags and definition

mod disambiguate;
mod entry;

pub use disambiguate::{disambiguate, index_tags, Disambiguation, TagVocabulary};
pub use entry::{Dictionary, WordEntry};
