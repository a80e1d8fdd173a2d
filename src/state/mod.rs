//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `LetterPhase`: the ordered phases a letter passes through
//! - `LetterCrawlState`: per-letter context (phase, page range, listing URLs)

mod letter_phase;
mod letter_state;

// Re-export main types
pub use letter_phase::LetterPhase;
pub use letter_state::LetterCrawlState;
