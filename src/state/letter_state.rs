use crate::state::LetterPhase;
use crate::ScraperError;

/// Transient context for one letter's crawl
///
/// Lives only while the letter is being processed; the coordinator drops it
/// once the letter reaches [`LetterPhase::NextLetter`].
#[derive(Debug, Clone)]
pub struct LetterCrawlState {
    /// The letter being crawled
    pub letter: char,

    /// Current phase
    pub phase: LetterPhase,

    /// Exclusive upper bound of the page range, known after pagination discovery
    pub last_page: Option<u32>,

    /// Listing URLs in page order, known after enumeration
    pub urls: Vec<String>,
}

impl LetterCrawlState {
    /// Creates the state for a letter that has not been fetched yet
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            phase: LetterPhase::FetchFirstPage,
            last_page: None,
            urls: Vec::new(),
        }
    }

    /// Moves to the next phase
    ///
    /// # Errors
    ///
    /// Returns `ScraperError::InvalidTransition` if `to` does not directly
    /// follow the current phase.
    pub fn advance(&mut self, to: LetterPhase) -> Result<(), ScraperError> {
        if !self.phase.can_transition_to(to) {
            return Err(ScraperError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        tracing::trace!("Letter {}: {} -> {}", self.letter, self.phase, to);
        self.phase = to;
        Ok(())
    }

    /// Number of listing pages for this letter, zero before discovery
    pub fn page_count(&self) -> u32 {
        self.last_page.map(|last| last.saturating_sub(1)).unwrap_or(0)
    }
}
