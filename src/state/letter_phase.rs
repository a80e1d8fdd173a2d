//! Phase definitions for the per-letter crawl state machine
//!
//! Each letter moves through the phases strictly in order; the crawl then
//! starts the next letter at `FetchFirstPage`.

use std::fmt;

/// Represents where a letter is in its crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterPhase {
    /// Fetching the letter's first listing page
    FetchFirstPage,

    /// Reading the "last page" link of the first page
    DiscoverPagination,

    /// Building the listing URLs for every page
    EnumerateUrls,

    /// Fetching every listing page
    FetchAllPages,

    /// Extracting entries and merging them into the dictionary
    ExtractAndMerge,

    /// The letter is finished
    NextLetter,
}

impl LetterPhase {
    /// The phase that follows this one, or None once the letter is finished
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::FetchFirstPage => Some(Self::DiscoverPagination),
            Self::DiscoverPagination => Some(Self::EnumerateUrls),
            Self::EnumerateUrls => Some(Self::FetchAllPages),
            Self::FetchAllPages => Some(Self::ExtractAndMerge),
            Self::ExtractAndMerge => Some(Self::NextLetter),
            Self::NextLetter => None,
        }
    }

    /// Returns true if the letter is finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::NextLetter)
    }

    /// Returns true if moving from this phase to `to` is allowed
    pub fn can_transition_to(&self, to: Self) -> bool {
        self.next() == Some(to)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchFirstPage => "fetch_first_page",
            Self::DiscoverPagination => "discover_pagination",
            Self::EnumerateUrls => "enumerate_urls",
            Self::FetchAllPages => "fetch_all_pages",
            Self::ExtractAndMerge => "extract_and_merge",
            Self::NextLetter => "next_letter",
        }
    }
}

impl fmt::Display for LetterPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let mut phase = LetterPhase::FetchFirstPage;
        let mut visited = vec![phase];
        while let Some(next) = phase.next() {
            assert!(phase.can_transition_to(next));
            phase = next;
            visited.push(phase);
        }

        assert_eq!(
            visited,
            vec![
                LetterPhase::FetchFirstPage,
                LetterPhase::DiscoverPagination,
                LetterPhase::EnumerateUrls,
                LetterPhase::FetchAllPages,
                LetterPhase::ExtractAndMerge,
                LetterPhase::NextLetter,
            ]
        );
        assert!(phase.is_terminal());
    }

    #[test]
    fn test_skipping_phases_not_allowed() {
        assert!(!LetterPhase::FetchFirstPage.can_transition_to(LetterPhase::FetchAllPages));
        assert!(!LetterPhase::ExtractAndMerge.can_transition_to(LetterPhase::FetchFirstPage));
        assert!(!LetterPhase::NextLetter.can_transition_to(LetterPhase::FetchFirstPage));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LetterPhase::FetchFirstPage), "fetch_first_page");
        assert_eq!(format!("{}", LetterPhase::NextLetter), "next_letter");
    }
}
