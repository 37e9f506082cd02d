use crate::round::RoundPhase;
use crate::timer::format_clock;
use crate::types::{CatalogEntry, CatalogKind, Feedback, HistoryEntry, SessionStats};

/// Read-only view of one engine, borrowed for a single frame.
#[derive(Debug)]
pub struct RoundSnapshot<'a, I> {
    pub kind: CatalogKind,
    pub phase: RoundPhase,
    pub current: Option<&'a CatalogEntry>,
    pub revealed: Option<&'a I>,
    pub guess_input: &'a str,
    pub suggestions: &'a [String],
    pub focused: usize,
    pub feedback: Feedback,
    pub is_loading: bool,
    pub stats: SessionStats,
    pub elapsed_seconds: u32,
    pub ratio: u32,
    /// Newest first.
    pub history: &'a [HistoryEntry],
    pub include_extended: bool,
    pub block_size: u32,
}

impl<I> RoundSnapshot<'_, I> {
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_seconds)
    }

    /// The name shown under the image once it has been guessed.
    pub fn answer(&self) -> Option<&str> {
        match self.feedback {
            Feedback::Correct => self.current.map(|e| e.name.as_str()),
            _ => None,
        }
    }

    pub fn accepts_guesses(&self) -> bool {
        matches!(
            self.phase,
            RoundPhase::AwaitingGuess | RoundPhase::Resolved(Feedback::Wrong)
        )
    }
}

// Manual impls: `I` itself need not be Clone/Copy to copy a borrow of it.
impl<I> Clone for RoundSnapshot<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for RoundSnapshot<'_, I> {}
