//! Round engine - the guessing state machine
//!
//! One engine drives a whole session of rounds for a single catalog:
//!
//! ```text
//! Idle ──request_round──▶ Loading ──complete_load(ok)──▶ AwaitingGuess
//!                           │                              │      ▲
//!                           └─complete_load(err)─▶ Stalled │      │ hold elapsed
//!                                                          ▼      │
//!                                            Resolved(Correct|Wrong)
//!                                                 │
//!                                                 └─ hold elapsed (correct) ─▶ Loading
//! ```
//!
//! The engine never decodes images itself. `request_round` hands the host a
//! [`LoadRequest`]; the host decodes and pixelizes off-thread and resumes the
//! round with [`RoundEngine::complete_load`] on the game-loop thread. Tickets
//! make superseded or torn-down loads inert.
//!
//! Time only moves through [`RoundEngine::tick`], which advances both the
//! session clock and the post-guess feedback delays, so a new round is never
//! requested while the previous reveal is still on screen.

use tracing::{debug, warn};

use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::rng::SimpleRng;
use crate::snapshot::RoundSnapshot;
use crate::suggest::{rank, wrap_focus};
use crate::text::names_match;
use crate::timer::SessionTimer;
use crate::types::{
    CatalogEntry, Feedback, HistoryEntry, CORRECT_HOLD_MS, UNKNOWN_LABEL, WRONG_HOLD_MS,
};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// No round requested yet (or torn down).
    Idle,
    /// Waiting for the host to finish decoding and pixelizing.
    Loading,
    /// The pixelized image is up and guesses are accepted.
    AwaitingGuess,
    /// A guess was just resolved and its feedback is on hold.
    Resolved(Feedback),
    /// The last image failed to load; the player can only skip.
    Stalled,
}

/// Work the host must do before the round can start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: u64,
    /// Asset-relative image path.
    pub path: String,
    pub block_size: u32,
}

/// Host-produced images for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImages<I> {
    pub pixelized: I,
    /// The unpixelized source, revealed after a correct guess.
    pub source: I,
}

#[derive(Debug, Clone)]
struct PendingLoad {
    ticket: u64,
    entry: CatalogEntry,
}

/// Complete round and session state for one game mode.
///
/// `I` is the host's image handle (a decoded raster, a data URI, ...).
#[derive(Debug)]
pub struct RoundEngine<I> {
    provider: CatalogProvider,
    block_size: u32,
    rng: SimpleRng,
    timer: SessionTimer,
    /// Newest first.
    history: Vec<HistoryEntry>,
    phase: RoundPhase,
    current: Option<CatalogEntry>,
    revealed: Option<I>,
    source: Option<I>,
    pending: Option<PendingLoad>,
    next_ticket: u64,
    guess_input: String,
    suggestions: Vec<String>,
    focused: usize,
    feedback: Feedback,
    feedback_timer_ms: u32,
}

impl<I> RoundEngine<I> {
    /// Create an engine for one catalog; every round uses `block_size`.
    pub fn new(provider: CatalogProvider, block_size: u32, seed: u32) -> Self {
        Self {
            provider,
            block_size: block_size.max(1),
            rng: SimpleRng::new(seed),
            timer: SessionTimer::new(),
            history: Vec::new(),
            phase: RoundPhase::Idle,
            current: None,
            revealed: None,
            source: None,
            pending: None,
            next_ticket: 0,
            guess_input: String::new(),
            suggestions: Vec::new(),
            focused: 0,
            feedback: Feedback::None,
            feedback_timer_ms: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn provider(&self) -> &CatalogProvider {
        &self.provider
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_entry(&self) -> Option<&CatalogEntry> {
        self.current.as_ref()
    }

    pub fn revealed_image(&self) -> Option<&I> {
        self.revealed.as_ref()
    }

    pub fn guess_input(&self) -> &str {
        &self.guess_input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the load currently awaited, if any.
    pub fn pending_ticket(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Borrowed view of everything a frontend renders.
    pub fn snapshot(&self) -> RoundSnapshot<'_, I> {
        RoundSnapshot {
            kind: self.provider.kind(),
            phase: self.phase,
            current: self.current.as_ref(),
            revealed: self.revealed.as_ref(),
            guess_input: &self.guess_input,
            suggestions: &self.suggestions,
            focused: self.focused,
            feedback: self.feedback,
            is_loading: self.is_loading(),
            stats: self.timer.stats(),
            elapsed_seconds: self.timer.total_seconds(),
            ratio: self.timer.ratio(),
            history: &self.history,
            include_extended: self.provider.include_extended(),
            block_size: self.block_size,
        }
    }

    // ---- Session lifecycle ----

    /// Start a fresh session: clear history, restart the clock, request the
    /// first round.
    pub fn begin_session(&mut self) -> Result<LoadRequest> {
        self.teardown();
        self.timer.start();
        self.request_round()
    }

    /// Stop the clock and drop every pending delay, load, and round.
    ///
    /// Nothing scheduled before teardown can touch the state afterwards.
    pub fn teardown(&mut self) {
        self.timer.stop();
        self.history.clear();
        self.pending = None;
        self.phase = RoundPhase::Idle;
        self.current = None;
        self.revealed = None;
        self.source = None;
        self.clear_feedback();
        self.clear_input();
    }

    // ---- Round lifecycle ----

    /// Draw the next entry and ask the host to prepare its images.
    ///
    /// An empty filtered pool leaves the engine idle with no entry and
    /// returns [`GameError::EmptyPool`](crate::GameError::EmptyPool).
    pub fn request_round(&mut self) -> Result<LoadRequest> {
        self.clear_feedback();

        let entry = match self.provider.random_entry(&mut self.rng) {
            Ok(entry) => entry,
            Err(e) => {
                self.pending = None;
                self.phase = RoundPhase::Idle;
                self.current = None;
                self.revealed = None;
                self.source = None;
                return Err(e);
            }
        };

        self.next_ticket = self.next_ticket.wrapping_add(1);
        let request = LoadRequest {
            ticket: self.next_ticket,
            path: self.provider.image_path(&entry),
            block_size: self.block_size,
        };
        debug!(ticket = request.ticket, path = %request.path, "round requested");

        self.pending = Some(PendingLoad {
            ticket: request.ticket,
            entry,
        });
        self.phase = RoundPhase::Loading;
        Ok(request)
    }

    /// Resume a round with the host's load result.
    ///
    /// Returns `false` (and changes nothing) for a ticket that is no longer
    /// awaited. A failed load is logged and stalls the round.
    pub fn complete_load(&mut self, ticket: u64, result: Result<LoadedImages<I>>) -> bool {
        let Some(pending) = self.pending.take() else {
            debug!(ticket, "ignoring load result with nothing pending");
            return false;
        };
        if pending.ticket != ticket {
            debug!(ticket, awaited = pending.ticket, "ignoring stale load result");
            self.pending = Some(pending);
            return false;
        }

        match result {
            Ok(images) => {
                debug!(ticket, "round ready");
                self.current = Some(pending.entry);
                self.revealed = Some(images.pixelized);
                self.source = Some(images.source);
                self.phase = RoundPhase::AwaitingGuess;
            }
            Err(e) => {
                warn!(ticket, error = %e, "round image failed to load");
                self.current = None;
                self.revealed = None;
                self.source = None;
                self.phase = RoundPhase::Stalled;
            }
        }
        true
    }

    /// Submit a guess against the current entry.
    ///
    /// Blank guesses, guesses without an active round, and guesses after the
    /// round was already solved are ignored (`None`).
    pub fn submit_guess(&mut self, guess: &str) -> Option<Feedback> {
        if guess.trim().is_empty() || !self.accepts_guesses() {
            return None;
        }
        let entry = self.current.as_ref()?;

        self.timer.increment_attempts();

        if names_match(guess, &entry.name) {
            let label = entry.name.clone();
            self.timer.increment_correct();
            self.push_history(label, true);
            if let Some(source) = self.source.take() {
                self.revealed = Some(source);
            }
            self.show_feedback(Feedback::Correct, CORRECT_HOLD_MS);
        } else {
            self.timer.reset_streak();
            self.push_history(guess.to_string(), false);
            self.show_feedback(Feedback::Wrong, WRONG_HOLD_MS);
        }

        Some(self.feedback)
    }

    /// Give up on the current image and request another.
    ///
    /// Skips are recorded in history as a miss (label is the entry's name, or
    /// `?` when nothing loaded) but never count as attempts and never touch
    /// the streak. Ignored while a load is in flight or a correct answer is
    /// on display.
    pub fn skip(&mut self) -> Result<Option<LoadRequest>> {
        match self.phase {
            RoundPhase::Loading | RoundPhase::Resolved(Feedback::Correct) => return Ok(None),
            RoundPhase::Idle => {}
            RoundPhase::AwaitingGuess | RoundPhase::Resolved(_) | RoundPhase::Stalled => {
                let label = self
                    .current
                    .as_ref()
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
                self.push_history(label, false);
            }
        }
        self.request_round().map(Some)
    }

    /// Advance the session clock and the feedback delays.
    ///
    /// When a correct answer's hold runs out, the next round is requested and
    /// returned. When a wrong answer's hold runs out, the round goes back to
    /// awaiting guesses with the same entry.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<Option<LoadRequest>> {
        self.timer.tick(elapsed_ms);

        if self.feedback_timer_ms == 0 {
            return Ok(None);
        }
        self.feedback_timer_ms = self.feedback_timer_ms.saturating_sub(elapsed_ms);
        if self.feedback_timer_ms > 0 {
            return Ok(None);
        }

        let resolved = self.feedback;
        self.feedback = Feedback::None;
        match resolved {
            Feedback::Correct => self.request_round().map(Some),
            Feedback::Wrong => {
                if self.phase == RoundPhase::Resolved(Feedback::Wrong) {
                    self.phase = RoundPhase::AwaitingGuess;
                }
                Ok(None)
            }
            Feedback::None => Ok(None),
        }
    }

    /// Flip or set the extended-pool preference. Applies from the next draw.
    pub fn set_include_extended(&mut self, value: bool) -> Result<()> {
        self.provider.set_include_extended(value)?;
        self.refresh_suggestions();
        Ok(())
    }

    // ---- Guess input and suggestions ----

    /// Replace the guess text and recompute suggestions (focus resets).
    pub fn set_guess_input(&mut self, text: &str) {
        self.guess_input.clear();
        self.guess_input.push_str(text);
        self.refresh_suggestions();
    }

    pub fn push_char(&mut self, ch: char) {
        self.guess_input.push(ch);
        self.refresh_suggestions();
    }

    pub fn pop_char(&mut self) {
        self.guess_input.pop();
        self.refresh_suggestions();
    }

    pub fn clear_input(&mut self) {
        self.guess_input.clear();
        self.suggestions.clear();
        self.focused = 0;
    }

    pub fn focus_next(&mut self) {
        self.focused = wrap_focus(self.focused, 1, self.suggestions.len());
    }

    pub fn focus_prev(&mut self) {
        self.focused = wrap_focus(self.focused, -1, self.suggestions.len());
    }

    /// Commit suggestion `index`: clear the input and submit that name.
    /// The input is kept when no guess would be taken right now.
    pub fn select_suggestion(&mut self, index: usize) -> Option<Feedback> {
        if !self.accepts_guesses() {
            return None;
        }
        let name = self.suggestions.get(index).cloned()?;
        self.clear_input();
        self.submit_guess(&name)
    }

    /// Commit the focused suggestion, or the typed text when there are none.
    pub fn accept(&mut self) -> Option<Feedback> {
        if !self.accepts_guesses() {
            return None;
        }
        if !self.suggestions.is_empty() {
            return self.select_suggestion(self.focused);
        }
        let typed = std::mem::take(&mut self.guess_input);
        self.clear_input();
        self.submit_guess(&typed)
    }

    // ---- Internals ----

    fn accepts_guesses(&self) -> bool {
        matches!(
            self.phase,
            RoundPhase::AwaitingGuess | RoundPhase::Resolved(Feedback::Wrong)
        )
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = rank(&self.guess_input, &self.provider.suggestion_pool());
        self.focused = 0;
    }

    fn push_history(&mut self, label: String, was_correct: bool) {
        self.history.insert(0, HistoryEntry { label, was_correct });
    }

    /// Show feedback, replacing any hold still running.
    fn show_feedback(&mut self, feedback: Feedback, hold_ms: u32) {
        self.feedback = feedback;
        self.feedback_timer_ms = hold_ms;
        self.phase = RoundPhase::Resolved(feedback);
    }

    fn clear_feedback(&mut self) {
        self.feedback = Feedback::None;
        self.feedback_timer_ms = 0;
    }
}
