//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, making them usable in any context
//! (round logic, terminal rendering, catalog loading).
//!
//! # Difficulty
//!
//! Difficulty is expressed purely as the pixel-block size used by the
//! pixelization pipeline. Larger blocks mean fewer effective pixels.
//!
//! | Difficulty | Block size |
//! |------------|------------|
//! | Easy | 20 |
//! | Medium | 33 |
//! | Hard | 46 |
//! | Extreme | 59 |
//!
//! Item rounds ignore difficulty and always use [`ITEM_BLOCK_SIZE`].
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1000 | One session clock unit |
//! | `CORRECT_HOLD_MS` | 1000 | Revealed image stays up before the next round |
//! | `WRONG_HOLD_MS` | 2000 | Wrong feedback stays up before reverting |
//!
//! # Examples
//!
//! ```
//! use pixel_guess_types::{CatalogKind, Difficulty};
//!
//! let d = Difficulty::from_str("moyen").unwrap();
//! assert_eq!(d, Difficulty::Medium);
//! assert_eq!(d.block_size(), 33);
//! assert_eq!(CatalogKind::Items.block_size(d), 10);
//! ```

use serde::{Deserialize, Serialize};

/// One session clock unit (1 second)
pub const TICK_MS: u32 = 1000;

/// How long a correct answer stays revealed before the next round starts
pub const CORRECT_HOLD_MS: u32 = 1000;

/// How long wrong-answer feedback stays up before the round reverts
pub const WRONG_HOLD_MS: u32 = 2000;

/// Block size used by every item round
pub const ITEM_BLOCK_SIZE: u32 = 10;

/// History label used when a round is skipped without an active entry
pub const UNKNOWN_LABEL: &str = "?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_timing_defaults() {
        assert_eq!(TICK_MS, 1000);
        assert_eq!(CORRECT_HOLD_MS, 1000);
        assert_eq!(WRONG_HOLD_MS, 2000);
        assert_eq!(ITEM_BLOCK_SIZE, 10);
    }

    #[test]
    fn difficulty_block_sizes_grow() {
        let sizes: Vec<u32> = Difficulty::ALL.iter().map(|d| d.block_size()).collect();
        assert_eq!(sizes, vec![20, 33, 46, 59]);
    }

    #[test]
    fn default_difficulty_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
        assert_eq!(Difficulty::default().description(), "Relaxed beginner");
    }

    #[test]
    fn difficulty_parses_english_and_french() {
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("facile"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("difficile"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("Extreme"), Some(Difficulty::Extreme));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn category_accepts_both_catalog_spellings() {
        let c: Category = serde_json::from_str("\"classique\"").unwrap();
        assert_eq!(c, Category::Default);
        let c: Category = serde_json::from_str("\"arena\"").unwrap();
        assert_eq!(c, Category::Extended);
        let c: Category = serde_json::from_str("\"skin\"").unwrap();
        assert_eq!(c, Category::Extended);
        assert!(serde_json::from_str::<Category>("\"legendary\"").is_err());
    }

    #[test]
    fn item_rounds_ignore_difficulty() {
        assert_eq!(CatalogKind::Items.block_size(Difficulty::Extreme), ITEM_BLOCK_SIZE);
        assert_eq!(CatalogKind::Characters.block_size(Difficulty::Hard), 46);
    }

    #[test]
    fn catalog_entry_reads_champion_alias() {
        let e: CatalogEntry =
            serde_json::from_str(r#"{"file":"Ahri_0.jpg","champion":"Ahri","category":"default"}"#)
                .unwrap();
        assert_eq!(e.name, "Ahri");
        assert_eq!(e.category, Category::Default);
    }

    #[test]
    fn stats_default_is_zeroed() {
        assert_eq!(SessionStats::default(), SessionStats { attempts: 0, correct: 0, streak: 0 });
    }
}

/// Difficulty levels for character rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Pixel-block size for this difficulty.
    pub fn block_size(&self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 33,
            Difficulty::Hard => 46,
            Difficulty::Extreme => 59,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }

    /// One-line description shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Relaxed beginner",
            Difficulty::Medium => "A little spicy",
            Difficulty::Hard => "A serious challenge",
            Difficulty::Extreme => "Pixel madness!",
        }
    }

    /// Parse a difficulty (case-insensitive).
    ///
    /// Accepts the English names and the original route names
    /// (`facile`, `moyen`, `difficile`, `extreme`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_guess_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("Facile"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facile" => Some(Difficulty::Easy),
            "medium" | "moyen" => Some(Difficulty::Medium),
            "hard" | "difficile" => Some(Difficulty::Hard),
            "extreme" => Some(Difficulty::Extreme),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }
}

/// Pool a catalog entry belongs to.
///
/// - **Default**: the restricted pool every player sees
/// - **Extended**: the larger pool enabled by the player's preference
///   (character skins, arena items)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "default", alias = "classique")]
    Default,
    #[serde(rename = "extended", alias = "skin", alias = "arena")]
    Extended,
}

impl Category {
    pub fn is_extended(&self) -> bool {
        matches!(self, Category::Extended)
    }
}

/// Which guessable catalog a game runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    #[default]
    Characters,
    Items,
}

impl CatalogKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "characters" | "character" | "champions" | "champion" => Some(CatalogKind::Characters),
            "items" | "item" => Some(CatalogKind::Items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Characters => "characters",
            CatalogKind::Items => "items",
        }
    }

    /// Preference key holding this catalog's "include extended pool" flag.
    pub fn preference_key(&self) -> &'static str {
        match self {
            CatalogKind::Characters => "includeSkins",
            CatalogKind::Items => "item_includeArena",
        }
    }

    /// Image sub-folder for entries of the given category.
    pub fn image_folder(&self, category: Category) -> &'static str {
        match (self, category) {
            (CatalogKind::Characters, Category::Default) => "ImagesChamps/DefaultChamps",
            (CatalogKind::Characters, Category::Extended) => "ImagesChamps/SkinChamps",
            (CatalogKind::Items, Category::Default) => "ImagesItems/Classique",
            (CatalogKind::Items, Category::Extended) => "ImagesItems/Arena",
        }
    }

    /// Pixel-block size for a round of this kind.
    ///
    /// Item rounds always use [`ITEM_BLOCK_SIZE`]; character rounds follow
    /// the chosen difficulty.
    pub fn block_size(&self, difficulty: Difficulty) -> u32 {
        match self {
            CatalogKind::Characters => difficulty.block_size(),
            CatalogKind::Items => ITEM_BLOCK_SIZE,
        }
    }

    /// Label used for the extended-pool toggle.
    pub fn extended_label(&self) -> &'static str {
        match self {
            CatalogKind::Characters => "skins",
            CatalogKind::Items => "arena",
        }
    }
}

/// A guessable catalog entry (immutable once loaded).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// File name, relative to the category's image folder
    pub file: String,
    /// True name of the pictured character or item
    #[serde(alias = "champion")]
    pub name: String,
    pub category: Category,
}

impl CatalogEntry {
    pub fn new(file: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
            category,
        }
    }
}

/// Transient outcome of the most recent guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Wrong,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::None => "none",
            Feedback::Correct => "correct",
            Feedback::Wrong => "wrong",
        }
    }
}

/// A resolved guess or skip, newest first in a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub label: String,
    pub was_correct: bool,
}

impl HistoryEntry {
    pub fn new(label: impl Into<String>, was_correct: bool) -> Self {
        Self {
            label: label.into(),
            was_correct,
        }
    }
}

/// Aggregate stats for one session.
///
/// Invariant: `correct <= attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionStats {
    pub attempts: u32,
    pub correct: u32,
    pub streak: u32,
}

/// Player actions that drive a round
///
/// Produced by the input layer and applied by the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Append a character to the guess input
    Type(char),
    /// Delete the last character of the guess input
    Backspace,
    /// Clear the guess input
    ClearInput,
    /// Move suggestion focus down (wraps)
    FocusNext,
    /// Move suggestion focus up (wraps)
    FocusPrev,
    /// Commit the focused suggestion, or the typed text when there is none
    Accept,
    /// Give up on the current image and draw another
    Skip,
    /// Flip the "include extended pool" preference
    ToggleExtended,
    /// Show or hide the history panel
    ToggleHistory,
    /// Leave the game screen
    Back,
}
