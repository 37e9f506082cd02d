//! Core game logic - pure, deterministic, and testable
//!
//! Everything the guessing game decides lives here: name normalization,
//! suggestion ranking, catalog filtering and draws, the session clock, and
//! the round state machine. Nothing in this crate touches the terminal,
//! the filesystem, or a thread; images arrive through a ticketed load
//! request that the host answers (see [`round`]).
//!
//! # Module Structure
//!
//! - [`text`]: name normalization (case, accents, separators)
//! - [`suggest`]: substring ranking for the guess autocomplete
//! - [`catalog`]: parsed catalogs, preference-filtered pools, image paths
//! - [`rng`]: seeded LCG for reproducible draws
//! - [`timer`]: session clock, attempts, correct count, streak
//! - [`round`]: the round engine itself
//! - [`snapshot`]: borrowed per-frame view for frontends
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pixel_guess_core::{Catalog, CatalogProvider, LoadedImages, MemoryPreferences, RoundEngine};
//! use pixel_guess_core::types::{CatalogEntry, CatalogKind, Category, Feedback};
//!
//! let catalog = Catalog::new(
//!     CatalogKind::Characters,
//!     vec![CatalogEntry::new("Ashe_0.jpg", "Ashe", Category::Default)],
//! );
//! let provider = CatalogProvider::new(Arc::new(catalog), Box::new(MemoryPreferences::new()));
//! let mut engine: RoundEngine<&str> = RoundEngine::new(provider, 20, 7);
//!
//! let req = engine.begin_session().unwrap();
//! engine.complete_load(req.ticket, Ok(LoadedImages { pixelized: "blocky", source: "sharp" }));
//!
//! assert_eq!(engine.submit_guess("  ASHE "), Some(Feedback::Correct));
//! assert_eq!(engine.revealed_image(), Some(&"sharp"));
//! ```
//!
//! # Timing
//!
//! Call [`RoundEngine::tick`] with elapsed milliseconds. It drives the
//! session clock (whole seconds) and the feedback holds:
//! - correct answer: 1000ms, then the next round is requested
//! - wrong answer: 2000ms, then the same image is guessable again

pub mod catalog;
pub mod error;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod suggest;
pub mod text;
pub mod timer;

pub use pixel_guess_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CatalogProvider, MemoryPreferences, PreferenceStore};
pub use error::{GameError, Result};
pub use rng::SimpleRng;
pub use round::{LoadRequest, LoadedImages, RoundEngine, RoundPhase};
pub use snapshot::RoundSnapshot;
pub use suggest::rank;
pub use text::{names_match, normalize};
pub use timer::{format_clock, score_ratio, SessionTimer};
