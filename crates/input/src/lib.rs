//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Printable
//! keys always type into the guess, so every command sits on a non-printable
//! key (arrows, Enter, Tab, function keys, Esc).

pub mod map;

pub use pixel_guess_types as types;

pub use map::{handle_key_event, should_quit};
