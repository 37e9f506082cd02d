//! Pixel Guess (workspace facade crate).
//!
//! Re-exports the member crates under short names and adds the pieces that
//! tie them together for the binary: configuration and engine wiring.

pub use pixel_guess_assets as assets;
pub use pixel_guess_core as core;
pub use pixel_guess_input as input;
pub use pixel_guess_pixel as pixel;
pub use pixel_guess_term as term;
pub use pixel_guess_types as types;

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{build_engine, open_provider, TerminalEngine};
