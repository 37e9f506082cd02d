//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer of styled cells, and the renderer flushes only what changed.
//! Images are drawn with upper-half-block glyphs, two pixels per cell.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layouts can be asserted on in tests
//! - Truecolor output; the mosaic is the whole point of the game

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pixel_guess_core as core;
pub use pixel_guess_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{GameView, StatusLine, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
