//! Host-side I/O for the game core
//!
//! - [`files`]: catalog data files under the asset root
//! - [`prefs`]: JSON-file backed [`PreferenceStore`](pixel_guess_core::PreferenceStore)
//! - [`loader`]: background decode + pixelize, delivered back to the game loop

pub mod files;
pub mod loader;
pub mod prefs;

pub use files::{catalog_file_name, load_catalog, CHARACTER_NAMES_FILE};
pub use loader::{load_round_images, ImageLoader, LoadOutcome};
pub use prefs::JsonFilePreferences;
