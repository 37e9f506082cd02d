//! Error taxonomy for catalog loading, image loading, and round start.
//!
//! Wrong guesses are not errors; they are [`Feedback::Wrong`](crate::types::Feedback).

use thiserror::Error;

/// Errors surfaced by the game core and its host adapters.
#[derive(Debug, Error)]
pub enum GameError {
    /// A catalog or name list could not be read or parsed.
    #[error("failed to load {what}: {reason}")]
    DataLoad { what: String, reason: String },

    /// A specific image could not be read or decoded.
    #[error("failed to load image {path}: {reason}")]
    ImageLoad { path: String, reason: String },

    /// The filtered catalog pool has no entries.
    #[error("no {kind} entries available with the current filter")]
    EmptyPool { kind: &'static str },

    /// The preference store could not persist a value.
    #[error("failed to save preference {key}: {reason}")]
    Preferences { key: String, reason: String },
}

impl GameError {
    pub fn data_load(what: impl Into<String>, reason: impl ToString) -> Self {
        GameError::DataLoad {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    pub fn image_load(path: impl Into<String>, reason: impl ToString) -> Self {
        GameError::ImageLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_empty_pool(&self) -> bool {
        matches!(self, GameError::EmptyPool { .. })
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
