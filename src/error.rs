//! Error types for Abaco.
//!
//! Calculator transitions are total and never fail; these errors cover the
//! surface around them: clipboard, terminal, locale selection and key replay.

use thiserror::Error;

/// Result type alias for Abaco operations.
pub type Result<T> = std::result::Result<T, AbacoError>;

/// Errors that can occur in Abaco.
#[derive(Debug, Error)]
pub enum AbacoError {
    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// No locale profile is registered under this tag.
    #[error("Unknown locale: {tag} (expected one of: {known})")]
    UnknownLocale {
        /// Tag as given by the user.
        tag: String,
        /// Comma separated list of supported tags.
        known: String,
    },

    /// A replayed key has no binding.
    #[error("No binding for key {key:?} at position {position}")]
    UnboundKey {
        /// The offending character.
        key: char,
        /// Zero-based character index in the sequence.
        position: usize,
    },

    /// The display holds the error sentinel.
    #[error("Nothing to copy")]
    NothingToCopy,
}

impl AbacoError {
    /// Create an UnknownLocale error.
    pub fn unknown_locale(tag: impl Into<String>, known: &[&str]) -> Self {
        Self::UnknownLocale {
            tag: tag.into(),
            known: known.join(", "),
        }
    }

    /// Create an UnboundKey error.
    pub fn unbound_key(key: char, position: usize) -> Self {
        Self::UnboundKey { key, position }
    }
}
