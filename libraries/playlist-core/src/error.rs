//! Core error types for playlist editing

use thiserror::Error;

use crate::types::PlaylistHandle;

/// Result type alias using `PlaylistError`
pub type Result<T> = std::result::Result<T, PlaylistError>;

/// Playlist editing errors
///
/// `InvalidInput` covers caller-contract violations detected before the
/// repository is consulted. `NotFound`, `CapacityExceeded` and
/// `InvalidIndex` are domain-rule violations detected after the playlist has
/// been resolved. `Config` and `Storage` come from the surrounding
/// infrastructure and are never produced by the editing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaylistError {
    /// Missing or malformed arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Playlist does not exist or has been deleted
    #[error("Playlist not found: {0}")]
    NotFound(PlaylistHandle),

    /// Adding the tracks would grow the playlist past its ceiling
    #[error("Playlist cannot have more than {max} tracks (has {current}, adding {adding})")]
    CapacityExceeded {
        /// Tracks already in the playlist
        current: usize,
        /// Tracks in the rejected batch
        adding: usize,
        /// Configured ceiling
        max: usize,
    },

    /// Requested position lies outside the playlist
    #[error("Position {position} is out of bounds for playlist of size {size}")]
    InvalidIndex {
        /// Position as requested by the caller
        position: i64,
        /// Track count at the time of the request
        size: usize,
    },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// A storage backend failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PlaylistError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for caller-contract violations, false for domain-rule violations
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl From<config::ConfigError> for PlaylistError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
