//! Storage-specific errors

use playlist_core::types::PlaylistId;
use playlist_core::{PlaylistError, PlaylistHandle};
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A playlist with this handle is already stored
    #[error("Playlist already exists: {0}")]
    DuplicateHandle(PlaylistHandle),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    NotFound(PlaylistHandle),

    /// Every storage identifier is in use
    #[error("Playlist identifiers exhausted (last assigned {0})")]
    IdsExhausted(PlaylistId),

    /// Snapshot serialization/deserialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl From<StorageError> for PlaylistError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(handle) => PlaylistError::NotFound(handle),
            other => PlaylistError::storage(other.to_string()),
        }
    }
}
