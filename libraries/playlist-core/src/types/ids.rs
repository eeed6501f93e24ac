//! ID types for playlist entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Numeric playlist identifier (assigned by storage)
pub type PlaylistId = i32;

/// Numeric track identifier
pub type TrackId = i32;

/// Numeric artist identifier
pub type ArtistId = i32;

/// Numeric playlist-track entry identifier (assigned by storage)
pub type PlaylistTrackId = i32;

/// External playlist handle
///
/// Opaque string used by callers to address a playlist. Generated handles are
/// UUID v4 strings, but any non-blank string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistHandle(String);

impl PlaylistHandle {
    /// Create a handle from an existing string
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Generate a new random handle
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the handle is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlaylistHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlaylistHandle {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

impl From<String> for PlaylistHandle {
    fn from(handle: String) -> Self {
        Self(handle)
    }
}
