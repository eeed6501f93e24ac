//! Track domain type

use crate::types::{ArtistId, TrackId};
use serde::{Deserialize, Serialize};

/// Track referenced by a playlist
///
/// Tracks are inputs to the playlist core and are never modified by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Duration in seconds
    pub duration: f32,

    /// Performing artist
    pub artist_id: ArtistId,
}

impl Track {
    /// Create a new track
    pub fn new(id: TrackId, title: impl Into<String>, duration: f32, artist_id: ArtistId) -> Self {
        Self {
            id,
            title: title.into(),
            duration,
            artist_id,
        }
    }

    /// Duration must be a finite, non-negative number of seconds
    pub fn has_valid_duration(&self) -> bool {
        self.duration.is_finite() && self.duration >= 0.0
    }
}
