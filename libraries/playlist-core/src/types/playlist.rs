//! Playlist domain types

use crate::duration;
use crate::sequence;
use crate::types::{PlaylistHandle, PlaylistId, PlaylistTrackId, Track, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist with its ordered track entries
///
/// The track sequence, the cached count and the cached duration are owned by
/// the editing operations in [`crate::service`] and only exposed read-only.
/// Every published state satisfies:
/// - `track_count() == tracks().len()`
/// - positions are exactly `0..track_count()` in sequence order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PlaylistRecord")]
pub struct Playlist {
    /// Storage identifier
    pub id: Option<PlaylistId>,

    handle: PlaylistHandle,

    /// Display name
    pub name: String,

    tracks: Vec<PlaylistTrack>,

    track_count: usize,

    duration: f32,

    /// Creation timestamp
    pub registered_at: DateTime<Utc>,

    /// Last modification timestamp
    pub last_updated: DateTime<Utc>,

    deleted: bool,
}

impl Playlist {
    /// Create an empty playlist with a freshly generated handle
    pub fn new(name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self::with_handle(PlaylistHandle::generate(), name, created_at)
    }

    /// Create an empty playlist with a specific handle
    pub fn with_handle(
        handle: PlaylistHandle,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            handle,
            name: name.into(),
            tracks: Vec::new(),
            track_count: 0,
            duration: 0.0,
            registered_at: created_at,
            last_updated: created_at,
            deleted: false,
        }
    }

    /// Rebuild a playlist from persisted state
    ///
    /// Entries are stably ordered by their stored position and renumbered
    /// from zero, so drifted or duplicated stored positions never leak into a
    /// live playlist. The count is derived from the entries. A stored finite
    /// duration is kept as is, since the incremental total of a live playlist
    /// can differ from a fresh sum; otherwise the entries are summed.
    pub fn restore(record: PlaylistRecord) -> Self {
        let mut tracks = sequence::sorted_by_position(&record.tracks);
        sequence::reindex(&mut tracks);
        for entry in &mut tracks {
            entry.playlist.clone_from(&record.handle);
        }

        let duration = match record.duration {
            Some(total) if total.is_finite() => total,
            _ => duration::add(0.0, tracks.iter().map(|t| t.track.duration)),
        };

        Self {
            id: record.id,
            handle: record.handle,
            name: record.name,
            track_count: tracks.len(),
            tracks,
            duration,
            registered_at: record.registered_at,
            last_updated: record.last_updated,
            deleted: record.deleted,
        }
    }

    /// External handle
    pub fn handle(&self) -> &PlaylistHandle {
        &self.handle
    }

    /// Entries in position order
    pub fn tracks(&self) -> &[PlaylistTrack] {
        &self.tracks
    }

    /// Number of entries
    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Total duration in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Whether the playlist has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Entry at a position
    pub fn track_at(&self, position: usize) -> Option<&PlaylistTrack> {
        self.tracks.get(position).filter(|t| t.position == position)
    }

    /// Soft-delete the playlist
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.deleted = true;
        self.last_updated = at;
    }

    /// Check the ordering and count invariants
    pub fn is_consistent(&self) -> bool {
        self.track_count == self.tracks.len()
            && self
                .tracks
                .iter()
                .enumerate()
                .all(|(i, t)| t.position == i && t.playlist == self.handle)
    }

    /// Replace sequence, count and duration in one step
    pub(crate) fn publish(
        &mut self,
        tracks: Vec<PlaylistTrack>,
        duration: f32,
        updated_at: DateTime<Utc>,
    ) {
        debug_assert!(tracks.iter().enumerate().all(|(i, t)| t.position == i));

        self.track_count = tracks.len();
        self.tracks = tracks;
        self.duration = duration;
        self.last_updated = updated_at;
    }
}

/// Persisted form of a playlist
///
/// Used to hydrate a [`Playlist`] through [`Playlist::restore`]. A stored
/// track count is ignored and recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRecord {
    /// Storage identifier
    #[serde(default)]
    pub id: Option<PlaylistId>,

    /// External handle
    pub handle: PlaylistHandle,

    /// Display name
    pub name: String,

    /// Entries in any stored order
    #[serde(default)]
    pub tracks: Vec<PlaylistTrack>,

    /// Running total as maintained by the editing service
    #[serde(default)]
    pub duration: Option<f32>,

    /// Creation timestamp
    pub registered_at: DateTime<Utc>,

    /// Last modification timestamp
    pub last_updated: DateTime<Utc>,

    /// Soft-delete flag
    #[serde(default)]
    pub deleted: bool,
}

impl From<PlaylistRecord> for Playlist {
    fn from(record: PlaylistRecord) -> Self {
        Self::restore(record)
    }
}

/// Track entry in a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// Storage identifier
    pub id: Option<PlaylistTrackId>,

    /// The referenced track
    pub track: Track,

    /// Owning playlist
    pub playlist: PlaylistHandle,

    pub(crate) position: usize,

    /// When the track was added to the playlist
    pub added_at: DateTime<Utc>,
}

impl PlaylistTrack {
    /// New entry, positioned by the caller inside the crate
    pub(crate) fn new(track: Track, playlist: PlaylistHandle, added_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            track,
            playlist,
            position: 0,
            added_at,
        }
    }

    /// Entry loaded from storage
    ///
    /// The stored position is only used as a sort key when the owning
    /// playlist is restored.
    pub fn from_storage(
        id: Option<PlaylistTrackId>,
        track: Track,
        playlist: PlaylistHandle,
        position: usize,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            track,
            playlist,
            position,
            added_at,
        }
    }

    /// Zero-based position in the playlist
    pub fn position(&self) -> usize {
        self.position
    }

    /// Referenced track ID
    pub fn track_id(&self) -> TrackId {
        self.track.id
    }
}
