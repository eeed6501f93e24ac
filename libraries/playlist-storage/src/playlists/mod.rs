use std::collections::HashMap;

use chrono::{DateTime, Utc};
use playlist_core::types::PlaylistId;
use playlist_core::{Playlist, PlaylistHandle, PlaylistRepository};

use crate::error::{Result, StorageError};

/// Playlists kept in memory, keyed by handle
///
/// Soft-deleted playlists stay in the store and are still returned by
/// lookups; the editing service treats them as missing.
#[derive(Debug, Default)]
pub struct MemoryPlaylistStore {
    playlists: HashMap<PlaylistHandle, Playlist>,
    last_id: PlaylistId,
    lookups: usize,
}

impl MemoryPlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and store an empty playlist, returning its handle
    pub fn create(
        &mut self,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<PlaylistHandle> {
        let playlist = Playlist::new(name, created_at);
        let handle = playlist.handle().clone();
        self.store(playlist)?;
        Ok(handle)
    }

    /// Store an existing playlist
    ///
    /// Playlists without a storage ID are assigned the next free one.
    pub fn insert(&mut self, playlist: Playlist) -> Result<()> {
        if self.playlists.contains_key(playlist.handle()) {
            return Err(StorageError::DuplicateHandle(playlist.handle().clone()));
        }
        self.store(playlist)
    }

    fn store(&mut self, mut playlist: Playlist) -> Result<()> {
        match playlist.id {
            Some(id) => self.last_id = self.last_id.max(id),
            None => {
                let id = self
                    .last_id
                    .checked_add(1)
                    .ok_or(StorageError::IdsExhausted(self.last_id))?;
                self.last_id = id;
                playlist.id = Some(id);
            }
        }

        tracing::debug!(handle = %playlist.handle(), id = ?playlist.id, "Stored playlist");
        self.playlists.insert(playlist.handle().clone(), playlist);
        Ok(())
    }

    /// Get a playlist by handle, deleted or not
    pub fn get(&self, handle: &PlaylistHandle) -> Option<&Playlist> {
        self.playlists.get(handle)
    }

    /// Mark a playlist as deleted
    pub fn soft_delete(&mut self, handle: &PlaylistHandle, at: DateTime<Utc>) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(handle)
            .ok_or_else(|| StorageError::NotFound(handle.clone()))?;

        playlist.mark_deleted(at);
        tracing::info!(%handle, "Deleted playlist");

        Ok(())
    }

    /// Live (not deleted) playlists, ordered by storage ID
    pub fn active(&self) -> Vec<&Playlist> {
        let mut playlists: Vec<&Playlist> =
            self.playlists.values().filter(|p| !p.is_deleted()).collect();
        playlists.sort_by_key(|p| p.id);
        playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Number of repository lookups served so far
    pub fn lookup_count(&self) -> usize {
        self.lookups
    }

    /// Serialize every playlist (including deleted ones) to JSON
    pub fn to_json(&self) -> Result<String> {
        let mut playlists: Vec<&Playlist> = self.playlists.values().collect();
        playlists.sort_by_key(|p| p.id);
        Ok(serde_json::to_string_pretty(&playlists)?)
    }

    /// Rebuild a store from a JSON snapshot
    ///
    /// Each playlist is restored with renumbered positions and a recomputed
    /// count; stored running totals are kept.
    pub fn from_json(json: &str) -> Result<Self> {
        let playlists: Vec<Playlist> = serde_json::from_str(json)?;

        let mut store = Self::new();
        for playlist in playlists {
            store.insert(playlist)?;
        }

        tracing::info!(count = store.len(), "Restored playlist snapshot");
        Ok(store)
    }
}

impl PlaylistRepository for MemoryPlaylistStore {
    fn find_by_handle(&mut self, handle: &PlaylistHandle) -> Option<&mut Playlist> {
        self.lookups += 1;
        self.playlists.get_mut(handle)
    }
}
