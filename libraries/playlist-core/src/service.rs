//! Playlist editing service
//!
//! Inserts batches of tracks at a position and removes tracks by position,
//! keeping positions contiguous and the cached count and duration in step.
//!
//! Every operation validates all of its input before touching the playlist,
//! then builds the complete new track sequence on the side and publishes it
//! together with the new count and duration. A failed call leaves the
//! playlist exactly as it was.

use tracing::{debug, info, warn};

use crate::config::PlaylistConfig;
use crate::duration;
use crate::error::{PlaylistError, Result};
use crate::sequence;
use crate::traits::{Clock, PlaylistRepository, SystemClock};
use crate::types::{Playlist, PlaylistHandle, PlaylistTrack, Track};
use crate::validation;

/// Edits playlists resolved through a [`PlaylistRepository`]
///
/// Mutating operations take `&mut self`, so one service instance never runs
/// two edits at once. Callers sharing a repository across threads must
/// serialize edits per playlist themselves.
#[derive(Debug)]
pub struct PlaylistService<R, C = SystemClock> {
    repository: R,
    clock: C,
    config: PlaylistConfig,
}

impl<R: PlaylistRepository, C: Clock> PlaylistService<R, C> {
    /// Create a service with default configuration
    pub fn new(repository: R, clock: C) -> Self {
        Self::with_config(repository, clock, PlaylistConfig::default())
    }

    /// Create a service with explicit configuration
    pub fn with_config(repository: R, clock: C, config: PlaylistConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Limits in effect for this service
    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    /// Read access to the backing repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Mutable access to the backing repository
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Consume the service, returning the repository
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Add tracks to a playlist starting at `position`
    ///
    /// `position` of `-1` or past the end appends. The tracks land as one
    /// contiguous run in the order given.
    ///
    /// Returns the new entries with their final positions, in insertion
    /// order.
    ///
    /// # Errors
    /// - `InvalidInput` for a blank handle, no tracks, or a track with a
    ///   negative or non-finite duration
    /// - `NotFound` when the playlist is missing or deleted
    /// - `CapacityExceeded` when the playlist would exceed `max_tracks`
    /// - `InvalidIndex` for negative positions other than `-1`
    pub fn add_tracks(
        &mut self,
        handle: &PlaylistHandle,
        tracks: Vec<Track>,
        position: i64,
    ) -> Result<Vec<PlaylistTrack>> {
        if handle.is_blank() {
            return Err(PlaylistError::invalid_input("handle must not be empty"));
        }
        if tracks.is_empty() {
            return Err(PlaylistError::invalid_input("tracks to add must not be empty"));
        }
        if let Some(track) = tracks.iter().find(|t| !t.has_valid_duration()) {
            return Err(PlaylistError::invalid_input(format!(
                "track {} has invalid duration {}",
                track.id, track.duration
            )));
        }

        let now = self.clock.now();
        let max_tracks = self.config.max_tracks;
        let playlist = find_active(&mut self.repository, handle)?;
        let size = playlist.track_count();

        if let Err(err) = validation::check_capacity(size, tracks.len(), max_tracks) {
            warn!(%handle, size, adding = tracks.len(), max_tracks, "Playlist is full");
            return Err(err);
        }
        let at = validation::effective_insert_position(position, size)?;

        debug!(%handle, requested = position, effective = at, size, "Inserting tracks");

        let added_count = tracks.len();
        let total = duration::add(playlist.duration(), tracks.iter().map(|t| t.duration));
        let run = tracks
            .into_iter()
            .map(|track| PlaylistTrack::new(track, handle.clone(), now))
            .collect();

        let mut entries = sequence::sorted_by_position(playlist.tracks());
        sequence::insert_run(&mut entries, at, run);
        sequence::reindex(&mut entries);

        let added = entries[at..at + added_count].to_vec();
        playlist.publish(entries, total, now);

        info!(
            %handle,
            added = added_count,
            position = at,
            count = playlist.track_count(),
            "Added tracks to playlist"
        );

        Ok(added)
    }

    /// Remove the entries at `positions` from a playlist
    ///
    /// Duplicate positions collapse and positions matching no entry are
    /// ignored. Every position must satisfy `0 <= position <= count`.
    ///
    /// Returns the remaining entries in their new order.
    ///
    /// # Errors
    /// - `InvalidInput` for a blank handle or no positions
    /// - `NotFound` when the playlist is missing or deleted
    /// - `InvalidIndex` when any position is out of bounds
    pub fn remove_tracks(
        &mut self,
        handle: &PlaylistHandle,
        positions: &[i64],
    ) -> Result<Vec<PlaylistTrack>> {
        if handle.is_blank() {
            return Err(PlaylistError::invalid_input("handle must not be empty"));
        }
        if positions.is_empty() {
            return Err(PlaylistError::invalid_input("positions must not be empty"));
        }

        let now = self.clock.now();
        let playlist = find_active(&mut self.repository, handle)?;
        let size = playlist.track_count();

        let targets = validation::removal_targets(positions, size)?;

        let ordered = sequence::sorted_by_position(playlist.tracks());
        let (mut survivors, removed) = sequence::split_at_positions(ordered, &targets);
        sequence::reindex(&mut survivors);

        let total = duration::subtract(playlist.duration(), removed.iter().map(|t| t.track.duration));
        let updated_at = if removed.is_empty() {
            debug!(%handle, ?targets, "No tracks matched removal positions");
            playlist.last_updated
        } else {
            now
        };

        playlist.publish(survivors.clone(), total, updated_at);

        info!(
            %handle,
            removed = removed.len(),
            count = playlist.track_count(),
            "Removed tracks from playlist"
        );

        Ok(survivors)
    }
}

/// Resolve a handle to a live (not deleted) playlist
fn find_active<'a, R: PlaylistRepository>(
    repository: &'a mut R,
    handle: &PlaylistHandle,
) -> Result<&'a mut Playlist> {
    match repository.find_by_handle(handle) {
        Some(playlist) if !playlist.is_deleted() => Ok(playlist),
        Some(_) => {
            debug!(%handle, "Playlist is deleted");
            Err(PlaylistError::NotFound(handle.clone()))
        }
        None => {
            debug!(%handle, "Playlist not found");
            Err(PlaylistError::NotFound(handle.clone()))
        }
    }
}
