//! Collaborator traits for playlist editing

use crate::types::{Playlist, PlaylistHandle};
use chrono::{DateTime, Utc};

/// Playlist repository
///
/// Implementers resolve a playlist handle to the live playlist. `None` means
/// the playlist does not exist; storage failures are reported the same way.
/// Deleted playlists may be returned, the editing service filters them out.
pub trait PlaylistRepository {
    /// Look up a playlist by its external handle
    fn find_by_handle(&mut self, handle: &PlaylistHandle) -> Option<&mut Playlist>;
}

impl<R: PlaylistRepository + ?Sized> PlaylistRepository for &mut R {
    fn find_by_handle(&mut self, handle: &PlaylistHandle) -> Option<&mut Playlist> {
        (**self).find_by_handle(handle)
    }
}

impl<R: PlaylistRepository + ?Sized> PlaylistRepository for Box<R> {
    fn find_by_handle(&mut self, handle: &PlaylistHandle) -> Option<&mut Playlist> {
        (**self).find_by_handle(handle)
    }
}

/// Source of timestamps for new playlist entries
pub trait Clock {
    /// Current time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
