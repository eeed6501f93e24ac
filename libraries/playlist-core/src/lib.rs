//! Playlist Core
//!
//! Ordered track membership for playlists: positional batch insertion,
//! positional removal, and the bookkeeping that keeps a playlist's positions,
//! track count and total duration consistent.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `PlaylistTrack`, `Track`, `PlaylistHandle`
//! - **Collaborator Traits**: `PlaylistRepository` (lookup by handle), `Clock`
//! - **Validation**: position bounds, append sentinel, capacity ceiling
//! - **Duration Accumulation**: incremental `f32` totals
//! - **Editing Service**: `PlaylistService::add_tracks` / `remove_tracks`
//! - **Error Handling**: `PlaylistError` and `Result`
//!
//! Storage is not part of this crate; see `playlist-storage` for an
//! in-memory repository.
//!
//! # Example
//!
//! ```rust
//! use playlist_core::{FixedClock, Playlist, PlaylistRepository, PlaylistService, Track};
//! use playlist_core::types::PlaylistHandle;
//! use chrono::Utc;
//!
//! struct Single(Playlist);
//!
//! impl PlaylistRepository for Single {
//!     fn find_by_handle(&mut self, handle: &PlaylistHandle) -> Option<&mut Playlist> {
//!         (self.0.handle() == handle).then_some(&mut self.0)
//!     }
//! }
//!
//! let now = Utc::now();
//! let playlist = Playlist::new("Road Trip", now);
//! let handle = playlist.handle().clone();
//! let mut service = PlaylistService::new(Single(playlist), FixedClock(now));
//!
//! let added = service
//!     .add_tracks(&handle, vec![Track::new(1, "Intro", 60.0, 7)], -1)
//!     .unwrap();
//! assert_eq!(added[0].position(), 0);
//!
//! let remaining = service.remove_tracks(&handle, &[0]).unwrap();
//! assert!(remaining.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod duration;
pub mod error;
mod sequence;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use config::PlaylistConfig;
pub use error::{PlaylistError, Result};
pub use service::PlaylistService;
pub use traits::{Clock, FixedClock, PlaylistRepository, SystemClock};
pub use validation::{APPEND_POSITION, PLAYLIST_MAX_SIZE};

pub use types::{Playlist, PlaylistHandle, PlaylistRecord, PlaylistTrack, Track};
