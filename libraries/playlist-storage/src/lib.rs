//! Playlist Storage
//!
//! In-memory implementation of the `PlaylistRepository` collaborator from
//! `playlist-core`, with JSON snapshots for persisting and reloading a store.
//!
//! # Example
//!
//! ```rust
//! use playlist_core::{PlaylistService, SystemClock, Track};
//! use playlist_storage::MemoryPlaylistStore;
//! use chrono::Utc;
//!
//! let mut store = MemoryPlaylistStore::new();
//! let handle = store.create("Favourites", Utc::now()).unwrap();
//!
//! let mut service = PlaylistService::new(store, SystemClock);
//! service
//!     .add_tracks(&handle, vec![Track::new(1, "Opening", 215.0, 3)], -1)
//!     .unwrap();
//!
//! let snapshot = service.repository().to_json().unwrap();
//! let restored = MemoryPlaylistStore::from_json(&snapshot).unwrap();
//! assert_eq!(restored.get(&handle).unwrap().track_count(), 1);
//! ```

mod error;

pub mod playlists;

pub use error::{Result, StorageError};
pub use playlists::MemoryPlaylistStore;
