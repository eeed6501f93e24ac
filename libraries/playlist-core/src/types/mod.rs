//! Playlist, entry and track types

mod ids;
mod playlist;
mod track;

pub use ids::{ArtistId, PlaylistHandle, PlaylistId, PlaylistTrackId, TrackId};
pub use playlist::{Playlist, PlaylistRecord, PlaylistTrack};
pub use track::Track;
