//! Integration tests for the in-memory playlist store
//!
//! Tests the store behind the editing service:
//! - Adding and removing through the repository
//! - Soft-deleted playlists behaving as missing
//! - Snapshot round trips, including stored position drift


use playlist_core::types::PlaylistTrack;
use playlist_core::{PlaylistError, PlaylistHandle};
use playlist_storage::{MemoryPlaylistStore, StorageError};
use test_helpers::*;

fn track_ids(entries: &[PlaylistTrack]) -> Vec<i32> {
    entries.iter().map(PlaylistTrack::track_id).collect()
}

#[test]
fn test_add_and_remove_through_store() {
    let (mut service, handle) = service_with_playlist("Road Trip");

    service
        .add_tracks(
            &handle,
            vec![create_test_track(1, 180.0), create_test_track(2, 240.0)],
            -1,
        )
        .expect("Failed to add tracks");
    service
        .add_tracks(&handle, vec![create_test_track(3, 60.0)], 1)
        .expect("Failed to insert track");

    let playlist = service.repository().get(&handle).expect("playlist exists");
    assert_eq!(track_ids(playlist.tracks()), vec![1, 3, 2]);
    assert_eq!(playlist.duration(), 480.0);
    assert_eq!(playlist.last_updated, edited_at());
    assert_eq!(playlist.registered_at, created_at());

    let remaining = service
        .remove_tracks(&handle, &[0, 2])
        .expect("Failed to remove tracks");
    assert_eq!(track_ids(&remaining), vec![3]);
    assert_eq!(remaining[0].position(), 0);

    let playlist = service.repository().get(&handle).expect("playlist exists");
    assert_eq!(playlist.track_count(), 1);
    assert_eq!(playlist.duration(), 60.0);
}

#[test]
fn test_soft_deleted_playlist_is_not_found() {
    let (mut service, handle) = service_with_playlist("Old Mix");
    service
        .repository_mut()
        .soft_delete(&handle, edited_at())
        .expect("Failed to delete");

    let err = service
        .add_tracks(&handle, vec![create_test_track(1, 10.0)], -1)
        .unwrap_err();
    assert_eq!(err, PlaylistError::NotFound(handle.clone()));

    let err = service.remove_tracks(&handle, &[0]).unwrap_err();
    assert_eq!(err, PlaylistError::NotFound(handle.clone()));

    // The deleted playlist was never modified
    let playlist = service.repository().get(&handle).expect("still stored");
    assert_eq!(playlist.track_count(), 0);
}

#[test]
fn test_input_errors_skip_lookup() {
    let (mut service, handle) = service_with_playlist("Empty");

    assert!(service.add_tracks(&handle, Vec::new(), -1).is_err());
    assert!(service
        .add_tracks(&PlaylistHandle::new("  "), vec![create_test_track(1, 1.0)], 0)
        .is_err());
    assert!(service.remove_tracks(&handle, &[]).is_err());

    assert_eq!(service.repository().lookup_count(), 0);

    service
        .add_tracks(&handle, vec![create_test_track(1, 1.0)], 0)
        .expect("Failed to add track");
    assert_eq!(service.repository().lookup_count(), 1);
}

#[test]
fn test_snapshot_round_trip() {
    let (mut service, handle) = service_with_playlist("Snapshot");
    service
        .add_tracks(
            &handle,
            (1..=5).map(|i| create_test_track(i, i as f32 * 10.0)).collect(),
            -1,
        )
        .expect("Failed to add tracks");

    let store = service.into_repository();
    let json = store.to_json().expect("Failed to serialize");
    let restored = MemoryPlaylistStore::from_json(&json).expect("Failed to restore");

    assert_eq!(restored.len(), 1);
    assert_eq!(restored.get(&handle), store.get(&handle));
}

#[test]
fn test_snapshot_keeps_running_total_after_removal() {
    let (mut service, handle) = service_with_playlist("Totals");
    service
        .add_tracks(
            &handle,
            vec![create_test_track(1, 1.0e8), create_test_track(2, 1.5)],
            -1,
        )
        .expect("Failed to add tracks");
    service
        .remove_tracks(&handle, &[0])
        .expect("Failed to remove track");

    let store = service.into_repository();
    let live = store.get(&handle).expect("playlist exists").duration();
    let json = store.to_json().expect("Failed to serialize");
    let restored = MemoryPlaylistStore::from_json(&json).expect("Failed to restore");

    let back = restored.get(&handle).expect("playlist restored");
    assert_eq!(back.duration().to_bits(), live.to_bits());
    assert_eq!(back.track_count(), 1);
    assert_eq!(restored.get(&handle), store.get(&handle));
}

#[test]
fn test_snapshot_file_on_disk() {
    let (mut service, handle) = service_with_playlist("On Disk");
    service
        .add_tracks(&handle, vec![create_test_track(9, 99.5)], -1)
        .expect("Failed to add track");

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("playlists.json");
    std::fs::write(&path, service.repository().to_json().unwrap()).expect("Failed to write");

    let json = std::fs::read_to_string(&path).expect("Failed to read");
    let restored = MemoryPlaylistStore::from_json(&json).expect("Failed to restore");

    let playlist = restored.get(&handle).expect("playlist restored");
    assert_eq!(playlist.duration(), 99.5);
    assert_eq!(playlist.track_at(0).map(PlaylistTrack::track_id), Some(9));
}

#[test]
fn test_snapshot_repairs_position_drift() {
    let json = format!(
        r#"[{{
            "id": 4,
            "handle": "drifted",
            "name": "Drifted",
            "registered_at": "{created}",
            "last_updated": "{created}",
            "track_count": 99,
            "tracks": [
                {{"id": 1, "track": {{"id": 10, "title": "B", "duration": 20.0, "artist_id": 1}},
                  "playlist": "drifted", "position": 7, "added_at": "{created}"}},
                {{"id": 2, "track": {{"id": 11, "title": "A", "duration": 10.0, "artist_id": 1}},
                  "playlist": "drifted", "position": 3, "added_at": "{created}"}}
            ]
        }}]"#,
        created = created_at().to_rfc3339()
    );

    let store = MemoryPlaylistStore::from_json(&json).expect("Failed to restore");
    let playlist = store.get(&PlaylistHandle::new("drifted")).expect("restored");

    assert_eq!(track_ids(playlist.tracks()), vec![11, 10]);
    assert!(playlist.is_consistent());
    assert_eq!(playlist.track_count(), 2);
    assert_eq!(playlist.duration(), 30.0);
}

#[test]
fn test_snapshot_with_duplicate_handles_fails() {
    let created = created_at().to_rfc3339();
    let entry = format!(
        r#"{{"handle": "same", "name": "Same", "registered_at": "{created}", "last_updated": "{created}"}}"#
    );
    let json = format!("[{entry}, {entry}]");

    let err = MemoryPlaylistStore::from_json(&json).unwrap_err();
    assert!(matches!(err, StorageError::DuplicateHandle(_)));
}

#[test]
fn test_malformed_snapshot_is_serialization_error() {
    let err = MemoryPlaylistStore::from_json("{ not json").unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));

    let core_err: PlaylistError = err.into();
    assert!(matches!(core_err, PlaylistError::Storage(_)));
    assert!(!core_err.is_input_error());
}
