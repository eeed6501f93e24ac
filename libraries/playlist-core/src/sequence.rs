//! Ordered playlist entry sequences
//!
//! Working copies of a playlist's entries are built, spliced, filtered and
//! renumbered here before being published back to the playlist.

use std::collections::BTreeSet;

use crate::types::PlaylistTrack;

/// Copy of the entries, stably ordered by position
pub(crate) fn sorted_by_position(tracks: &[PlaylistTrack]) -> Vec<PlaylistTrack> {
    let mut sorted = tracks.to_vec();
    sorted.sort_by_key(PlaylistTrack::position);
    sorted
}

/// Insert `run` as a contiguous block starting at `at`
///
/// `at` must not exceed `sequence.len()`.
pub(crate) fn insert_run(sequence: &mut Vec<PlaylistTrack>, at: usize, run: Vec<PlaylistTrack>) {
    sequence.splice(at..at, run);
}

/// Split entries into (survivors, removed) by position
///
/// Both halves keep their relative order.
pub(crate) fn split_at_positions(
    sequence: Vec<PlaylistTrack>,
    targets: &BTreeSet<usize>,
) -> (Vec<PlaylistTrack>, Vec<PlaylistTrack>) {
    sequence
        .into_iter()
        .partition(|entry| !targets.contains(&entry.position))
}

/// Renumber positions to `0..len` in sequence order
pub(crate) fn reindex(sequence: &mut [PlaylistTrack]) {
    for (position, entry) in sequence.iter_mut().enumerate() {
        entry.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlaylistHandle, Track};
    use chrono::Utc;

    fn entry(id: i32, position: usize) -> PlaylistTrack {
        PlaylistTrack::from_storage(
            None,
            Track::new(id, format!("Track {id}"), 60.0, 1),
            PlaylistHandle::new("pl"),
            position,
            Utc::now(),
        )
    }

    fn ids(sequence: &[PlaylistTrack]) -> Vec<i32> {
        sequence.iter().map(PlaylistTrack::track_id).collect()
    }

    #[test]
    fn sort_is_stable() {
        let sorted = sorted_by_position(&[entry(1, 2), entry(2, 0), entry(3, 2), entry(4, 1)]);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn insert_run_keeps_caller_order() {
        let mut sequence = vec![entry(1, 0), entry(2, 1), entry(3, 2)];
        insert_run(&mut sequence, 1, vec![entry(10, 0), entry(11, 0)]);
        reindex(&mut sequence);

        assert_eq!(ids(&sequence), vec![1, 10, 11, 2, 3]);
        let positions: Vec<usize> = sequence.iter().map(PlaylistTrack::position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn insert_run_at_end() {
        let mut sequence = vec![entry(1, 0)];
        insert_run(&mut sequence, 1, vec![entry(2, 0)]);
        assert_eq!(ids(&sequence), vec![1, 2]);
    }

    #[test]
    fn split_matches_every_entry_at_a_target() {
        let sequence = vec![entry(1, 0), entry(2, 1), entry(3, 1), entry(4, 2)];
        let targets = BTreeSet::from([1, 9]);

        let (survivors, removed) = split_at_positions(sequence, &targets);

        assert_eq!(ids(&survivors), vec![1, 4]);
        assert_eq!(ids(&removed), vec![2, 3]);
    }
}
