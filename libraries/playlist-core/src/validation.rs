//! Position and capacity validation
//!
//! Both editing operations share the same inclusive bound check:
//! a position is valid for a playlist of `size` entries when
//! `0 <= position <= size`. For removal this admits one-past-the-end, which
//! never matches an entry and is therefore a no-op.

use std::collections::BTreeSet;

use crate::error::{PlaylistError, Result};

/// Hard ceiling on playlist size
pub const PLAYLIST_MAX_SIZE: usize = 500;

/// Insertion position meaning "append at the end"
pub const APPEND_POSITION: i64 = -1;

/// `0 <= position <= size`
pub fn is_valid_position(position: i64, size: usize) -> bool {
    position >= 0 && position <= size as i64
}

/// Fail when adding `adding` entries to `current` would exceed `max`
pub fn check_capacity(current: usize, adding: usize, max: usize) -> Result<()> {
    if current + adding > max {
        return Err(PlaylistError::CapacityExceeded {
            current,
            adding,
            max,
        });
    }
    Ok(())
}

/// Resolve a requested insertion position against the playlist size
///
/// [`APPEND_POSITION`] and anything past the end resolve to `size`. Other
/// negative values are rejected.
pub fn effective_insert_position(requested: i64, size: usize) -> Result<usize> {
    let position = if requested == APPEND_POSITION || requested > size as i64 {
        size as i64
    } else {
        requested
    };

    if !is_valid_position(position, size) {
        return Err(PlaylistError::InvalidIndex {
            position: requested,
            size,
        });
    }

    Ok(position as usize)
}

/// Validate every removal position, collapsing duplicates
///
/// Fails on the first out-of-bounds position; nothing is returned for
/// partial input.
pub fn removal_targets(positions: &[i64], size: usize) -> Result<BTreeSet<usize>> {
    positions
        .iter()
        .map(|&position| {
            if is_valid_position(position, size) {
                Ok(position as usize)
            } else {
                Err(PlaylistError::InvalidIndex { position, size })
            }
        })
        .collect()
}
