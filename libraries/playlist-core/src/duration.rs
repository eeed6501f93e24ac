//! Aggregate duration bookkeeping
//!
//! Playlist durations are maintained incrementally: each added track's
//! duration is added to the running total and each removed track's duration
//! is subtracted from it, one at a time and in order. A full re-sum of the
//! playlist could round differently in `f32`, so the editing operations
//! always go through these functions.

/// Add durations to a running total, in order
pub fn add(total: f32, durations: impl IntoIterator<Item = f32>) -> f32 {
    durations.into_iter().fold(total, |acc, d| acc + d)
}

/// Subtract durations from a running total, in order
pub fn subtract(total: f32, durations: impl IntoIterator<Item = f32>) -> f32 {
    durations.into_iter().fold(total, |acc, d| acc - d)
}

/// `total + sum(added) - sum(removed)`, evaluated incrementally
pub fn accumulate(
    total: f32,
    added: impl IntoIterator<Item = f32>,
    removed: impl IntoIterator<Item = f32>,
) -> f32 {
    subtract(add(total, added), removed)
}
