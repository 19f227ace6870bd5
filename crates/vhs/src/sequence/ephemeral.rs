//! Consume-once playback: each track answers at most one request.

use crate::predicate::{all_match, MatchType, PlaybackRequest};
use crate::track::Track;
use std::sync::Arc;
use tracing::debug;

/// Remaining tracks, in fixture order, shrinking as they are played.
///
/// With no matchers the first remaining track is always taken, which
/// replays the cassette in order.
#[derive(Debug, Clone)]
pub struct EphemeralSequence {
    tracks: Vec<Arc<Track>>,
    matchers: Vec<MatchType>,
}

impl EphemeralSequence {
    pub fn new(tracks: Vec<Arc<Track>>, matchers: Vec<MatchType>) -> Self {
        Self { tracks, matchers }
    }

    /// Take the first remaining track accepted by every matcher.
    ///
    /// The track is removed before returning; an unmatched request leaves
    /// the remaining list untouched.
    pub fn next(&mut self, request: &dyn PlaybackRequest) -> Option<Arc<Track>> {
        let position = self
            .tracks
            .iter()
            .position(|track| all_match(&self.matchers, &track.request, request))?;
        let track = self.tracks.remove(position);
        debug!(
            position,
            remaining = self.tracks.len(),
            "Consumed track {} {}",
            track.request.method,
            track.request.url
        );
        Some(track)
    }

    pub fn remaining(&self) -> &[Arc<Track>] {
        &self.tracks
    }
}
