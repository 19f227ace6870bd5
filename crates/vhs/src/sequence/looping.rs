//! Loop-forever playback: tracks stay eligible for the whole session.

use super::PlaybackOrder;
use crate::error::VcrError;
use crate::predicate::{all_match, PlaybackRequest};
use crate::track::Track;
use std::sync::Arc;
use tracing::debug;

/// A fixed track list plus a wrapping cursor.
///
/// The cursor only drives cassette-order playback; matcher-based playback
/// scans the full list from the start each time.
#[derive(Debug, Clone)]
pub struct LoopingSequence {
    tracks: Vec<Arc<Track>>,
    order: PlaybackOrder,
    cursor: usize,
}

/// Cursor position after serving `cursor`, wrapping at `len`.
fn advance(cursor: usize, len: usize) -> usize {
    let next = cursor + 1;
    if next >= len {
        0
    } else {
        next
    }
}

impl LoopingSequence {
    /// Cassette order over an empty track list is rejected: there would be
    /// nothing for the cursor to point at.
    pub fn new(tracks: Vec<Arc<Track>>, order: PlaybackOrder) -> Result<Self, VcrError> {
        if tracks.is_empty() && matches!(order, PlaybackOrder::CassetteOrder) {
            return Err(VcrError::EmptyCassette);
        }
        Ok(Self {
            tracks,
            order,
            cursor: 0,
        })
    }

    pub fn next(&mut self, request: &dyn PlaybackRequest) -> Option<Arc<Track>> {
        match &self.order {
            PlaybackOrder::CassetteOrder => {
                let track = self.tracks.get(self.cursor).cloned()?;
                debug!(cursor = self.cursor, "Looping cassette-order track");
                self.cursor = advance(self.cursor, self.tracks.len());
                Some(track)
            }
            PlaybackOrder::Properties(matchers) => {
                let (index, track) = self
                    .tracks
                    .iter()
                    .enumerate()
                    .find(|(_, track)| all_match(matchers, &track.request, request))?;
                debug!(index, "Replaying matched track");
                Some(Arc::clone(track))
            }
        }
    }

    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
