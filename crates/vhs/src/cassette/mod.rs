//! Cassettes: ordered collections of tracks loaded from one fixture.
//!
//! # Module Structure
//!
//! - `store` - locating fixtures by name on disk

mod store;

pub use store::{FixtureStore, DEFAULT_FIXTURE_DIR, FIXTURE_DIR_ENV};

use crate::error::VcrError;
use crate::track::{BodySchema, FixtureTrack, Track};
use std::sync::Arc;
use tracing::{debug, info};

/// An ordered, read-only sequence of tracks.
///
/// Fixture order is kept exactly; cassette-order playback depends on it.
/// Cloning is cheap and clones share the same tracks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cassette {
    tracks: Vec<Arc<Track>>,
}

impl Cassette {
    pub fn new(tracks: impl IntoIterator<Item = Track>) -> Self {
        Self {
            tracks: tracks.into_iter().map(Arc::new).collect(),
        }
    }

    /// Parse a fixture document. `resource` labels errors.
    ///
    /// Any malformed track fails the whole load.
    pub fn from_slice(resource: &str, bytes: &[u8], schema: BodySchema) -> Result<Self, VcrError> {
        let records: Vec<FixtureTrack> =
            serde_json::from_slice(bytes).map_err(|e| VcrError::invalid(resource, e))?;

        let tracks = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .into_track(schema)
                    .map(Arc::new)
                    .map_err(|reason| VcrError::invalid(resource, format!("track[{index}]: {reason}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(resource, ?schema, "Decoded fixture");
        info!("Loaded {} tracks from {}", tracks.len(), resource);
        Ok(Self { tracks })
    }

    pub fn from_json_str(resource: &str, json: &str, schema: BodySchema) -> Result<Self, VcrError> {
        Self::from_slice(resource, json.as_bytes(), schema)
    }

    pub fn tracks(&self) -> &[Arc<Track>] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().map(AsRef::as_ref)
    }
}
