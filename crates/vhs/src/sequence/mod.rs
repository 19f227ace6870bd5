//! Playback sequencing: which track answers the next request.
//!
//! Two strategies, chosen by [`ReplayMode`]:
//!
//! - `once` - [`EphemeralSequence`]: a matched track is removed
//! - `unlimited` - [`LoopingSequence`]: tracks stay, cassette order wraps
//!
//! Matching is always first-match-wins in fixture order.
//!
//! A `Sequencer` is plain mutable state. Callers answering requests from
//! several tasks must serialize `next` behind a lock (see `vcr::Vcr`).

mod ephemeral;
mod looping;

pub use ephemeral::EphemeralSequence;
pub use looping::LoopingSequence;

use crate::cassette::Cassette;
use crate::error::VcrError;
use crate::predicate::{MatchType, PlaybackRequest};
use crate::track::Track;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How tracks are chosen for a request.
///
/// In configuration files this is either the string `cassetteOrder` or a
/// map `properties: [method, path]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(from = "OrderConfig", into = "OrderConfig")]
pub enum PlaybackOrder {
    /// Ignore the request and play tracks in fixture order.
    #[default]
    CassetteOrder,
    /// Play the first track whose request satisfies every matcher.
    Properties(Vec<MatchType>),
}

impl PlaybackOrder {
    pub fn matching(matchers: impl IntoIterator<Item = MatchType>) -> Self {
        PlaybackOrder::Properties(matchers.into_iter().collect())
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum OrderConfig {
    Named(NamedOrder),
    Properties { properties: Vec<MatchType> },
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
enum NamedOrder {
    CassetteOrder,
}

impl From<OrderConfig> for PlaybackOrder {
    fn from(config: OrderConfig) -> Self {
        match config {
            OrderConfig::Named(NamedOrder::CassetteOrder) => PlaybackOrder::CassetteOrder,
            OrderConfig::Properties { properties } => PlaybackOrder::Properties(properties),
        }
    }
}

impl From<PlaybackOrder> for OrderConfig {
    fn from(order: PlaybackOrder) -> Self {
        match order {
            PlaybackOrder::CassetteOrder => OrderConfig::Named(NamedOrder::CassetteOrder),
            PlaybackOrder::Properties(properties) => OrderConfig::Properties { properties },
        }
    }
}

/// How many times each track may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplayMode {
    /// Each track plays at most once.
    #[default]
    Once,
    /// Tracks replay indefinitely.
    Unlimited,
}

/// Per-session playback state over one cassette.
#[derive(Debug, Clone)]
pub enum Sequencer {
    Ephemeral(EphemeralSequence),
    Looping(LoopingSequence),
}

impl Sequencer {
    /// Build session state. Sequencers over the same cassette are independent.
    pub fn new(cassette: &Cassette, order: PlaybackOrder, replay: ReplayMode) -> Result<Self, VcrError> {
        let tracks = cassette.tracks().to_vec();
        match replay {
            ReplayMode::Once => {
                let matchers = match order {
                    PlaybackOrder::CassetteOrder => Vec::new(),
                    PlaybackOrder::Properties(matchers) => matchers,
                };
                Ok(Sequencer::Ephemeral(EphemeralSequence::new(tracks, matchers)))
            }
            ReplayMode::Unlimited => Ok(Sequencer::Looping(LoopingSequence::new(tracks, order)?)),
        }
    }

    /// Select the track answering `request`, updating state atomically with
    /// the decision. `None` means no track matched.
    pub fn next(&mut self, request: &dyn PlaybackRequest) -> Option<Arc<Track>> {
        match self {
            Sequencer::Ephemeral(sequence) => sequence.next(request),
            Sequencer::Looping(sequence) => sequence.next(request),
        }
    }

    pub fn replay_mode(&self) -> ReplayMode {
        match self {
            Sequencer::Ephemeral(_) => ReplayMode::Once,
            Sequencer::Looping(_) => ReplayMode::Unlimited,
        }
    }

    /// Tracks still eligible for playback.
    pub fn len(&self) -> usize {
        match self {
            Sequencer::Ephemeral(sequence) => sequence.remaining().len(),
            Sequencer::Looping(sequence) => sequence.tracks().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
