//! Playback sessions.
//!
//! A [`Vcr`] owns one [`Sequencer`] behind a mutex, so concurrent callers
//! see selection and state update as a single step.

mod task;

pub use task::{DataTask, TaskIdentifiers, TaskOutcome, TaskState};

use crate::cassette::Cassette;
use crate::config::PlaybackConfig;
use crate::error::VcrError;
use crate::predicate::IncomingRequest;
use crate::response::{materialize, MatchedResponse};
use crate::sequence::{PlaybackOrder, ReplayMode, Sequencer};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

pub struct Vcr {
    sequencer: Mutex<Sequencer>,
    identifiers: Arc<TaskIdentifiers>,
}

impl Vcr {
    pub fn new(cassette: &Cassette, order: PlaybackOrder, replay: ReplayMode) -> Result<Self, VcrError> {
        Ok(Self {
            sequencer: Mutex::new(Sequencer::new(cassette, order, replay)?),
            identifiers: Arc::new(TaskIdentifiers::new()),
        })
    }

    pub fn from_config(cassette: &Cassette, config: &PlaybackConfig) -> Result<Self, VcrError> {
        Self::new(cassette, config.order.clone(), config.replay)
    }

    pub fn with_task_identifiers(mut self, identifiers: Arc<TaskIdentifiers>) -> Self {
        self.identifiers = identifiers;
        self
    }

    /// Select and materialize the response for `request`.
    pub fn play(&self, request: &IncomingRequest) -> Result<MatchedResponse, VcrError> {
        let track = self.sequencer.lock().next(request);
        materialize(track, request)
    }

    /// Select now, deliver on [`DataTask::resume`].
    pub fn data_task(&self, request: IncomingRequest) -> DataTask {
        let result = self.play(&request);
        let id = self.identifiers.next_id();
        debug!(task = id, matched = result.is_ok(), "Created data task");
        DataTask::new(id, request, result)
    }

    pub async fn send(&self, request: IncomingRequest) -> Result<MatchedResponse, VcrError> {
        let mut task = self.data_task(request);
        let receiver = task
            .resume()
            .ok_or_else(|| VcrError::InvalidResponse("task already resumed".to_string()))?;
        let outcome = receiver
            .await
            .map_err(|_| VcrError::InvalidResponse("task completed without an outcome".to_string()))?;
        outcome.result
    }

    pub fn replay_mode(&self) -> ReplayMode {
        self.sequencer.lock().replay_mode()
    }

    /// Tracks still eligible for playback.
    pub fn remaining(&self) -> usize {
        self.sequencer.lock().len()
    }
}
