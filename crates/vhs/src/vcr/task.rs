//! Deferred delivery of a playback decision.

use crate::error::VcrError;
use crate::predicate::IncomingRequest;
use crate::response::MatchedResponse;
use bytes::Bytes;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::oneshot;
use tracing::debug;

/// Source of task identifiers. Identifiers start at 1 and strictly increase.
///
/// Share one counter between sessions with `Vcr::with_task_identifiers` to
/// keep identifiers unique across them.
#[derive(Debug, Default)]
pub struct TaskIdentifiers {
    last: AtomicU64,
}

impl TaskIdentifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Suspended,
    Running,
    Completed,
}

/// What a resumed task delivers, exactly once.
#[derive(Debug, PartialEq)]
pub struct TaskOutcome {
    pub task_id: u64,
    pub result: Result<MatchedResponse, VcrError>,
}

impl TaskOutcome {
    pub fn response(&self) -> Option<&MatchedResponse> {
        self.result.as_ref().ok()
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.response().and_then(|response| response.body.as_ref())
    }

    pub fn error(&self) -> Option<&VcrError> {
        self.result.as_ref().err()
    }
}

/// A playback task created by `Vcr::data_task`.
///
/// The track was already selected when the task was built; resuming only
/// delivers that decision.
#[derive(Debug)]
pub struct DataTask {
    id: u64,
    request: IncomingRequest,
    state: TaskState,
    status: Option<i64>,
    result: Option<Result<MatchedResponse, VcrError>>,
}

impl DataTask {
    pub(crate) fn new(
        id: u64,
        request: IncomingRequest,
        result: Result<MatchedResponse, VcrError>,
    ) -> Self {
        let status = result.as_ref().ok().and_then(|response| response.status);
        Self {
            id,
            request,
            state: TaskState::Suspended,
            status,
            result: Some(result),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn request(&self) -> &IncomingRequest {
        &self.request
    }

    /// Status of the selected response, once resumed.
    pub fn status(&self) -> Option<i64> {
        match self.state {
            TaskState::Suspended => None,
            _ => self.status,
        }
    }

    /// Start delivery. The outcome arrives on the returned receiver from a
    /// spawned task when a tokio runtime is running, or immediately otherwise.
    ///
    /// Only the first call yields a receiver.
    pub fn resume(&mut self) -> Option<oneshot::Receiver<TaskOutcome>> {
        let result = self.result.take()?;
        self.state = TaskState::Running;

        let (sender, receiver) = oneshot::channel();
        let outcome = TaskOutcome {
            task_id: self.id,
            result,
        };
        let id = self.id;
        let deliver = move || {
            if sender.send(outcome).is_err() {
                debug!(task = id, "Task outcome dropped by receiver");
            } else {
                debug!(task = id, "Task outcome delivered");
            }
        };
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move { deliver() });
            }
            Err(_) => deliver(),
        }

        self.state = TaskState::Completed;
        Some(receiver)
    }

    /// No-op.
    pub fn cancel(&mut self) {}

    /// No-op.
    pub fn suspend(&mut self) {}
}
