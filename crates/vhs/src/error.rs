//! Error taxonomy for cassette loading and playback.

use crate::predicate::IncomingRequest;

/// Errors surfaced by VHS.
///
/// Fixture errors abort the whole load; no partial cassette is returned.
/// `RecordNotFound` is local to one request and leaves the session usable.
#[derive(Debug, thiserror::Error)]
pub enum VcrError {
    #[error("Fixture not found: {resource}")]
    FixtureMissing { resource: String },

    #[error("Fixture {resource} is improperly formatted: {reason}")]
    FixtureInvalid { resource: String, reason: String },

    #[error("Failed to read fixture {resource}: {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to find match for request.")]
    RecordNotFound { request: Box<IncomingRequest> },

    #[error("Cannot loop over an empty cassette in cassette order")]
    EmptyCassette,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Recorded response cannot be replayed: {0}")]
    InvalidResponse(String),
}

impl VcrError {
    /// Error domain reported alongside [`VcrError::code`].
    pub const DOMAIN: &'static str = "vhs.VcrError";

    pub(crate) fn invalid(resource: impl Into<String>, reason: impl ToString) -> Self {
        VcrError::FixtureInvalid {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Numeric code: 404 for an unmatched request, 500 for everything else.
    pub fn code(&self) -> u16 {
        match self {
            VcrError::RecordNotFound { .. } => 404,
            _ => 500,
        }
    }

    /// The unmatched request, if this is a `RecordNotFound`.
    pub fn request(&self) -> Option<&IncomingRequest> {
        match self {
            VcrError::RecordNotFound { request } => Some(request.as_ref()),
            _ => None,
        }
    }

    /// Resource name for fixture errors.
    pub fn resource(&self) -> Option<&str> {
        match self {
            VcrError::FixtureMissing { resource }
            | VcrError::FixtureInvalid { resource, .. }
            | VcrError::Io { resource, .. } => Some(resource.as_str()),
            _ => None,
        }
    }
}

/// Fixture variants compare by resource; `RecordNotFound` compares the request.
impl PartialEq for VcrError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                VcrError::FixtureMissing { resource: lhs },
                VcrError::FixtureMissing { resource: rhs },
            )
            | (
                VcrError::FixtureInvalid { resource: lhs, .. },
                VcrError::FixtureInvalid { resource: rhs, .. },
            )
            | (VcrError::Io { resource: lhs, .. }, VcrError::Io { resource: rhs, .. }) => {
                lhs == rhs
            }
            (
                VcrError::RecordNotFound { request: lhs },
                VcrError::RecordNotFound { request: rhs },
            ) => lhs == rhs,
            (VcrError::EmptyCassette, VcrError::EmptyCassette) => true,
            (VcrError::InvalidRequest(lhs), VcrError::InvalidRequest(rhs))
            | (VcrError::InvalidResponse(lhs), VcrError::InvalidResponse(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}
