//! Turning a sequencer decision into what the host delivers.

use super::builder::ResponseBuilder;
use crate::content::ContentKind;
use crate::error::VcrError;
use crate::predicate::IncomingRequest;
use crate::track::{Headers, Track};
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use reqwest::Url;
use std::sync::Arc;
use tracing::warn;

/// The externally visible parts of a replayed response.
///
/// Bodies were decoded when the cassette loaded; nothing is re-encoded here.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedResponse {
    pub url: Url,
    pub status: Option<i64>,
    pub headers: Option<Headers>,
    pub body: Option<Bytes>,
    pub content_kind: ContentKind,
}

impl MatchedResponse {
    pub fn from_track(track: &Track) -> Self {
        let response = &track.response;
        Self {
            url: response.url.clone(),
            status: response.status,
            headers: response.headers.clone(),
            body: response.body.clone(),
            content_kind: response.content_kind,
        }
    }

    /// Body as UTF-8 text, if present and valid.
    pub fn text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Build a `hyper` response. Without a recorded status there is no HTTP
    /// response to build, which yields `Ok(None)`.
    pub fn into_http(self) -> Result<Option<Response<Full<Bytes>>>, VcrError> {
        let Some(code) = self.status else {
            return Ok(None);
        };
        let status = u16::try_from(code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .ok_or_else(|| {
                VcrError::InvalidResponse(format!("status {code} is not an HTTP status code"))
            })?;

        let mut builder = ResponseBuilder::new(status);
        if let Some(headers) = self.headers {
            builder = builder.merge_headers(headers);
        }
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        Ok(Some(builder.build_full()))
    }
}

/// Materialize the sequencer's decision for `request`.
///
/// No track becomes `RecordNotFound` carrying the request.
pub fn materialize(
    track: Option<Arc<Track>>,
    request: &IncomingRequest,
) -> Result<MatchedResponse, VcrError> {
    match track {
        Some(track) => Ok(MatchedResponse::from_track(&track)),
        None => {
            warn!("No recorded track matches {} {}", request.method, request.url);
            Err(VcrError::RecordNotFound {
                request: Box::new(request.clone()),
            })
        }
    }
}

/// A 404 for hosts that must answer an unmatched request over HTTP.
pub fn not_found_response(error: &VcrError) -> Response<Full<Bytes>> {
    ResponseBuilder::new(StatusCode::NOT_FOUND)
        .header("Content-Type", "text/plain")
        .body(error.to_string())
        .build_full()
}
