//! Track data model: one recorded request/response pair.

use super::Method;
use crate::content::ContentKind;
use bytes::Bytes;
use reqwest::Url;
use std::collections::HashMap;

/// Header map as recorded in a fixture. Keys keep their recorded case.
pub type Headers = HashMap<String, String>;

/// A recorded HTTP interaction. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub request: TrackRequest,
    pub response: TrackResponse,
}

/// The request half of a track, used to match incoming requests.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    pub url: Url,
    pub method: Method,
    /// `None` when the fixture recorded no headers, distinct from an empty map.
    pub headers: Option<Headers>,
    pub body: Option<Bytes>,
    /// How the fixture body was decoded. Never re-derived after construction.
    pub content_kind: ContentKind,
}

/// The response half of a track, replayed when the track matches.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackResponse {
    pub url: Url,
    pub status: Option<i64>,
    pub headers: Option<Headers>,
    pub body: Option<Bytes>,
    pub content_kind: ContentKind,
    /// Transport failure to replay. Fixture tracks never carry one.
    pub error: Option<String>,
}

impl Track {
    pub fn new(request: TrackRequest, response: TrackResponse) -> Self {
        Self { request, response }
    }
}

impl TrackRequest {
    pub fn new(url: Url, method: Method) -> Self {
        Self {
            url,
            method,
            headers: None,
            body: None,
            content_kind: ContentKind::Base64,
        }
    }

    /// Set headers and re-resolve the content kind from them.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.content_kind = ContentKind::from_headers(Some(&headers));
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl TrackResponse {
    pub fn new(url: Url, status: Option<i64>) -> Self {
        Self {
            url,
            status,
            headers: None,
            body: None,
            content_kind: ContentKind::Base64,
            error: None,
        }
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.content_kind = ContentKind::from_headers(Some(&headers));
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}
