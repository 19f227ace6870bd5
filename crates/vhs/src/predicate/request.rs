//! The request shape predicates compare.

use crate::error::VcrError;
use crate::track::{Headers, Method, TrackRequest};
use bytes::Bytes;
use reqwest::Url;

/// Everything a predicate may look at on either side of a comparison.
///
/// Implemented by recorded [`TrackRequest`]s and by host-supplied
/// [`IncomingRequest`]s, so custom predicates see both through one view.
pub trait PlaybackRequest {
    fn url(&self) -> &Url;
    fn method(&self) -> Method;
    fn headers(&self) -> Option<&Headers>;
    fn body(&self) -> Option<&[u8]>;
}

/// An outgoing request the host asks VHS to answer.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingRequest {
    pub url: Url,
    pub method: Method,
    pub headers: Option<Headers>,
    pub body: Option<Bytes>,
}

impl IncomingRequest {
    pub fn new(url: Url, method: Method) -> Self {
        Self {
            url,
            method,
            headers: None,
            body: None,
        }
    }

    /// A GET request for `url`.
    pub fn get(url: &str) -> Result<Self, VcrError> {
        let url = Url::parse(url).map_err(|e| VcrError::InvalidRequest(format!("{url}: {e}")))?;
        Ok(Self::new(url, Method::Get))
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Convert a `hyper` request. The URI must be absolute.
    ///
    /// Header values that are not visible ASCII are skipped. An empty
    /// header map or body is recorded as absent.
    pub fn from_http(request: &hyper::Request<Bytes>) -> Result<Self, VcrError> {
        let uri = request.uri().to_string();
        let url = Url::parse(&uri)
            .map_err(|e| VcrError::InvalidRequest(format!("'{uri}' is not an absolute URL: {e}")))?;

        let headers: Headers = request
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = request.body();
        Ok(Self {
            url,
            method: Method::from(request.method()),
            headers: (!headers.is_empty()).then_some(headers),
            body: (!body.is_empty()).then(|| body.clone()),
        })
    }
}

impl PlaybackRequest for IncomingRequest {
    fn url(&self) -> &Url {
        &self.url
    }

    fn method(&self) -> Method {
        self.method
    }

    fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

impl PlaybackRequest for TrackRequest {
    fn url(&self) -> &Url {
        &self.url
    }

    fn method(&self) -> Method {
        self.method
    }

    fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
