//! Match types: the properties by which a track and a request are compared.

use super::query::query_matches;
use super::request::PlaybackRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

type CustomFn = dyn Fn(&dyn PlaybackRequest, &dyn PlaybackRequest) -> bool + Send + Sync;

/// A caller-supplied comparison of (recorded, incoming) requests.
#[derive(Clone)]
pub struct CustomMatcher(Arc<CustomFn>);

impl CustomMatcher {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn PlaybackRequest, &dyn PlaybackRequest) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn call(&self, recorded: &dyn PlaybackRequest, incoming: &dyn PlaybackRequest) -> bool {
        (self.0)(recorded, incoming)
    }
}

impl fmt::Debug for CustomMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomMatcher(..)")
    }
}

/// One property compared between a recorded request and an incoming one.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
    /// Normalized HTTP verb.
    Method,
    /// The full URL, fragment included.
    Url,
    Scheme,
    /// URL path only.
    Path,
    /// Query parameters, order-insensitive.
    Query,
    /// Exact header map equality; both sides must have headers.
    Headers,
    /// Body bytes; two absent bodies match.
    Body,
    /// Caller-supplied predicate, used verbatim. Not configurable from files.
    #[serde(skip)]
    Custom(CustomMatcher),
}

impl MatchType {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&dyn PlaybackRequest, &dyn PlaybackRequest) -> bool + Send + Sync + 'static,
    {
        MatchType::Custom(CustomMatcher::new(f))
    }

    /// Compare `recorded` (the track side) with `incoming`.
    pub fn matches(&self, recorded: &dyn PlaybackRequest, incoming: &dyn PlaybackRequest) -> bool {
        match self {
            MatchType::Method => recorded.method() == incoming.method(),
            MatchType::Url => recorded.url() == incoming.url(),
            MatchType::Scheme => recorded.url().scheme() == incoming.url().scheme(),
            MatchType::Path => recorded.url().path() == incoming.url().path(),
            MatchType::Query => query_matches(recorded.url(), incoming.url()),
            MatchType::Headers => match (recorded.headers(), incoming.headers()) {
                (Some(recorded), Some(incoming)) => recorded == incoming,
                _ => false,
            },
            MatchType::Body => match (recorded.body(), incoming.body()) {
                (Some(recorded), Some(incoming)) => recorded == incoming,
                (None, None) => true,
                _ => false,
            },
            MatchType::Custom(custom) => custom.call(recorded, incoming),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchType::Method => "method",
            MatchType::Url => "url",
            MatchType::Scheme => "scheme",
            MatchType::Path => "path",
            MatchType::Query => "query",
            MatchType::Headers => "headers",
            MatchType::Body => "body",
            MatchType::Custom(_) => "custom",
        }
    }
}

/// Every matcher accepts the pair. An empty list accepts anything.
pub fn all_match(
    matchers: &[MatchType],
    recorded: &dyn PlaybackRequest,
    incoming: &dyn PlaybackRequest,
) -> bool {
    matchers
        .iter()
        .all(|matcher| matcher.matches(recorded, incoming))
}
