//! Fixture records and their conversion into tracks.
//!
//! A fixture is a JSON array of `{ "request": {...}, "response": {...} }`
//! objects. The records here mirror that layout with serde; converting a
//! record into a [`Track`] parses URLs and decodes bodies.

use super::types::{Headers, Track, TrackRequest, TrackResponse};
use super::Method;
use crate::content::ContentKind;
use bytes::Bytes;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a fixture encodes its bodies.
///
/// The two layouts are never mixed inside one load; the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySchema {
    /// `body` is the raw value, interpreted by the sibling `Content-Type` header.
    #[default]
    Headers,
    /// `body` is `{ "type": "<content type>", "data": <value> }`.
    Tagged,
}

impl std::str::FromStr for BodySchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "headers" => Ok(BodySchema::Headers),
            "tagged" => Ok(BodySchema::Tagged),
            other => Err(format!("unknown body schema '{other}' (expected headers|tagged)")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureTrack {
    pub request: FixtureRequest,
    pub response: FixtureResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRequest {
    pub url: String,
    #[serde(default)]
    pub method: Method,
    #[serde(default)]
    pub headers: Option<Headers>,
    #[serde(default)]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureResponse {
    pub url: String,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(default)]
    pub headers: Option<Headers>,
    #[serde(default)]
    pub body: Option<Value>,
}

/// Body layout of [`BodySchema::Tagged`].
#[derive(Debug, Clone, Deserialize)]
struct TaggedBody {
    #[serde(rename = "type", default)]
    content_type: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

impl FixtureTrack {
    /// Build a track. The error string names the offending field.
    pub fn into_track(self, schema: BodySchema) -> Result<Track, String> {
        Ok(Track::new(
            self.request.into_request(schema)?,
            self.response.into_response(schema)?,
        ))
    }
}

impl FixtureRequest {
    fn into_request(self, schema: BodySchema) -> Result<TrackRequest, String> {
        let url = parse_url("request.url", &self.url)?;
        let (content_kind, body) = decode_body(schema, self.headers.as_ref(), self.body)
            .map_err(|e| format!("request.body: {e}"))?;
        Ok(TrackRequest {
            url,
            method: self.method,
            headers: self.headers,
            body,
            content_kind,
        })
    }
}

impl FixtureResponse {
    fn into_response(self, schema: BodySchema) -> Result<TrackResponse, String> {
        let url = parse_url("response.url", &self.url)?;
        let (content_kind, body) = decode_body(schema, self.headers.as_ref(), self.body)
            .map_err(|e| format!("response.body: {e}"))?;
        Ok(TrackResponse {
            url,
            status: self.status,
            headers: self.headers,
            body,
            content_kind,
            error: None,
        })
    }
}

fn parse_url(field: &str, raw: &str) -> Result<Url, String> {
    Url::parse(raw).map_err(|e| format!("{field} '{raw}' is not an absolute URL: {e}"))
}

/// Resolve the content kind and decode the body under `schema`.
///
/// Only a structurally wrong tagged body is an error; a body value that
/// does not fit its content kind decodes to `None`.
fn decode_body(
    schema: BodySchema,
    headers: Option<&Headers>,
    body: Option<Value>,
) -> Result<(ContentKind, Option<Bytes>), String> {
    match schema {
        BodySchema::Headers => {
            let kind = ContentKind::from_headers(headers);
            Ok((kind, body.and_then(|value| kind.decode(&value))))
        }
        BodySchema::Tagged => {
            let Some(body) = body else {
                return Ok((ContentKind::from_headers(headers), None));
            };
            let tagged: TaggedBody = serde_json::from_value(body).map_err(|e| e.to_string())?;
            let kind = ContentKind::classify(tagged.content_type.as_deref());
            Ok((kind, tagged.data.and_then(|value| kind.decode(&value))))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> FixtureTrack {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_track() {
        let track = record(json!({
            "request": {"url": "http://api.test1.com/get"},
            "response": {"url": "http://api.test1.com/get"}
        }))
        .into_track(BodySchema::Headers)
        .unwrap();

        assert_eq!(track.request.method, Method::Get);
        assert!(track.request.headers.is_none());
        assert!(track.request.body.is_none());
        assert_eq!(track.request.content_kind, ContentKind::Base64);
        assert!(track.response.status.is_none());
        assert!(track.response.error.is_none());
    }

    #[test]
    fn test_text_response_body() {
        let track = record(json!({
            "request": {"url": "http://api.test1.com/get/with/no/headers", "method": "get"},
            "response": {
                "url": "http://api.test1.com/get/with/no/headers",
                "status": 200,
                "headers": {"Content-Type": "text/plain"},
                "body": "No header match!"
            }
        }))
        .into_track(BodySchema::Headers)
        .unwrap();

        assert_eq!(track.response.status, Some(200));
        assert_eq!(track.response.content_kind, ContentKind::Text);
        assert_eq!(track.response.body.as_deref(), Some(&b"No header match!"[..]));
    }

    #[test]
    fn test_json_request_body() {
        let track = record(json!({
            "request": {
                "url": "http://api.test1.com/post",
                "method": "POST",
                "headers": {"content-type": "application/json"},
                "body": {"name": "vhs"}
            },
            "response": {"url": "http://api.test1.com/post", "status": 201}
        }))
        .into_track(BodySchema::Headers)
        .unwrap();

        assert_eq!(track.request.method, Method::Post);
        assert_eq!(track.request.content_kind, ContentKind::Json);
        assert_eq!(track.request.body.as_deref(), Some(&br#"{"name":"vhs"}"#[..]));
    }

    #[test]
    fn test_mismatched_body_is_absent_not_error() {
        let track = record(json!({
            "request": {
                "url": "http://api.test1.com/post",
                "headers": {"Content-Type": "application/json"},
                "body": "not an object"
            },
            "response": {"url": "http://api.test1.com/post", "body": "%%%not-base64%%%"}
        }))
        .into_track(BodySchema::Headers)
        .unwrap();

        assert!(track.request.body.is_none());
        assert!(track.response.body.is_none());
    }

    #[test]
    fn test_unknown_method_defaults_to_get() {
        let track = record(json!({
            "request": {"url": "http://api.test1.com/", "method": "track"},
            "response": {"url": "http://api.test1.com/"}
        }))
        .into_track(BodySchema::Headers)
        .unwrap();
        assert_eq!(track.request.method, Method::Get);

        let track = record(json!({
            "request": {"url": "http://api.test1.com/", "method": 7},
            "response": {"url": "http://api.test1.com/"}
        }))
        .into_track(BodySchema::Headers)
        .unwrap();
        assert_eq!(track.request.method, Method::Get);
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = record(json!({
            "request": {"url": "/relative/path"},
            "response": {"url": "http://api.test1.com/"}
        }))
        .into_track(BodySchema::Headers)
        .unwrap_err();
        assert!(err.contains("request.url"));
    }

    #[test]
    fn test_non_string_header_fails_deserialization() {
        let result: Result<FixtureTrack, _> = serde_json::from_value(json!({
            "request": {"url": "http://api.test1.com/", "headers": {"X-Count": 1}},
            "response": {"url": "http://api.test1.com/"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_tagged_schema() {
        let track = record(json!({
            "request": {
                "url": "http://api.test1.com/post",
                "body": {"type": "text/plain", "data": "hello"}
            },
            "response": {
                "url": "http://api.test1.com/post",
                "status": 200,
                "body": {"data": "aGVsbG8="}
            }
        }))
        .into_track(BodySchema::Tagged)
        .unwrap();

        assert_eq!(track.request.content_kind, ContentKind::Text);
        assert_eq!(track.request.body.as_deref(), Some(&b"hello"[..]));
        assert_eq!(track.response.content_kind, ContentKind::Base64);
        assert_eq!(track.response.body.as_deref(), Some(&b"hello"[..]));
    }

    #[test]
    fn test_tagged_schema_rejects_bare_body() {
        let err = record(json!({
            "request": {"url": "http://api.test1.com/post", "body": "hello"},
            "response": {"url": "http://api.test1.com/post"}
        }))
        .into_track(BodySchema::Tagged)
        .unwrap_err();
        assert!(err.starts_with("request.body"));
    }

    #[test]
    fn test_body_schema_from_str() {
        assert_eq!("Tagged".parse::<BodySchema>(), Ok(BodySchema::Tagged));
        assert_eq!("headers".parse::<BodySchema>(), Ok(BodySchema::Headers));
        assert!("type-data".parse::<BodySchema>().is_err());
    }
}
