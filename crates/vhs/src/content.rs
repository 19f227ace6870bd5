//! Content classification for fixture bodies.
//!
//! A fixture stores bodies in a textual form. The `Content-Type` of the
//! surrounding message decides how that form turns into raw bytes:
//!
//! - `text/*` - the body is a JSON string, used as UTF-8
//! - `application/json*` - the body is structured JSON, re-serialized
//! - anything else (or no header) - the body is a base64 string
//!
//! Decoding is lenient: a value of the wrong shape decodes to `None`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// How a fixture body is represented on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Json,
    #[default]
    Base64,
}

impl ContentKind {
    /// Classify a `Content-Type` header value.
    ///
    /// Prefix checks are case-insensitive. `text/` wins over
    /// `application/json`; everything else, including `None`, is base64.
    pub fn classify(content_type: Option<&str>) -> Self {
        let Some(value) = content_type else {
            return ContentKind::Base64;
        };
        let value = value.to_ascii_lowercase();
        if value.starts_with("text/") {
            ContentKind::Text
        } else if value.starts_with("application/json") {
            ContentKind::Json
        } else {
            ContentKind::Base64
        }
    }

    /// Classify from a header map by looking up `Content-Type` case-insensitively.
    pub fn from_headers(headers: Option<&HashMap<String, String>>) -> Self {
        Self::classify(headers.and_then(content_type))
    }

    /// Decode a fixture body value into raw bytes.
    pub fn decode(self, body: &Value) -> Option<Bytes> {
        let decoded = match (self, body) {
            (ContentKind::Text, Value::String(text)) => Some(Bytes::copy_from_slice(text.as_bytes())),
            (ContentKind::Base64, Value::String(encoded)) => {
                STANDARD.decode(encoded.as_bytes()).ok().map(Bytes::from)
            }
            (ContentKind::Json, Value::Object(_) | Value::Array(_)) => Self::encode_json(body),
            _ => None,
        };

        if decoded.is_none() && !body.is_null() {
            debug!(kind = ?self, "Fixture body did not decode, treating as absent");
        }
        decoded
    }

    /// Serialize a JSON value into compact JSON bytes.
    pub fn encode_json(value: &Value) -> Option<Bytes> {
        serde_json::to_vec(value).ok().map(Bytes::from)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Json => "json",
            ContentKind::Base64 => "base64",
        }
    }
}

/// Find the `Content-Type` value in a header map, ignoring key case.
pub fn content_type(headers: &HashMap<String, String>) -> Option<&str> {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.as_str())
}
