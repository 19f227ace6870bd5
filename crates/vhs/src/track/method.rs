//! HTTP verbs understood by a track.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One of the nine standard HTTP verbs.
///
/// Parsing never fails: unknown or missing verbs become [`Method::Get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    Options,
    #[default]
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Trace,
    Connect,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Options,
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Trace,
        Method::Connect,
    ];

    /// Parse a verb ignoring case. `None` and unrecognized values yield `GET`.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Method::Get;
        };
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(value))
            .unwrap_or(Method::Get)
    }

    /// Parse from an arbitrary fixture value; non-strings yield `GET`.
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        Self::parse(value.and_then(serde_json::Value::as_str))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Options => "OPTIONS",
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&hyper::Method> for Method {
    fn from(method: &hyper::Method) -> Self {
        Method::parse(Some(method.as_str()))
    }
}

impl From<Method> for hyper::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Options => hyper::Method::OPTIONS,
            Method::Get => hyper::Method::GET,
            Method::Head => hyper::Method::HEAD,
            Method::Post => hyper::Method::POST,
            Method::Put => hyper::Method::PUT,
            Method::Patch => hyper::Method::PATCH,
            Method::Delete => hyper::Method::DELETE,
            Method::Trace => hyper::Method::TRACE,
            Method::Connect => hyper::Method::CONNECT,
        }
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Lenient like `parse`: anything that is not a known verb string is GET.
impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Method::from_value(Some(&value)))
    }
}
