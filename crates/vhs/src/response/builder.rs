use bytes::Bytes;
use http_body_util::Full;
use hyper::http::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Response, StatusCode};
use std::str::FromStr;

/// Builds `hyper` responses for hosts that deliver replayed tracks over HTTP.
pub struct ResponseBuilder {
    status: StatusCode,
    body: Option<Bytes>,
    headers: HeaderMap,
}

impl ResponseBuilder {
    pub fn new(status_code: StatusCode) -> Self {
        ResponseBuilder {
            status: status_code,
            body: None,
            headers: Default::default(),
        }
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Invalid header names or values are skipped.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        match (HeaderName::from_str(name), HeaderValue::from_str(value)) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
                self
            }
            _ => self,
        }
    }

    pub fn merge_headers<H, K, V>(mut self, headers: H) -> Self
    where
        H: IntoIterator<Item = (K, V)>,
        HeaderName: TryFrom<K>,
        HeaderValue: TryFrom<V>,
    {
        for (key, value) in headers {
            if let (Ok(name), Ok(value)) = (HeaderName::try_from(key), HeaderValue::try_from(value))
            {
                self.headers.insert(name, value);
            }
        }
        self
    }

    pub fn build_full(self) -> Response<Full<Bytes>> {
        let payload = self.body.unwrap_or_default();
        let mut response = Response::new(Full::new(payload));
        *response.status_mut() = self.status;
        response.headers_mut().extend(self.headers);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_builder_with_status() {
        let response = ResponseBuilder::new(StatusCode::OK).build_full();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_builder_with_headers() {
        let response = ResponseBuilder::new(StatusCode::OK)
            .header("X-Custom-Header", "test-value")
            .header("Content-Type", "text/plain")
            .header("bad header name", "ignored")
            .build_full();

        assert_eq!(
            response.headers().get("X-Custom-Header"),
            Some(&HeaderValue::from_static("test-value"))
        );
        assert_eq!(
            response.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("text/plain"))
        );
        assert_eq!(response.headers().len(), 2);
    }

    #[test]
    fn test_merge_headers_from_map() {
        let recorded: std::collections::HashMap<String, String> = [
            ("key_A".to_string(), "value_A".to_string()),
            ("key_C".to_string(), "value_C".to_string()),
        ]
        .into_iter()
        .collect();

        let response = ResponseBuilder::new(StatusCode::CREATED)
            .header("key_B", "value_B")
            .merge_headers(recorded)
            .build_full();

        assert_eq!(response.status(), StatusCode::CREATED);
        for (name, value) in [("key_a", "value_A"), ("key_b", "value_B"), ("key_c", "value_C")] {
            assert_eq!(
                response.headers().get(name).and_then(|v| v.to_str().ok()),
                Some(value)
            );
        }
    }

    #[tokio::test]
    async fn test_body_bytes() {
        let response = ResponseBuilder::new(StatusCode::OK)
            .body("No header match!")
            .build_full();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(body, Bytes::from_static(b"No header match!"));
    }
}
