//! Reqwest-based HTTP client adapter.

use async_trait::async_trait;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// HTTP client implementation using reqwest.
///
/// Any HTTP status is returned as a [`Response`]; only transport failures
/// become [`HttpError`]. No client-side timeout is configured, so a slow
/// backend is waited on until it answers or the connection drops.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = self.client.post(url).body(body.to_string());
        let builder = Self::apply_headers(builder, headers);

        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::json_headers;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_convert_headers() {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );

        let headers = ReqwestHttpClient::convert_headers(&header_map);
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_post_returns_success_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/rewrite"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({"title": "T", "description": "D"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::new();
        let response = client
            .post(
                &format!("{}/api/rewrite", server.uri()),
                r#"{"title":"T","description":"D"}"#,
                &json_headers(),
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text_lossy(), "ok");
    }

    #[tokio::test]
    async fn test_post_returns_error_status_as_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::default();
        let response = client
            .post(&server.uri(), "{}", &Headers::new())
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(response.text_lossy(), "upstream down");
    }

    #[tokio::test]
    async fn test_post_connection_refused() {
        // Port 9 (discard) is closed on test machines.
        let client = ReqwestHttpClient::new();
        let result = client
            .post("http://127.0.0.1:9/api/rewrite", "{}", &Headers::new())
            .await;
        assert!(result.is_err());
    }
}
