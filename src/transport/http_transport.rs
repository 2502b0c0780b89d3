//! Reqwest-based HTTP transport implementation.

use super::{ByteStream, HttpResponse, HttpTransport};
use crate::errors::{DraftsmithError, DraftsmithResult};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use std::time::Duration;

/// Reqwest-based HTTP transport
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with the given request timeout.
    ///
    /// The timeout covers the whole exchange, body included, so callers
    /// keep it generous enough for long-lived reply streams. Connection
    /// establishment gets its own, shorter bound.
    pub fn new(timeout: Duration) -> DraftsmithResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(30)))
            .pool_max_idle_per_host(20)
            .build()
            .map_err(|e| DraftsmithError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    fn build_request(
        &self,
        method: http::Method,
        url: &str,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<reqwest::RequestBuilder> {
        let method = reqwest::Method::from_bytes(method.as_str().as_bytes()).map_err(|e| {
            DraftsmithError::Internal {
                message: format!("Invalid HTTP method: {}", e),
            }
        })?;

        let mut request = self.client.request(method, url);
        for (name, value) in headers.iter() {
            request = request.header(name.as_str(), value.as_bytes());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        Ok(request)
    }

    fn map_http_error(status: reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &[u8]) -> DraftsmithError {
        let body_str = String::from_utf8_lossy(body).to_string();

        match status.as_u16() {
            401 | 403 => DraftsmithError::Authentication {
                message: format!("Authentication failed: {}", body_str),
            },
            404 => DraftsmithError::NotFound {
                message: body_str,
                resource_type: "resource".to_string(),
            },
            400 | 422 => DraftsmithError::Validation {
                message: body_str,
                details: vec![],
            },
            429 => {
                let retry_after = headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                DraftsmithError::RateLimit {
                    message: format!("Rate limit exceeded: {}", body_str),
                    retry_after,
                }
            }
            500..=599 => DraftsmithError::Server {
                message: body_str,
                status_code: Some(status.as_u16()),
            },
            _ => DraftsmithError::Internal {
                message: format!("HTTP error {}: {}", status.as_u16(), body_str),
            },
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: http::Method,
        url: String,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<HttpResponse> {
        let request = self.build_request(method, &url, headers, body)?;
        let response = request.send().await?;

        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::map_http_error(status, &response_headers, &body));
        }

        let mut headers = http::HeaderMap::new();
        for (name, value) in response_headers.iter() {
            if let (Ok(name), Ok(value)) = (
                http::header::HeaderName::from_bytes(name.as_str().as_bytes()),
                http::header::HeaderValue::from_bytes(value.as_bytes()),
            ) {
                headers.insert(name, value);
            }
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }

    async fn execute_stream(
        &self,
        method: http::Method,
        url: String,
        headers: http::HeaderMap,
        body: Option<Vec<u8>>,
    ) -> DraftsmithResult<ByteStream> {
        let request = self.build_request(method, &url, headers, body)?;
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let response_headers = response.headers().clone();
            let body = response.bytes().await?;
            return Err(Self::map_http_error(status, &response_headers, &body));
        }

        let stream = response.bytes_stream().map(|result| {
            result.map_err(|e| DraftsmithError::Stream {
                message: format!("Stream interrupted: {}", e),
            })
        });

        Ok(Box::pin(stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reqwest_transport_creation() {
        let transport = ReqwestTransport::new(Duration::from_secs(30));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_map_http_error_rate_limit_parses_retry_after() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("retry-after", "15".parse().unwrap());

        let error = ReqwestTransport::map_http_error(
            reqwest::StatusCode::TOO_MANY_REQUESTS,
            &headers,
            b"slow down",
        );

        assert_eq!(error.retry_after(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_map_http_error_server() {
        let headers = reqwest::header::HeaderMap::new();
        let error = ReqwestTransport::map_http_error(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
            &headers,
            b"maintenance",
        );

        assert!(matches!(
            error,
            DraftsmithError::Server {
                status_code: Some(503),
                ..
            }
        ));
        assert!(error.is_retryable());
    }
}
