//! Configuration types for the Draftsmith API client.

use crate::errors::{DraftsmithError, DraftsmithResult};
use crate::{DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_STATUS, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use std::time::Duration;

/// Configuration for the Draftsmith API client.
#[derive(Clone)]
pub struct DraftsmithConfig {
    /// API key for authentication
    pub api_key: SecretString,
    /// Base URL for the Draftsmith API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retry attempts for non-streaming operations
    pub max_retries: u32,
    /// Initial status reported for a reply stream that never saw a status frame
    pub initial_status: String,
}

impl DraftsmithConfig {
    /// Creates a new configuration builder
    pub fn builder() -> DraftsmithConfigBuilder {
        DraftsmithConfigBuilder::default()
    }

    /// Creates a configuration from environment variables
    pub fn from_env() -> DraftsmithResult<Self> {
        let api_key =
            std::env::var("DRAFTSMITH_API_KEY").map_err(|_| DraftsmithError::Configuration {
                message: "DRAFTSMITH_API_KEY environment variable not set".to_string(),
            })?;

        let base_url =
            std::env::var("DRAFTSMITH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("DRAFTSMITH_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let max_retries = std::env::var("DRAFTSMITH_MAX_RETRIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);

        Ok(Self {
            api_key: SecretString::new(api_key),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            initial_status: DEFAULT_STATUS.to_string(),
        })
    }
}

/// Builder for DraftsmithConfig
#[derive(Default)]
pub struct DraftsmithConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    initial_status: Option<String>,
}

impl DraftsmithConfigBuilder {
    /// Sets the API key
    pub fn api_key(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the maximum number of retries
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets the initial reply-stream status
    pub fn initial_status(mut self, status: impl Into<String>) -> Self {
        self.initial_status = Some(status.into());
        self
    }

    /// Builds the configuration
    pub fn build(self) -> DraftsmithResult<DraftsmithConfig> {
        let api_key = self.api_key.ok_or_else(|| DraftsmithError::Configuration {
            message: "API key is required".to_string(),
        })?;

        Ok(DraftsmithConfig {
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            initial_status: self
                .initial_status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DraftsmithConfig::builder()
            .api_key(SecretString::new("ds-test".to_string()))
            .build()
            .unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(config.initial_status, DEFAULT_STATUS);
    }

    #[test]
    fn test_config_builder_custom() {
        let config = DraftsmithConfig::builder()
            .api_key(SecretString::new("ds-test".to_string()))
            .base_url("https://staging.draftsmith.dev")
            .timeout(Duration::from_secs(120))
            .max_retries(5)
            .initial_status("draft")
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://staging.draftsmith.dev");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.initial_status, "draft");
    }

    #[test]
    fn test_config_builder_requires_api_key() {
        let result = DraftsmithConfig::builder().build();
        assert!(result.is_err());
    }
}
