//! Authentication and header management for the Draftsmith API.

use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Trait for managing authentication headers
pub trait AuthManager: Send + Sync {
    /// Add authentication headers to a request
    fn add_auth_headers(&self, headers: &mut HeaderMap);

    /// Validate the API key format
    fn validate_api_key(&self) -> Result<(), String>;
}

/// Bearer token authentication manager
pub struct BearerAuthManager {
    api_key: SecretString,
}

impl BearerAuthManager {
    /// Create a new bearer authentication manager
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

impl AuthManager for BearerAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        let bearer = format!("Bearer {}", self.api_key.expose_secret());
        if let Ok(value) = bearer.parse() {
            headers.insert("authorization", value);
        }

        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers.insert("accept", http::HeaderValue::from_static("application/json"));
    }

    fn validate_api_key(&self) -> Result<(), String> {
        let key = self.api_key.expose_secret();

        if key.is_empty() {
            return Err("API key cannot be empty".to_string());
        }

        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("API key must not contain whitespace or control characters".to_string());
        }

        Ok(())
    }
}
