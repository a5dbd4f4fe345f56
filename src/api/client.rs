//! HTTP client for the EduPortal backend REST API

use super::traits::PortalApi;
use super::types::{
    EnrollmentRequest, LoginRequest, LoginResponse, RegistrationRequest, RegistrationResponse,
};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Default backend address
const DEFAULT_ADDRESS: &str = "http://localhost:8080";

/// Errors from a form submission request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or malformed response body
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx response, with the server's message when the body carried one
    #[error("server returned status {status}")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// The server-supplied error message, if the response body carried one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Transport(_) => None,
        }
    }
}

/// Client for the EduPortal backend
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new client.
    ///
    /// Base URL precedence: `PORTAL_API_URL` environment variable, then the
    /// configured address, then the default.
    pub fn new(configured_url: Option<String>) -> Self {
        let base_url = std::env::var("PORTAL_API_URL")
            .ok()
            .or(configured_url)
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POST a JSON body, mapping non-2xx statuses to `ApiError::Server`
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Server {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

#[async_trait]
impl PortalApi for PortalClient {
    async fn submit_enrollment(&self, request: &EnrollmentRequest) -> Result<(), ApiError> {
        self.post_json("/api/enrollments", request).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.post_json("/api/auth/login", request).await?;
        Ok(response.json().await?)
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse, ApiError> {
        let response = self.post_json("/api/auth/register", request).await?;
        Ok(response.json().await?)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The backend reports failures as `{"message": ...}`, sometimes nested as
/// `{"error": {"message": ...}}`.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for candidate in [&value["message"], &value["error"]["message"]] {
        if let Some(text) = candidate.as_str() {
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_message_top_level() {
        let body = r#"{"message": "Email already registered"}"#;
        assert_eq!(
            extract_message(body),
            Some("Email already registered".to_string())
        );
    }

    #[test]
    fn test_extract_message_nested_error() {
        let body = r#"{"error": {"message": "Invalid credentials"}}"#;
        assert_eq!(extract_message(body), Some("Invalid credentials".to_string()));
    }

    #[test]
    fn test_extract_message_prefers_top_level() {
        let body = r#"{"message": "outer", "error": {"message": "inner"}}"#;
        assert_eq!(extract_message(body), Some("outer".to_string()));
    }

    #[test]
    fn test_extract_message_empty_or_missing() {
        assert_eq!(extract_message(r#"{"message": ""}"#), None);
        assert_eq!(extract_message(r#"{"code": 500}"#), None);
        assert_eq!(extract_message("not json"), None);
        assert_eq!(extract_message(""), None);
    }

    #[test]
    fn test_server_message_accessor() {
        let err = ApiError::Server {
            status: 409,
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(err.server_message(), Some("Email already registered"));

        let bare = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(bare.server_message(), None);
    }

    #[test]
    fn test_new_prefers_configured_url_over_default() {
        // PORTAL_API_URL is unset in the test environment
        let client = PortalClient::new(Some("http://portal.test:9090".to_string()));
        assert_eq!(client.base_url, "http://portal.test:9090");

        let fallback = PortalClient::new(None);
        assert_eq!(fallback.base_url, DEFAULT_ADDRESS);
    }
}
