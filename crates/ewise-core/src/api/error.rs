//! API error taxonomy.

use std::fmt;

use serde_json::Value;

/// Categories of API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Required fields missing, caught before any network call
    Validation,
    /// Credentials rejected by the remote service
    Auth,
    /// Request could not complete (connect failure, timeout, etc.)
    Network,
    /// Remote reported the resource as missing (404)
    NotFound,
    /// Any other non-2xx response
    Server,
    /// Response body did not match the expected shape
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Validation => write!(f, "validation"),
            ApiErrorKind::Auth => write!(f, "auth"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::NotFound => write!(f, "not_found"),
            ApiErrorKind::Server => write!(f, "server"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error with kind and details.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// HTTP status, when the error came from a response
    pub status: Option<u16>,
    /// Message supplied by the remote service, if any
    pub remote: Option<String>,
    /// Raw details (e.g. the response body)
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            remote: None,
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    /// Creates an error from a non-2xx response.
    ///
    /// 404 maps to `NotFound`; everything else to `Server`. The remote
    /// message is pulled from `{"error": "..."}` or
    /// `{"error": {"message": "..."}}` bodies.
    pub fn http_status(status: u16, body: &str) -> Self {
        let kind = if status == 404 {
            ApiErrorKind::NotFound
        } else {
            ApiErrorKind::Server
        };
        Self::from_response(kind, status, body)
    }

    /// Creates an `Auth` error from a rejected login response.
    pub fn auth(status: u16, body: &str) -> Self {
        Self::from_response(ApiErrorKind::Auth, status, body)
    }

    fn from_response(kind: ApiErrorKind, status: u16, body: &str) -> Self {
        let remote = extract_remote_message(body);
        let message = match &remote {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        };
        Self {
            kind,
            message,
            status: Some(status),
            remote,
            details: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// The remote-supplied message, when the service sent one.
    pub fn remote_message(&self) -> Option<&str> {
        self.remote.as_deref()
    }

    /// Message for a notification: remote message if present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.remote_message().unwrap_or(fallback).to_string()
    }
}

fn extract_remote_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    let error = json.get("error")?;
    let message = match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj.get("message")?.as_str()?.to_string(),
        _ => return None,
    };
    let trimmed = message.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Classifies a reqwest error into an `ApiError`.
pub fn classify_reqwest_error(e: &reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::network(format!("Request timed out: {e}"))
    } else if e.is_connect() {
        ApiError::network(format!("Connection failed: {e}"))
    } else if e.is_decode() {
        ApiError::parse(format!("Invalid response body: {e}"))
    } else {
        ApiError::network(format!("Network error: {e}"))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_extracts_string_error() {
        let err = ApiError::http_status(400, r#"{"error":"Missing password"}"#);
        assert_eq!(err.kind, ApiErrorKind::Server);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.remote_message(), Some("Missing password"));
        assert_eq!(err.to_string(), "HTTP 400: Missing password");
    }

    #[test]
    fn test_http_status_extracts_nested_error() {
        let err = ApiError::http_status(500, r#"{"error":{"message":"boom"}}"#);
        assert_eq!(err.remote_message(), Some("boom"));
    }

    #[test]
    fn test_404_is_not_found() {
        let err = ApiError::http_status(404, "{}");
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.remote_message(), None);
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn test_auth_error_keeps_remote_message() {
        let err = ApiError::auth(400, r#"{"error":"user not found"}"#);
        assert_eq!(err.kind, ApiErrorKind::Auth);
        assert_eq!(
            err.user_message("Login failed. Please check your credentials."),
            "user not found"
        );
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::http_status(502, "Bad Gateway");
        assert_eq!(err.remote_message(), None);
        assert_eq!(err.details.as_deref(), Some("Bad Gateway"));
        assert_eq!(err.user_message("Failed."), "Failed.");
    }
}
