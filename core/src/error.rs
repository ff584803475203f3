//! Error types for the todo API client.
//!
//! # Design
//! Failures split into transport failures (no response at all) and
//! application failures (a non-success status). Application failures carry
//! the `message` field of the server's JSON error body when one was sent, so
//! the presentation layer can show it without re-parsing the body.

use thiserror::Error;

use crate::types::ErrorBody;

/// Errors returned by the todo API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response arrived: connection refused, DNS failure, reset, ...
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned 404, or the id is unknown locally.
    #[error("todo not found")]
    NotFound { message: Option<String> },

    /// The server returned a non-success status other than 404.
    #[error("HTTP {status}: {body}")]
    Http {
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build the error for a non-success response, pulling `message` out of
    /// a JSON error body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        if status == 404 {
            return ApiError::NotFound { message };
        }
        ApiError::Http {
            status,
            message,
            body: body.to_string(),
        }
    }

    /// Human-readable text for the user: the server's `message` when it sent
    /// one, otherwise the generic description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound { message: Some(m) } | ApiError::Http { message: Some(m), .. } => {
                m.clone()
            }
            ApiError::Transport(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// HTTP status of an application failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound { .. } => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_taken_from_json_body() {
        let err = ApiError::from_status(400, r#"{"message":"content is required"}"#);
        assert_eq!(err.user_message(), "content is required");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn plain_text_body_falls_back_to_display() {
        let err = ApiError::from_status(500, "internal error");
        assert!(matches!(err, ApiError::Http { message: None, .. }));
        assert_eq!(err.user_message(), "HTTP 500: internal error");
    }

    #[test]
    fn not_found_keeps_server_message() {
        let err = ApiError::from_status(404, r#"{"message":"todo abc not found"}"#);
        assert!(matches!(err, ApiError::NotFound { .. }));
        assert_eq!(err.user_message(), "todo abc not found");
    }

    #[test]
    fn empty_not_found_uses_generic_text() {
        let err = ApiError::from_status(404, "");
        assert_eq!(err.user_message(), "todo not found");
    }

    #[test]
    fn transport_error_shows_transport_text() {
        let err = ApiError::Transport("connection refused".to_string());
        assert!(err.is_transport());
        assert_eq!(err.user_message(), "connection refused");
        assert_eq!(err.status(), None);
    }
}
