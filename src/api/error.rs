use crate::auth::AuthError;
use thiserror::Error;

/// Shown when no better text can be extracted from a failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. The message is already derived from the response
    /// body (see [`derive_service_message`]).
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Connection, timeout, or protocol failure before a response arrived.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body did not decode as a question list.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The signed-in session could not produce a bearer token.
    #[error("{0}")]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Best-effort human-readable text for display. Every variant already
    /// carries usable text; empty text falls back to a generic notice.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Derives the display message for a non-2xx response: the body's `message`
/// field if present, else a status line.
pub fn derive_service_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            if !message.trim().is_empty() {
                return message.to_string();
            }
        }
    }
    format!("request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_is_preferred() {
        let message = derive_service_message(500, r#"{"message": "overloaded"}"#);
        assert_eq!(message, "overloaded");
    }

    #[test]
    fn test_status_fallback_for_plain_body() {
        let message = derive_service_message(502, "Bad Gateway");
        assert_eq!(message, "request failed with status 502");
    }

    #[test]
    fn test_status_fallback_for_empty_message_field() {
        let message = derive_service_message(500, r#"{"message": "  "}"#);
        assert_eq!(message, "request failed with status 500");
    }

    #[test]
    fn test_status_fallback_for_non_string_message() {
        let message = derive_service_message(500, r#"{"message": 42}"#);
        assert_eq!(message, "request failed with status 500");
    }

    #[test]
    fn test_service_error_displays_derived_message() {
        let error = ApiError::Service {
            status: 500,
            message: "overloaded".to_string(),
        };
        assert_eq!(error.user_message(), "overloaded");
    }
}
