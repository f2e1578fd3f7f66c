// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Every page controller returns this; the caller decides whether it becomes
/// a toast, a navigation, or both.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    // Transport failure (connection refused, timeout, TLS...)
    Network(String),

    // Backend answered with a non-2xx status.
    // `message` is the string extracted from the error payload when present.
    Api { status: u16, message: String },

    // Client-side required-field / format checks failed before sending
    Validation(String),

    // No usable session (missing or expired token)
    Unauthorized(String),

    // Response body could not be decoded into the expected DTO
    Decode(String),

    // Local file access (session file, source files, uploads)
    Io(String),

    // Bad configuration (unparsable backend URL...)
    Config(String),

    // An action is already in flight (run, submit, upload)
    Busy(String),
}

impl AppError {
    /// The text a toast shows for this error.
    /// API errors show the backend's own message verbatim.
    pub fn toast_message(&self) -> String {
        match self {
            AppError::Api { message, .. } => message.clone(),
            AppError::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::Busy(msg)
            | AppError::Io(msg)
            | AppError::Config(msg) => msg.clone(),
            AppError::Decode(_) => "Unexpected response from the server.".to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AppError::Unauthorized(_) | AppError::Api { status: 401, .. }
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "network error: {}", msg),
            AppError::Api { status, message } => write!(f, "server returned {}: {}", status, message),
            AppError::Validation(msg) => write!(f, "validation failed: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
            AppError::Decode(msg) => write!(f, "invalid response: {}", msg),
            AppError::Io(msg) => write!(f, "io error: {}", msg),
            AppError::Config(msg) => write!(f, "configuration error: {}", msg),
            AppError::Busy(msg) => write!(f, "busy: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `reqwest::Error` into `AppError`.
/// Allows using `?` operator on request futures.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::Unauthorized(err.to_string())
    }
}

/// Pulls the human-readable message out of a backend error body.
///
/// The backend is not consistent: some endpoints answer `{"error": "..."}`,
/// others `{"message": "..."}`, and some reply with plain text.
pub fn extract_error_message(body: &str, fallback: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "msg"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.trim().is_empty() {
                    return msg.to_string();
                }
            }
        }
        if let Some(msg) = value.as_str() {
            return msg.to_string();
        }
    } else if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    fallback.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error":"Exam already submitted"}"#, "x"),
            "Exam already submitted"
        );
    }

    #[test]
    fn extracts_message_field_when_error_missing() {
        assert_eq!(
            extract_error_message(r#"{"message":"Job not found","status":404}"#, "x"),
            "Job not found"
        );
    }

    #[test]
    fn plain_text_body_is_used_as_is() {
        assert_eq!(extract_error_message("  Bad Gateway \n", "x"), "Bad Gateway");
    }

    #[test]
    fn empty_body_falls_back() {
        assert_eq!(extract_error_message("", "Request failed"), "Request failed");
        assert_eq!(extract_error_message("{}", "Request failed"), "Request failed");
    }

    #[test]
    fn api_toast_shows_backend_message() {
        let err = AppError::Api {
            status: 409,
            message: "Already applied".to_string(),
        };
        assert_eq!(err.toast_message(), "Already applied");
        assert!(!err.is_unauthorized());
        assert!(AppError::Api { status: 401, message: String::new() }.is_unauthorized());
    }
}
