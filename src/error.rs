//! Application error type and its HTTP representation.
//!
//! Every error is user-facing and recoverable. Handlers return `Result<_, AppError>`
//! and the [`IntoResponse`] impl renders the JSON envelope:
//!
//! ```json
//! { "error": { "code": "shortcode_collision", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error description, embedded in error responses and batch results.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// The submitted target is not an absolute URL with a scheme and a host.
    #[error("Invalid URL provided.")]
    InvalidUrl { url: String, reason: String },

    #[error("Shortcode \"{0}\" already exists.")]
    ShortcodeCollision(String),

    #[error("Shortcode not found")]
    NotFound(String),

    #[error("This link has expired.")]
    Expired(String),

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::ShortcodeCollision(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Expired(_) => StatusCode::GONE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::ShortcodeCollision(_) => "shortcode_collision",
            Self::NotFound(_) => "not_found",
            Self::Expired(_) => "expired",
            Self::Validation { .. } => "validation_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            Self::InvalidUrl { url, reason } => json!({ "url": url, "reason": reason }),
            Self::ShortcodeCollision(code) | Self::NotFound(code) | Self::Expired(code) => {
                json!({ "code": code })
            }
            Self::Validation { details, .. } | Self::Internal { details, .. } => details.clone(),
        };

        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_url("nope", "relative URL without a base").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ShortcodeCollision("dup".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Expired("x".to_string()).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::internal("boom", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            AppError::invalid_url("nope", "x").to_string(),
            "Invalid URL provided."
        );
        assert_eq!(
            AppError::ShortcodeCollision("abc12".to_string()).to_string(),
            "Shortcode \"abc12\" already exists."
        );
        assert_eq!(
            AppError::NotFound("abc12".to_string()).to_string(),
            "Shortcode not found"
        );
        assert_eq!(
            AppError::Expired("abc12".to_string()).to_string(),
            "This link has expired."
        );
    }

    #[test]
    fn test_error_info_details() {
        let info = AppError::ShortcodeCollision("dup".to_string()).to_error_info();
        assert_eq!(info.code, "shortcode_collision");
        assert_eq!(info.details["code"], "dup");

        let info = AppError::invalid_url("ftp//bad", "relative URL without a base").to_error_info();
        assert_eq!(info.code, "invalid_url");
        assert_eq!(info.details["url"], "ftp//bad");
    }
}
