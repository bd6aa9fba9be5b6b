use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response from the server. Never retried.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Transport-level failure (timeout, connection error). Retried up to
    /// the configured budget, then surfaced as-is.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl ApiError {
    /// Build a rejection from a response status and body. The message is
    /// the server's `detail` field when present, otherwise `fallback` with
    /// the numeric status code appended.
    pub fn from_status(status: StatusCode, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .unwrap_or_else(|| format!("{} ({})", fallback, status.as_u16()));
        ApiError::Rejected { status, message }
    }

    /// Whether this failure came from the transport rather than the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// HTTP status for rejections; `None` for transport failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_field_becomes_message() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Incorrect email or password"}"#,
            "login failed",
        );
        assert_eq!(err.to_string(), "Incorrect email or password");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_missing_detail_falls_back_to_status() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, r#"{}"#, "login failed");
        assert_eq!(err.to_string(), "login failed (502)");
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>Internal Server Error</html>",
            "failed to fetch current user",
        );
        assert_eq!(err.to_string(), "failed to fetch current user (500)");
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "", "registration failed");
        assert_eq!(err.to_string(), "registration failed (404)");
    }
}
