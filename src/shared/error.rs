//! Shared Error Types
//!
//! Error taxonomy for the HTTP resource clients. Authentication-specific
//! failures have their own type in `egui_app::auth`; everything else the
//! clients can hit is covered here.
//!
//! # Error Categories
//!
//! - `Unauthorized` - the bearer token was missing or rejected
//! - `NotFound` - the addressed resource does not exist
//! - `Rejected` - the backend refused the request (4xx with a detail)
//! - `Network` - transport-level failure
//! - `Decode` - a response body did not match the expected shape
use thiserror::Error;

/// Errors surfaced by the wallet and site API clients
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Token missing, expired or rejected by the backend
    #[error("not authenticated")]
    Unauthorized,

    /// Resource does not exist
    #[error("not found")]
    NotFound,

    /// Request refused by the backend
    #[error("{detail}")]
    Rejected {
        /// Backend-provided detail message
        detail: String,
    },

    /// Transport-level failure
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// Response body did not parse as the expected shape
    #[error("unexpected response: {message}")]
    Decode {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create a rejection error carrying the backend detail
    pub fn rejected(detail: impl Into<String>) -> Self {
        Self::Rejected {
            detail: detail.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status and its body to an error.
    ///
    /// The backend reports failures as `{"detail": "..."}`; when the body
    /// does not carry that shape the raw status line is used instead.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound,
            _ => Self::rejected(extract_detail(body).unwrap_or_else(|| format!("HTTP {}", status))),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

/// Pull the `detail` field out of a backend error body, if present.
pub fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_maps_to_unauthorized() {
        assert!(matches!(
            ApiError::from_status(401, ""),
            ApiError::Unauthorized
        ));
    }

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound));
    }

    #[test]
    fn rejection_carries_backend_detail() {
        let err = ApiError::from_status(400, r#"{"detail": "Company not found"}"#);
        match err {
            ApiError::Rejected { detail } => assert_eq!(detail, "Company not found"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn rejection_falls_back_to_status_line() {
        let err = ApiError::from_status(500, "internal error");
        match err {
            ApiError::Rejected { detail } => assert_eq!(detail, "HTTP 500"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn extract_detail_ignores_non_json() {
        assert_eq!(extract_detail("<html>oops</html>"), None);
    }

    #[test]
    fn error_display() {
        let err = ApiError::rejected("duplicate email");
        assert_eq!(format!("{}", err), "duplicate email");
    }
}
