/// Error types for backend API calls
use thiserror::Error;

/// Errors that can occur while talking to the monitoring backend
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {status_text}")]
    Http {
        status: u16,
        /// Reason phrase of the status line (e.g. "Not Found")
        status_text: String,
    },

    /// Transport-level failure (DNS, connection refused, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The request did not complete within its deadline
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// The request was abandoned because the dashboard shut down
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Http {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let e = ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_http_error_keeps_status() {
        let e = ApiError::from_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            e,
            ApiError::Http { status: 404, status_text: "Not Found".into() }
        );
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(ApiError::Timeout(45).to_string(), "Request timed out after 45s");
    }
}
