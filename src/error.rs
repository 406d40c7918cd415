//! Error types shared by the clients, the view model and the demo server.
//!
//! [`QplanError`] is the single error type of the crate. Client-side
//! variants are logged and returned to the caller; server-side variants map
//! to an HTTP status code and a structured JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tokio_tungstenite::tungstenite;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "invalid request: triage must be a non-negative number"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Crate-wide error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 3000–3999 | Server     | 500 Internal Server Error |
/// | 5000–5999 | Upstream   | 502 Bad Gateway           |
#[derive(Debug, thiserror::Error)]
pub enum QplanError {
    /// WebSocket transport failure (handshake, I/O, protocol).
    #[error("websocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    /// HTTP transport or body decoding failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The HTTP endpoint answered with a non-success status.
    #[error("unexpected http status {0}")]
    HttpStatus(u16),

    /// A configured URL could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The peer closed the connection before sending a reply.
    #[error("connection closed before a reply was received")]
    ConnectionClosed,

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Filesystem failure while loading data.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<tungstenite::Error> for QplanError {
    fn from(err: tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}

impl QplanError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidUrl(_) => 1002,
            Self::Io(_) => 3001,
            Self::Json(_) => 3002,
            Self::WebSocket(_) => 5001,
            Self::Http(_) => 5002,
            Self::HttpStatus(_) => 5003,
            Self::ConnectionClosed => 5004,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::WebSocket(_) | Self::Http(_) | Self::HttpStatus(_) | Self::ConnectionClosed => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for QplanError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_bad_request() {
        let err = QplanError::InvalidRequest("triage".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), 1001);
    }

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        assert_eq!(
            QplanError::HttpStatus(500).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            QplanError::ConnectionClosed.status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn into_response_carries_status() {
        let response = QplanError::InvalidRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
