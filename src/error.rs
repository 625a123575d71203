//! Error types for the Wallex client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all Wallex client operations.
#[derive(Error, Debug)]
pub enum WallexError {
    /// An authenticated endpoint was called without an API key
    #[error("missing api key")]
    MissingApiKey,

    /// HTTP request failed
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query parameters could not be encoded
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The blocking client could not start its runtime
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// HTTP 400
    #[error("bad request")]
    BadRequest,

    /// HTTP 401
    #[error("unauthorized")]
    Unauthorized,

    /// HTTP 403
    #[error("access forbidden")]
    Forbidden,

    /// HTTP 404
    #[error("resource not found")]
    NotFound,

    /// Any status outside 2xx other than 400, 401, 403 and 404
    #[error("unknown error (HTTP {status})")]
    Unknown {
        /// The status code returned by the server
        status: u16,
    },
}

impl WallexError {
    /// Map a non-success status code to its error category.
    ///
    /// Only the exact codes 400, 401, 403 and 404 have their own variant;
    /// everything else becomes [`WallexError::Unknown`].
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => WallexError::BadRequest,
            StatusCode::UNAUTHORIZED => WallexError::Unauthorized,
            StatusCode::FORBIDDEN => WallexError::Forbidden,
            StatusCode::NOT_FOUND => WallexError::NotFound,
            other => WallexError::Unknown {
                status: other.as_u16(),
            },
        }
    }

    /// The HTTP status behind a category error, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            WallexError::BadRequest => Some(StatusCode::BAD_REQUEST),
            WallexError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            WallexError::Forbidden => Some(StatusCode::FORBIDDEN),
            WallexError::NotFound => Some(StatusCode::NOT_FOUND),
            WallexError::Unknown { status } => StatusCode::from_u16(*status).ok(),
            _ => None,
        }
    }

    /// Check if the network exchange itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, WallexError::Http(_) | WallexError::HttpMiddleware(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            WallexError::from_status(StatusCode::BAD_REQUEST),
            WallexError::BadRequest
        ));
        assert!(matches!(
            WallexError::from_status(StatusCode::UNAUTHORIZED),
            WallexError::Unauthorized
        ));
        assert!(matches!(
            WallexError::from_status(StatusCode::FORBIDDEN),
            WallexError::Forbidden
        ));
        assert!(matches!(
            WallexError::from_status(StatusCode::NOT_FOUND),
            WallexError::NotFound
        ));
    }

    #[test]
    fn test_unmapped_status_is_unknown() {
        for code in [402, 405, 429, 500, 502, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            match WallexError::from_status(status) {
                WallexError::Unknown { status } => assert_eq!(status, code),
                other => panic!("unexpected error for {code}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(WallexError::NotFound.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(
            WallexError::Unknown { status: 503 }.status(),
            Some(StatusCode::SERVICE_UNAVAILABLE)
        );
        assert_eq!(WallexError::MissingApiKey.status(), None);
        assert!(!WallexError::MissingApiKey.is_transport());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(WallexError::MissingApiKey.to_string(), "missing api key");
        assert_eq!(WallexError::Forbidden.to_string(), "access forbidden");
        assert_eq!(
            WallexError::Unknown { status: 500 }.to_string(),
            "unknown error (HTTP 500)"
        );
    }
}
