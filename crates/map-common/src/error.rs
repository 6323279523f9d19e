//! Error types for the static map proxy.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for static map requests.
///
/// None of these reach the client as a document; the HTTP layer logs the
/// kind and redirects to the fallback image.
#[derive(Debug, Error)]
pub enum MapError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Geocoding Errors ===
    #[error("No geocoding candidates for address: {0}")]
    AddressNotFound(String),

    #[error("Geocoding failed: {0}")]
    GeocodeFailed(String),

    // === Export Errors ===
    #[error("Export web map task failed: {0}")]
    ExportFailed(String),

    // === Infrastructure Errors ===
    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl MapError {
    /// Short, stable identifier used as a log field and metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            MapError::MissingParameter(_) => "missing_parameter",
            MapError::InvalidParameter { .. } => "invalid_parameter",
            MapError::AddressNotFound(_) => "address_not_found",
            MapError::GeocodeFailed(_) => "geocode_failed",
            MapError::ExportFailed(_) => "export_failed",
            MapError::Upstream(_) => "upstream",
            MapError::Timeout => "timeout",
            MapError::InternalError(_) => "internal",
        }
    }

    /// HTTP status code this error would carry if it were surfaced.
    pub fn http_status_code(&self) -> u16 {
        match self {
            MapError::MissingParameter(_) | MapError::InvalidParameter { .. } => 400,

            MapError::AddressNotFound(_) => 404,

            MapError::GeocodeFailed(_) | MapError::ExportFailed(_) | MapError::Upstream(_) => 502,
            MapError::Timeout => 504,

            MapError::InternalError(_) => 500,
        }
    }

    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        MapError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::InternalError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        let errors = [
            MapError::MissingParameter("center".into()),
            MapError::invalid_parameter("webmap", "not JSON"),
            MapError::AddressNotFound("nowhere".into()),
            MapError::GeocodeFailed("400".into()),
            MapError::ExportFailed("bad layer".into()),
            MapError::Upstream("connection reset".into()),
            MapError::Timeout,
            MapError::InternalError("boom".into()),
        ];
        let mut kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), errors.len());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(MapError::MissingParameter("center".into()).http_status_code(), 400);
        assert_eq!(MapError::AddressNotFound("x".into()).http_status_code(), 404);
        assert_eq!(MapError::ExportFailed("x".into()).http_status_code(), 502);
        assert_eq!(MapError::Timeout.http_status_code(), 504);
    }

    #[test]
    fn test_display() {
        let err = MapError::invalid_parameter("size", "expected WIDTHxHEIGHT");
        assert_eq!(
            err.to_string(),
            "Invalid parameter value for 'size': expected WIDTHxHEIGHT"
        );
    }
}
