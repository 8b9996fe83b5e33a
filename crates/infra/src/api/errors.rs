//! API-specific error types

use biterec_domain::BiteRecError;
use thiserror::Error;

/// Errors raised by the HTTP clients before mapping into the domain error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Client error ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<ApiError> for BiteRecError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Client { status: 404, message } => Self::NotFound(message),
            ApiError::Network(msg) => Self::Network(msg),
            ApiError::Server { .. } | ApiError::Client { .. } => Self::Network(err.to_string()),
            ApiError::InvalidResponse(msg) => Self::Internal(msg),
            ApiError::Config(msg) => Self::Config(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_domain_not_found() {
        let err: BiteRecError =
            ApiError::Client { status: 404, message: "no such restaurant".to_string() }.into();
        assert!(matches!(err, BiteRecError::NotFound(_)));
    }

    #[test]
    fn server_errors_surface_as_network_errors() {
        let err: BiteRecError =
            ApiError::Server { status: 502, message: "bad gateway".to_string() }.into();
        assert!(matches!(err, BiteRecError::Network(_)));
    }
}
