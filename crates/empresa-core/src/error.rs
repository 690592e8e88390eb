//! Unified error types for the data access layers.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Empresa data access.
///
/// Stores return these through [`crate::EmpresaResult`]. The DAO layer never
/// hands them to its callers; it reports them and degrades to a sentinel.
#[derive(Error, Debug)]
pub enum EmpresaError {
    // ============ Configuration Errors ============
    /// Missing or invalid configuration (credentials, endpoint, files)
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Backend Errors ============
    /// The backend rejected the supplied key
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The backend refused access to the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Transport failure or unexpected backend status
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmpresaError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Maps a failed backend HTTP status to an error.
    #[must_use]
    pub fn from_status(service: &str, status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized(body.to_string()),
            403 => Self::Forbidden(body.to_string()),
            _ => Self::ExternalService {
                service: service.to_string(),
                message: format!("HTTP {status}: {body}"),
            },
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an external service error.
    #[must_use]
    pub fn external<S: Into<String>, T: Into<String>>(service: S, message: T) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if the backend rejected the credentials.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized(_) | Self::Forbidden(_))
    }
}

impl From<serde_json::Error> for EmpresaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON serialization error: {}", err))
    }
}
