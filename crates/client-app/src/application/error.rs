//! Service layer error types
//!
//! Abstracts over the transport error so callers can branch on the failure
//! class without knowing about HTTP.

use rostering_client_ports::outbound::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport or server failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The operation needs a persisted entity but was given one without an id
    #[error("Cannot {operation} a Spot that has no id")]
    MissingSpotId { operation: &'static str },
}

impl ServiceError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Api(e) if e.status() == Some(404))
    }

    /// Check if the server rejected the request itself (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Api(e) if matches!(e.status(), Some(400..=499)))
    }
}
