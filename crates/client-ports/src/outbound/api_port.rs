//! Typed REST API port
//!
//! Paths are relative to the configured API root (e.g. `tenant/3/spot/`).
//! Every call is a single round trip; errors are returned as-is with no retry.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),

    /// The request path could not be resolved against the API root
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status code, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ApiPort: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>;

    /// DELETE that returns a body (the rostering API answers with a boolean)
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;
}
