//! Raw API Port - Object-safe HTTP boundary
//!
//! `ApiPort` is generic over request/response types, which makes it not
//! object-safe. The composition root stores a `RawApiPort` behind
//! `Arc<dyn ...>` instead; the application layer provides a typed wrapper that
//! implements `ApiPort` on top of it.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiError;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError>;
}
