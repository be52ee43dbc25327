//! Typed API wrapper for application services.
//!
//! `ApiPort` has generic methods and is not object-safe, while the composition
//! root wants to hold the transport as `Arc<dyn RawApiPort>`. `Api` bridges the
//! two by doing the serde_json conversions on either side of the raw port.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use rostering_client_ports::outbound::{ApiError, ApiPort, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

#[async_trait]
impl ApiPort for Api {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        decode(value)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Send + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value =
            serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))?;
        let value = self.raw.post_json(path, &body_value).await?;
        decode(value)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.delete_json(path).await?;
        decode(value)
    }
}
