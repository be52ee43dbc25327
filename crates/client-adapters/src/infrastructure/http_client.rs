//! REST transport over reqwest

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use rostering_client_ports::outbound::{ApiError, RawApiPort};
use rostering_client_ports::ClientConfig;

/// JSON client for the rostering REST API
#[derive(Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: Url,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Resolve an API path under the base URL. Leading slashes are ignored so
    /// `/tenant/1/spot/` and `tenant/1/spot/` address the same resource.
    pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::HttpError {
                status: status.as_u16(),
                message: if text.trim().is_empty() {
                    status.canonical_reason().unwrap_or("Unknown status").to_string()
                } else {
                    text
                },
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl RawApiPort for HttpApiClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path)?;
        tracing::debug!(method = "GET", %url, "Sending request");
        self.send(self.client.get(url)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url_for(path)?;
        tracing::debug!(method = "POST", %url, "Sending request");
        self.send(self.client.post(url).json(body)).await
    }

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path)?;
        tracing::debug!(method = "DELETE", %url, "Sending request");
        self.send(self.client.delete(url)).await
    }
}
