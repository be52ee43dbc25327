//! Client configuration
//!
//! Values come from the environment with sensible local defaults. The
//! composition root may override individual fields (e.g. from CLI flags).

use std::time::Duration;

use anyhow::{Context, Result};
use rostering_domain::TenantId;
use url::Url;

/// Default REST root of a locally running rostering server.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/rest/";

/// Default request timeout in milliseconds (2 minutes)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

pub const API_URL_VAR: &str = "ROSTERING_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "ROSTERING_REQUEST_TIMEOUT_MS";
pub const TENANT_ID_VAR: &str = "ROSTERING_TENANT_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST root that request paths are resolved against
    pub base_url: Url,
    /// Applied by the transport; operations add no timeout of their own
    pub request_timeout: Duration,
    /// Tenant selected at startup
    pub tenant_id: TenantId,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = parse_base_url(&base_url)
            .with_context(|| format!("{API_URL_VAR} must be an absolute URL"))?;

        let request_timeout_ms = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{REQUEST_TIMEOUT_VAR} must be a number of milliseconds"))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        let tenant_id = match lookup(TENANT_ID_VAR) {
            Some(raw) => raw
                .parse::<TenantId>()
                .with_context(|| format!("{TENANT_ID_VAR} must be a numeric tenant id"))?,
            None => TenantId::new(0),
        };

        Ok(Self {
            base_url,
            request_timeout: Duration::from_millis(request_timeout_ms),
            tenant_id,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_tenant_id(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = tenant_id;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            tenant_id: TenantId::new(0),
        }
    }
}

/// Parse the API root, ensuring a trailing slash so relative request paths
/// nest under it instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).with_context(|| format!("invalid URL: {raw}"))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("URL cannot be used as a base: {raw}");
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url.as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn reads_all_keys() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, "https://roster.example.com/api/rest"),
            (REQUEST_TIMEOUT_VAR, "5000"),
            (TENANT_ID_VAR, "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "https://roster.example.com/api/rest/");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.tenant_id, TenantId::new(3));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(ClientConfig::from_lookup(lookup_from(&[(API_URL_VAR, "not a url")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(REQUEST_TIMEOUT_VAR, "soon")])).is_err());
        assert!(ClientConfig::from_lookup(lookup_from(&[(TENANT_ID_VAR, "acme")])).is_err());
    }

    #[test]
    fn overrides_replace_single_fields() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.5:9000/rest")
            .unwrap()
            .with_tenant_id(TenantId::new(7));

        assert_eq!(config.base_url.as_str(), "http://10.0.0.5:9000/rest/");
        assert_eq!(config.tenant_id, TenantId::new(7));
    }
}
