//! HTTP client for the remote product listing endpoint.
//!
//! Issues a single GET per fetch. There is no retry: a failed fetch is
//! reported and the poll cycle is skipped.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::dto::CatalogResponse;
use super::settings::CatalogConfig;
use crate::domain::Product;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::catalog::CatalogFetcher;

/// Catalog client backed by `reqwest`.
pub struct CatalogClient {
    http: HttpClient,
    name: String,
    url: String,
    query: Vec<(String, String)>,
    raw_dump_path: Option<PathBuf>,
}

impl CatalogClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error if a header name or value is invalid or the
    /// HTTP client cannot be constructed.
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        let headers = build_headers(config)?;
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "catalog",
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            name: config.name.clone(),
            url: config.url.clone(),
            query: config.query_pairs(),
            raw_dump_path: config.raw_dump_path.as_ref().map(PathBuf::from),
        })
    }

    async fn fetch_payload(&self) -> Result<Value> {
        debug!(url = %self.url, "Fetching catalog");

        let response = self
            .http
            .get(&self.url)
            .query(&self.query)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "catalog responded with HTTP {status}"
            )));
        }

        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body)
            .map_err(|e| Error::RemoteFormat(format!("body is not JSON: {e}")))
    }

    fn dump_raw(&self, payload: &Value) {
        let Some(path) = &self.raw_dump_path else {
            return;
        };
        let result = serde_json::to_string_pretty(payload)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "Failed to write raw catalog dump");
        }
    }
}

#[async_trait]
impl CatalogFetcher for CatalogClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let payload = self.fetch_payload().await?;

        let has_data = payload
            .get("data")
            .and_then(Value::as_array)
            .is_some_and(|data| !data.is_empty());
        if has_data {
            self.dump_raw(&payload);
        }

        let response: CatalogResponse = serde_json::from_value(payload)
            .map_err(|e| Error::RemoteFormat(e.to_string()))?;

        let products = response
            .data
            .into_iter()
            .map(Product::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        info!(
            catalog = %self.name,
            count = products.len(),
            available = products.iter().filter(|p| p.is_available()).count(),
            "Fetched catalog"
        );

        Ok(products)
    }

    fn catalog_name(&self) -> &str {
        &self.name
    }
}

fn build_headers(config: &CatalogConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(config.headers.len());
    for (name, value) in &config.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidValue {
                field: "catalog.headers",
                reason: format!("{name}: {e}"),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidValue {
            field: "catalog.headers",
            reason: format!("{name}: {e}"),
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

fn classify(err: reqwest::Error) -> Error {
    if err.is_decode() {
        Error::RemoteFormat(err.to_string())
    } else if err.is_timeout() {
        Error::Network(format!("request timed out: {err}"))
    } else {
        Error::Network(err.to_string())
    }
}
