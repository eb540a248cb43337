//! # Catalog Client
//!
//! One GET against the configured endpoint, decoded into products.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  fetch_products()                                                       │
//! │       │                                                                 │
//! │       ├── send GET ─────────── transport error ──► RequestFailed/Timeout │
//! │       │                                                                 │
//! │       ├── status check ─────── non-2xx ──────────► HttpStatus           │
//! │       │                                                                 │
//! │       ├── read body                                                     │
//! │       │                                                                 │
//! │       └── parse_products ───── not a product array ► DecodeFailed       │
//! │               │                                                         │
//! │               └── sanitize: drop invalid / duplicate ids (warn)         │
//! │                                                                         │
//! │  Fire once: no retry, no backoff. The caller decides what a failure     │
//! │  looks like to the user.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use shopvibe_core::validation::sanitize_products;
use shopvibe_core::Product;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Products from one successful fetch.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    /// Entries dropped by validation.
    pub rejected: usize,
    pub fetched_at: DateTime<Utc>,
}

/// HTTP client for the product feed.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout_secs: Option<u64>,
}

impl CatalogClient {
    /// Builds a client from validated configuration.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;

        Ok(CatalogClient {
            http,
            endpoint: config.endpoint_url()?,
            timeout_secs: config.request_timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches and decodes the product list.
    pub async fn fetch_products(&self) -> CatalogResult<CatalogSnapshot> {
        info!(endpoint = %self.endpoint, "Fetching product catalog");

        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Catalog request rejected");
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        debug!(bytes = body.len(), "Catalog body received");

        let (products, rejected) = decode_and_sanitize(&body)?;
        info!(
            products = products.len(),
            rejected, "Product catalog loaded"
        );

        Ok(CatalogSnapshot {
            products,
            rejected,
            fetched_at: Utc::now(),
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> CatalogError {
        match (err.is_timeout(), self.timeout_secs) {
            (true, Some(secs)) => CatalogError::Timeout(secs),
            _ => CatalogError::RequestFailed(err.to_string()),
        }
    }
}

/// Decodes a feed body into products, dropping entries that fail
/// validation.
///
/// The body must be a JSON array of product objects; anything else fails
/// the whole feed.
pub fn parse_products(body: &str) -> CatalogResult<Vec<Product>> {
    decode_and_sanitize(body).map(|(products, _)| products)
}

fn decode_and_sanitize(body: &str) -> CatalogResult<(Vec<Product>, usize)> {
    let decoded: Vec<Product> = serde_json::from_str(body)?;
    let (products, rejected) = sanitize_products(decoded);

    for (id, reason) in &rejected {
        warn!(product_id = id, %reason, "Dropping product from catalog");
    }

    Ok((products, rejected.len()))
}
