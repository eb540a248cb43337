//! # Catalog Configuration
//!
//! Where to fetch products from and how.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPVIBE_CATALOG_URL=https://fakestoreapi.com/products             │
//! │     SHOPVIBE_REQUEST_TIMEOUT_SECS=10                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $SHOPVIBE_CONFIG, or                                               │
//! │     ~/.config/shopvibe/catalog.toml (Linux)                            │
//! │     ~/Library/Application Support/com.shopvibe.shopvibe/catalog.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     fakestoreapi.com, no timeout                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! endpoint = "https://fakestoreapi.com/products"
//! request_timeout_secs = 10   # omit for no timeout
//! user_agent = "shopvibe/0.1"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Environment variable overriding the endpoint.
pub const ENV_CATALOG_URL: &str = "SHOPVIBE_CATALOG_URL";
/// Environment variable overriding the request timeout.
pub const ENV_REQUEST_TIMEOUT: &str = "SHOPVIBE_REQUEST_TIMEOUT_SECS";
/// Environment variable pointing at a config file.
pub const ENV_CONFIG_PATH: &str = "SHOPVIBE_CONFIG";

/// Settings for the product feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// URL returning a JSON array of products.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Give up on the request after this many seconds.
    /// `None` means wait for as long as the transport allows.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// User-Agent header sent with the request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_user_agent() -> String {
    concat!("shopvibe/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from file (if present) and environment.
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads a TOML config file. No environment overrides are applied.
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        self.endpoint_url()?;

        if self.request_timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Parses the endpoint, accepting only http and https.
    pub fn endpoint_url(&self) -> CatalogResult<Url> {
        let url = Url::parse(&self.endpoint)?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(CatalogError::InvalidUrl(format!(
                "Catalog URL must use http or https, got: {}",
                other
            ))),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// [`CatalogConfig::load`]).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_CATALOG_URL) {
            debug!(url = %url, "Overriding catalog URL from environment");
            self.endpoint = url;
        }

        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT) {
            match secs.parse::<u64>() {
                Ok(s) => {
                    debug!(timeout_secs = s, "Overriding request timeout from environment");
                    self.request_timeout_secs = Some(s);
                }
                Err(_) => warn!(value = %secs, "Ignoring invalid request timeout in environment"),
            }
        }
    }

    /// Returns the config file path: `$SHOPVIBE_CONFIG` or the platform
    /// config directory.
    fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(ENV_CONFIG_PATH) {
            return Some(PathBuf::from(path));
        }

        directories::ProjectDirs::from("com", "shopvibe", "shopvibe")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}
