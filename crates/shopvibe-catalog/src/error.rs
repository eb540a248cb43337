//! # Catalog Error Types
//!
//! Error types for loading configuration and fetching the product feed.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  RequestFailed  │  │  HttpStatus             │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  DecodeFailed           │ │
//! │  │  ConfigLoad...  │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant ends up in the same place for the user: the catalog is shown
//! as failed and empty. The categories exist for logging.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Endpoint is not a usable http(s) URL.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the body could not be read.
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),

    /// Configured request timeout elapsed.
    #[error("Catalog request timed out after {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Server answered with a non-success status.
    #[error("Catalog responded with HTTP {status}")]
    HttpStatus { status: u16 },

    /// Body was not a JSON array of products.
    #[error("Failed to decode product list: {0}")]
    DecodeFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DecodeFailed(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ConfigLoadFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogError {
    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidConfig(_)
                | CatalogError::InvalidUrl(_)
                | CatalogError::ConfigLoadFailed(_)
        )
    }

    /// Returns true if the request never produced a usable response.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            CatalogError::RequestFailed(_) | CatalogError::Timeout(_)
        )
    }
}
