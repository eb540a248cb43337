//! # shopvibe-catalog: Product Feed for ShopVibe
//!
//! Loads the catalog configuration, performs the single product-list fetch,
//! and hands the core a validated `Vec<Product>` (or a typed error).
//!
//! ## Modules
//! - [`config`] - Endpoint and timeout settings (TOML + environment)
//! - [`client`] - HTTP fetch and feed decoding
//! - [`error`] - Catalog error types
//!
//! ## Usage
//! ```rust,no_run
//! use shopvibe_catalog::{CatalogClient, CatalogConfig};
//!
//! # async fn run() -> shopvibe_catalog::CatalogResult<()> {
//! let config = CatalogConfig::load(None)?;
//! let client = CatalogClient::new(&config)?;
//! let snapshot = client.fetch_products().await?;
//! println!("{} products", snapshot.products.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{parse_products, CatalogClient, CatalogSnapshot};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
