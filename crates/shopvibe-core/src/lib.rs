//! # shopvibe-core: Pure State Model for ShopVibe
//!
//! This crate is the **heart** of ShopVibe. It holds the session state
//! (theme and cart), the reducer that turns actions into new state, and the
//! product filter, all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopVibe Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (apps/shopvibe)                    │   │
//! │  │    list ──► search ──► category ──► add/remove ──► cart         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch / read                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopvibe-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   state   │  │   store   │  │  filter   │  │  catalog  │  │   │
//! │  │   │  reducer  │  │ dispatch  │  │  visible  │  │   view    │  │   │
//! │  │   │  Action   │  │ snapshot  │  │categories │  │  status   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ Vec<Product> | failure                 │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              shopvibe-catalog (HTTP product feed)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, Theme)
//! - [`state`] - AppState, Action and the reducer
//! - [`store`] - Owned holder of one session's state
//! - [`filter`] - Search/category filtering and category derivation
//! - [`catalog`] - Product list + filter criteria + load status
//! - [`money`] - Cents-rounded display amounts
//! - [`validation`] - Checks for products arriving from the feed
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use shopvibe_core::filter::visible;
//! use shopvibe_core::state::Action;
//! use shopvibe_core::store::Store;
//! use shopvibe_core::{Product, Rating};
//!
//! let products = vec![Product {
//!     id: 1,
//!     title: "Fjallraven Backpack".to_string(),
//!     price: 10.0,
//!     description: String::new(),
//!     category: "men's clothing".to_string(),
//!     image: String::new(),
//!     rating: Rating { rate: 3.9, count: 120 },
//! }];
//!
//! let hits = visible(&products, "fjall", "All");
//!
//! let mut store = Store::new();
//! store.dispatch(Action::AddToCart(hits[0].clone()));
//! store.dispatch(Action::AddToCart(hits[0].clone()));
//!
//! assert_eq!(store.state().unit_count(), 2);
//! assert_eq!(store.totals().total_display.to_string(), "$20.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod filter;
pub mod money;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogStatus, CatalogView};
pub use error::{ValidationError, ValidationResult};
pub use filter::{categories, visible, FilterCriteria, ALL_CATEGORIES};
pub use money::Money;
pub use state::{apply, Action, AppState, CartTotals};
pub use store::Store;
pub use types::*;
