//! # Domain Types
//!
//! Core domain types used throughout ShopVibe.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │──►│  Product fields │   │  Light          │       │
//! │  │  title          │   │  (frozen copy)  │   │  Dark           │       │
//! │  │  price (f64)    │   │  quantity >= 1  │   └─────────────────┘       │
//! │  │  category       │   └─────────────────┘                             │
//! │  │  rating         │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! `Product` mirrors the fakestoreapi.com JSON object one-to-one, so the
//! feed decodes straight into it. `CartItem` serialises flat: the product
//! fields followed by `quantity`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// Product identifier as issued by the remote catalog.
pub type ProductId = u32;

// =============================================================================
// Rating
// =============================================================================

/// Customer rating attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,

    /// Number of ratings the average was computed from.
    pub count: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A product offered by the remote catalog.
///
/// Treated as read-only value data: the core never edits a product, it only
/// copies one into the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Display title, also the target of free-text search.
    pub title: String,

    /// Unit price as a decimal amount (non-negative).
    pub price: f64,

    pub description: String,

    /// Free-text classification, matched exactly by the category filter.
    pub category: String,

    /// Image URI.
    pub image: String,

    pub rating: Rating,
}

impl Product {
    /// Returns the price rounded to cents, for display.
    #[inline]
    pub fn display_price(&self) -> Money {
        Money::from_decimal(self.price)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart: a frozen copy of the product plus a quantity.
///
/// ## Price Freezing
/// The product fields are captured when the item is first added. Adding the
/// same product again only bumps `quantity`; a newer price or title from the
/// catalog is not copied over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Always at least 1 while the item is in the cart.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a cart line for a product added for the first time.
    pub fn from_product(product: Product) -> Self {
        CartItem {
            product,
            quantity: 1,
        }
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Calculates the line total (unit price × quantity) at full precision.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// UI colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ValidationError::NotAllowed {
                field: "theme".to_string(),
                allowed: vec!["light".to_string(), "dark".to_string()],
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn backpack() -> Product {
        Product {
            id: 1,
            title: "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops".to_string(),
            price: 109.95,
            description: "Your perfect pack for everyday use".to_string(),
            category: "men's clothing".to_string(),
            image: "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg".to_string(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        }
    }

    #[test]
    fn test_product_decodes_from_feed_json() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product, backpack());
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let item = CartItem::from_product(backpack());
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["category"], "men's clothing");
        assert!(value.get("product").is_none());
    }

    #[test]
    fn test_line_total() {
        let mut item = CartItem::from_product(backpack());
        item.quantity = 3;
        assert!((item.line_total() - 329.85).abs() < 1e-9);
    }

    #[test]
    fn test_display_price_rounds_to_cents() {
        let mut product = backpack();
        product.price = 22.3;
        assert_eq!(product.display_price().to_string(), "$22.30");
    }

    #[test]
    fn test_theme_toggle_and_parse() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);

        assert_eq!(" DARK ".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
