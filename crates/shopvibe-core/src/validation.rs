//! # Validation Module
//!
//! Checks applied to products as they cross from the remote feed into the
//! core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decoding (serde)                                             │
//! │  ├── Field presence and JSON types                                     │
//! │  └── Whole-feed failure if the body is not a product array             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Per-product value rules (title, price, rating)                    │
//! │  └── Id uniqueness across the feed                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Core: reducer & filters assume well-formed products                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopvibe_core::validation::{validate_price, validate_title};
//!
//! assert!(validate_title("Gold Ring").is_ok());
//! assert!(validate_price(-1.0).is_err());
//! ```

use std::collections::HashSet;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Product, ProductId, Rating};

/// Highest possible average rating.
pub const MAX_RATING: f64 = 5.0;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is allowed)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates a rating.
///
/// ## Rules
/// - `rate` must be finite and within 0..=5
pub fn validate_rating(rating: &Rating) -> ValidationResult<()> {
    if !rating.rate.is_finite() || !(0.0..=MAX_RATING).contains(&rating.rate) {
        return Err(ValidationError::OutOfRange {
            field: "rating.rate".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }

    Ok(())
}

/// Parses a product id typed by the user.
///
/// ## Example
/// ```rust
/// use shopvibe_core::validation::parse_product_id;
///
/// assert_eq!(parse_product_id(" 12 ").unwrap(), 12);
/// assert!(parse_product_id("twelve").is_err());
/// ```
pub fn parse_product_id(input: &str) -> ValidationResult<ProductId> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    input
        .parse::<ProductId>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates every value rule on a single product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_title(&product.title)?;
    validate_price(product.price)?;
    validate_rating(&product.rating)?;
    Ok(())
}

/// Splits a feed into the products that pass validation and the rejects.
///
/// A product whose id was already accepted earlier in the feed is rejected
/// as a duplicate, so the first occurrence wins. Order of accepted products
/// follows the feed.
pub fn sanitize_products(
    products: Vec<Product>,
) -> (Vec<Product>, Vec<(ProductId, ValidationError)>) {
    let mut seen: HashSet<ProductId> = HashSet::new();
    let mut accepted = Vec::with_capacity(products.len());
    let mut rejected = Vec::new();

    for product in products {
        if let Err(err) = validate_product(&product) {
            rejected.push((product.id, err));
            continue;
        }

        if !seen.insert(product.id) {
            rejected.push((
                product.id,
                ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.to_string(),
                },
            ));
            continue;
        }

        accepted.push(product);
    }

    (accepted, rejected)
}

// =============================================================================
// Unit Tests
// =============================================================================
