//! # Product Filter
//!
//! Derives the visible subset of the catalog from the search box and the
//! category dropdown, and the dropdown's options from the catalog.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product passes  ⇔  title matches  AND  category matches                │
//! │                                                                         │
//! │  title matches     lowercase(title) contains lowercase(search)          │
//! │                    (empty search always matches)                        │
//! │                                                                         │
//! │  category matches  category == "All"  OR  product.category == category  │
//! │                    (exact, case-sensitive)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are stable: output order follows input order.

use std::collections::HashSet;

use serde::Serialize;

use crate::types::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

// =============================================================================
// Filter Criteria
// =============================================================================

/// The current search text and category selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, category: impl Into<String>) -> Self {
        FilterCriteria {
            search_term: search_term.into(),
            category: category.into(),
        }
    }

    /// Applies these criteria to a product list.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        visible(products, &self.search_term, &self.category)
    }
}

// =============================================================================
// Filter Functions
// =============================================================================

/// Returns the products whose title contains `search_term` (ignoring case)
/// and whose category equals `category`, unless `category` is `"All"`.
///
/// ## Example
/// ```rust
/// use shopvibe_core::filter::visible;
/// # use shopvibe_core::{Product, Rating};
/// # let product = |id, title: &str, category: &str| Product {
/// #     id, title: title.into(), price: 1.0, description: String::new(),
/// #     category: category.into(), image: String::new(), rating: Rating::default(),
/// # };
/// let products = vec![
///     product(1, "Fjallraven Backpack", "men's clothing"),
///     product(2, "Gold Ring", "jewelery"),
/// ];
///
/// let hits = visible(&products, "FJALL", "All");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 1);
///
/// assert!(visible(&products, "", "electronics").is_empty());
/// ```
pub fn visible<'a>(products: &'a [Product], search_term: &str, category: &str) -> Vec<&'a Product> {
    let needle = search_term.to_lowercase();
    let any_category = category == ALL_CATEGORIES;

    products
        .iter()
        .filter(|p| any_category || p.category == category)
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .collect()
}

/// Returns `"All"` followed by each distinct category in first-seen order.
///
/// ## Example
/// ```rust
/// use shopvibe_core::filter::categories;
/// # use shopvibe_core::{Product, Rating};
/// # let product = |id, category: &str| Product {
/// #     id, title: String::new(), price: 1.0, description: String::new(),
/// #     category: category.into(), image: String::new(), rating: Rating::default(),
/// # };
/// let products = vec![
///     product(1, "electronics"),
///     product(2, "jewelery"),
///     product(3, "electronics"),
/// ];
///
/// assert_eq!(categories(&products), vec!["All", "electronics", "jewelery"]);
/// assert_eq!(categories(&[]), vec!["All"]);
/// ```
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut result = vec![ALL_CATEGORIES.to_string()];

    for product in products {
        if seen.insert(product.category.as_str()) {
            result.push(product.category.clone());
        }
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn test_product(id: u32, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 10.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            test_product(1, "Fjallraven Backpack", "men's clothing"),
            test_product(2, "Mens Casual Premium Slim Fit T-Shirts", "men's clothing"),
            test_product(3, "John Hardy Gold Bracelet", "jewelery"),
            test_product(4, "WD 2TB External Hard Drive", "electronics"),
            test_product(5, "Solid Gold Petite Micropave", "jewelery"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(visible(&[], "", ALL_CATEGORIES).is_empty());
        assert!(visible(&[], "gold", "jewelery").is_empty());
    }

    #[test]
    fn test_no_filters_returns_everything_in_order() {
        let products = catalog();
        assert_eq!(ids(&visible(&products, "", ALL_CATEGORIES)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        assert_eq!(ids(&visible(&products, "FJALL", ALL_CATEGORIES)), vec![1]);
        assert_eq!(ids(&visible(&products, "gOlD", ALL_CATEGORIES)), vec![3, 5]);
    }

    #[test]
    fn test_search_matches_substring_anywhere() {
        let products = catalog();
        assert_eq!(ids(&visible(&products, "hard", ALL_CATEGORIES)), vec![3, 4]);
    }

    #[test]
    fn test_category_is_exact_and_case_sensitive() {
        let products = catalog();
        assert_eq!(ids(&visible(&products, "", "jewelery")), vec![3, 5]);
        assert!(visible(&products, "", "Jewelery").is_empty());
        assert!(visible(&products, "", "jewel").is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let products = catalog();
        assert_eq!(ids(&visible(&products, "hard", "electronics")), vec![4]);
        assert!(visible(&products, "backpack", "jewelery").is_empty());
    }

    #[test]
    fn test_search_does_not_look_at_description_or_category() {
        let products = catalog();
        assert!(visible(&products, "clothing", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_criteria_default_and_apply() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.search_term, "");
        assert_eq!(criteria.category, ALL_CATEGORIES);

        let products = catalog();
        let criteria = FilterCriteria::new("slim", "men's clothing");
        assert_eq!(ids(&criteria.apply(&products)), vec![2]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let products = vec![
            test_product(1, "a", "electronics"),
            test_product(2, "b", "jewelery"),
            test_product(3, "c", "electronics"),
        ];
        assert_eq!(categories(&products), vec!["All", "electronics", "jewelery"]);
    }

    #[test]
    fn test_categories_distinct_by_exact_string() {
        let products = vec![
            test_product(1, "a", "Electronics"),
            test_product(2, "b", "electronics"),
        ];
        assert_eq!(
            categories(&products),
            vec!["All", "Electronics", "electronics"]
        );
    }

    #[test]
    fn test_categories_of_empty_list() {
        assert_eq!(categories(&[]), vec![ALL_CATEGORIES]);
    }
}
