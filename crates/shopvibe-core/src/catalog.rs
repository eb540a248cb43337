//! # Catalog View
//!
//! The browsing side of a session: the product list once it arrives, the
//! categories derived from it, the current filter criteria, and whether the
//! fetch is still pending or failed.
//!
//! ## Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  load_products(list)  ┌─────────┐                        │
//! │   │ Loading  │──────────────────────►│  Ready  │                        │
//! │   └────┬─────┘                       └─────────┘                        │
//! │        │ fail(message)                                                  │
//! │        ▼                                                                │
//! │   ┌──────────┐  products = [], categories = ["All"], visible = []       │
//! │   │  Failed  │  (filters still accept input but have nothing to do)    │
//! │   └──────────┘                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The visible list is never cached: `visible()` re-runs the filter against
//! whatever products and criteria are current.

use serde::Serialize;

use crate::filter::{categories, FilterCriteria};
use crate::types::{Product, ProductId};

/// Where the catalog fetch stands.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Products plus the filter state applied to them.
#[derive(Debug, Clone)]
pub struct CatalogView {
    products: Vec<Product>,
    categories: Vec<String>,
    criteria: FilterCriteria,
    status: CatalogStatus,
}

impl CatalogView {
    /// Creates an empty view waiting for the fetch to finish.
    pub fn new() -> Self {
        CatalogView {
            products: Vec::new(),
            categories: categories(&[]),
            criteria: FilterCriteria::default(),
            status: CatalogStatus::Loading,
        }
    }

    /// Marks a (re)fetch as in progress. Products already loaded stay visible.
    pub fn begin_loading(&mut self) {
        self.status = CatalogStatus::Loading;
    }

    /// Replaces the product list and recomputes the category list.
    ///
    /// The current criteria are kept, even when the selected category no
    /// longer exists in the new list.
    pub fn load_products(&mut self, products: Vec<Product>) {
        self.categories = categories(&products);
        self.products = products;
        self.status = CatalogStatus::Ready;
    }

    /// Records a fetch failure. The view becomes empty.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.products.clear();
        self.categories = categories(&[]);
        self.status = CatalogStatus::Failed(message.into());
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.criteria.category = category.into();
    }

    #[inline]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[inline]
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// `"All"` followed by the distinct categories of the loaded products.
    #[inline]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Products passing the current criteria, in catalog order.
    pub fn visible(&self) -> Vec<&Product> {
        self.criteria.apply(&self.products)
    }

    /// Looks a product up by id, ignoring the filters.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// True when the catalog loaded but nothing matches the criteria.
    pub fn no_matches(&self) -> bool {
        self.status == CatalogStatus::Ready && self.visible().is_empty()
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        CatalogView::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
