//! # Session
//!
//! One browsing session: a store for theme and cart, a catalog view for the
//! product list and filters, and an id for log correlation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session ─┬─ Store ────────── AppState { theme, cart_items }            │
//! │           │                                                             │
//! │           └─ CatalogView ──── products, categories, criteria, status    │
//! │                                                                         │
//! │  The two halves never talk to each other. `add_product` is the only     │
//! │  place that reads one (catalog lookup) to feed the other (AddToCart).   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use shopvibe_catalog::{CatalogResult, CatalogSnapshot};
use shopvibe_core::{Action, AppState, CatalogView, Product, ProductId, Store};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Message shown when the product list could not be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data from API.";

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    store: Store,
    catalog: CatalogView,
}

impl Session {
    pub fn new() -> Self {
        let session = Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            store: Store::new(),
            catalog: CatalogView::new(),
        };
        info!(session_id = %session.id, "Session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    #[inline]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[inline]
    pub fn catalog(&self) -> &CatalogView {
        &self.catalog
    }

    #[inline]
    pub fn catalog_mut(&mut self) -> &mut CatalogView {
        &mut self.catalog
    }

    /// Routes an action to the store.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        debug!(session_id = %self.id, ?action, "Dispatching action");
        self.store.dispatch(action)
    }

    /// Feeds the outcome of the catalog fetch into the view.
    ///
    /// On failure the view is emptied and shows [`FETCH_FAILED_MESSAGE`]; the
    /// detailed error only goes to the log.
    pub fn apply_fetch(&mut self, result: CatalogResult<CatalogSnapshot>) {
        match result {
            Ok(snapshot) => {
                info!(
                    session_id = %self.id,
                    products = snapshot.products.len(),
                    rejected = snapshot.rejected,
                    fetched_at = %snapshot.fetched_at,
                    "Catalog ready"
                );
                self.catalog.load_products(snapshot.products);
            }
            Err(e) => {
                error!(session_id = %self.id, error = %e, "Catalog fetch failed");
                self.catalog.fail(FETCH_FAILED_MESSAGE);
            }
        }
    }

    /// Adds one unit of a catalog product to the cart.
    pub fn add_product(&mut self, id: ProductId) -> AppResult<&Product> {
        let product = self
            .catalog
            .product(id)
            .ok_or(AppError::UnknownProduct(id))?;

        let action = Action::AddToCart(product.clone());
        debug!(session_id = %self.id, ?action, "Dispatching action");
        self.store.dispatch(action);

        self.catalog.product(id).ok_or(AppError::UnknownProduct(id))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopvibe_catalog::CatalogError;
    use shopvibe_core::{CatalogStatus, Rating, Theme};

    fn test_product(id: ProductId, price: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price,
            description: String::new(),
            category: "electronics".to_string(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    fn snapshot(products: Vec<Product>) -> CatalogSnapshot {
        CatalogSnapshot {
            products,
            rejected: 0,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_session_starts_clean() {
        let session = Session::new();
        assert_eq!(session.state(), &AppState::new());
        assert_eq!(session.catalog().status(), &CatalogStatus::Loading);
        assert!(session.started_at() <= Utc::now());
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let mut a = Session::new();
        let b = Session::new();

        a.dispatch(Action::ToggleTheme);

        assert_ne!(a.id(), b.id());
        assert_eq!(a.state().theme, Theme::Dark);
        assert_eq!(b.state().theme, Theme::Light);
    }

    #[test]
    fn test_apply_fetch_success() {
        let mut session = Session::new();
        session.apply_fetch(Ok(snapshot(vec![test_product(1, 2.0)])));

        assert_eq!(session.catalog().status(), &CatalogStatus::Ready);
        assert_eq!(session.catalog().visible().len(), 1);
    }

    #[test]
    fn test_apply_fetch_failure() {
        let mut session = Session::new();
        session.apply_fetch(Err(CatalogError::Timeout(5)));

        assert_eq!(
            session.catalog().status(),
            &CatalogStatus::Failed(FETCH_FAILED_MESSAGE.to_string())
        );
        assert!(session.catalog().visible().is_empty());
        assert_eq!(session.catalog().categories(), &["All"]);
    }

    #[test]
    fn test_add_product_from_catalog() {
        let mut session = Session::new();
        session.apply_fetch(Ok(snapshot(vec![test_product(1, 10.0), test_product(2, 5.5)])));

        session.add_product(1).unwrap();
        session.add_product(1).unwrap();
        session.add_product(2).unwrap();

        assert_eq!(session.state().unit_count(), 3);
        assert_eq!(session.store().totals().total_display.to_string(), "$25.50");
    }

    #[test]
    fn test_add_unknown_product_dispatches_nothing() {
        let mut session = Session::new();
        session.apply_fetch(Ok(snapshot(vec![test_product(1, 10.0)])));

        let err = session.add_product(99).unwrap_err();
        assert!(matches!(err, AppError::UnknownProduct(99)));
        assert!(session.state().is_cart_empty());
        assert_eq!(session.store().dispatched(), 0);
    }
}
