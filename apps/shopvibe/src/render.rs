//! Plain-text rendering of the catalog and cart.

use std::fmt::Write;

use shopvibe_core::{AppState, CartItem, CartTotals, CatalogStatus, CatalogView, Product};

pub const NO_MATCHES: &str = "No products found for this search/category.";
pub const EMPTY_CART: &str = "Your cart is empty.";
pub const LOADING: &str = "Loading products...";

/// Prompt line: theme plus the cart badge (badge hidden when the cart is
/// empty).
pub fn prompt(state: &AppState) -> String {
    let units = state.unit_count();
    if units == 0 {
        format!("shopvibe [{}]> ", state.theme)
    } else {
        format!("shopvibe [{}] cart({})> ", state.theme, units)
    }
}

pub fn product_line(product: &Product) -> String {
    format!(
        "{:>4}  {:>9}  {}  [{}]  {:.1}/5 ({})",
        product.id,
        product.display_price().to_string(),
        product.title,
        product.category,
        product.rating.rate,
        product.rating.count
    )
}

/// Product list under the current filters.
pub fn catalog(view: &CatalogView) -> String {
    match view.status() {
        CatalogStatus::Loading => return LOADING.to_string(),
        CatalogStatus::Failed(message) => return message.clone(),
        CatalogStatus::Ready => {}
    }

    if view.no_matches() {
        return NO_MATCHES.to_string();
    }

    view.visible()
        .into_iter()
        .map(product_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Category list, current selection marked with `*`.
pub fn categories(view: &CatalogView) -> String {
    let selected = &view.criteria().category;
    view.categories()
        .iter()
        .map(|c| {
            let marker = if c == selected { '*' } else { ' ' };
            format!("{} {}", marker, c)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cart_line(item: &CartItem) -> String {
    format!(
        "{:>4}  {}  {} x {}",
        item.id(),
        item.product.title,
        item.product.display_price(),
        item.quantity
    )
}

pub fn cart(state: &AppState) -> String {
    if state.is_cart_empty() {
        return EMPTY_CART.to_string();
    }

    let totals = CartTotals::from(state);
    let mut out = String::new();
    let _ = writeln!(out, "Your Cart ({} items)", totals.unit_count);
    for item in &state.cart_items {
        let _ = writeln!(out, "{}", cart_line(item));
    }
    let _ = write!(out, "Total: {}", totals.total_display);
    out
}
