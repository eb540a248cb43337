//! # Application State & Reducer
//!
//! The state model behind the store: what the session remembers (theme and
//! cart), the actions that change it, and the pure reducer that maps one
//! to the other.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reducer Transitions                                  │
//! │                                                                         │
//! │  Action                   Theme            Cart Items                   │
//! │  ──────                   ─────            ──────────                   │
//! │                                                                         │
//! │  ToggleTheme ───────────► light ⇄ dark     (untouched)                  │
//! │                                                                         │
//! │  AddToCart(p) ──────────► (untouched)      p.id present? qty += 1       │
//! │                                            else push {p, qty: 1}        │
//! │                                                                         │
//! │  RemoveFromCart(id) ────► (untouched)      drop item with id (if any)   │
//! │                                                                         │
//! │  ClearCart ─────────────► (untouched)      []                           │
//! │                                                                         │
//! │  Unrecognized ──────────► (untouched)      (untouched)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one item per product id
//! - Items stay in first-added order
//! - Every quantity is >= 1
//! - The input state is never modified; `apply` always builds a new value

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartItem, Product, ProductId, Theme};

// =============================================================================
// App State
// =============================================================================

/// Everything the store holds for one browsing session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub theme: Theme,

    /// Cart lines in first-added order, unique by product id.
    pub cart_items: Vec<CartItem>,
}

impl AppState {
    /// The state every session starts from: light theme, empty cart.
    pub fn new() -> Self {
        AppState::default()
    }

    /// Finds the cart line for a product id.
    pub fn cart_item(&self, id: ProductId) -> Option<&CartItem> {
        self.cart_items.iter().find(|item| item.id() == id)
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.cart_items.len()
    }

    /// Returns the total number of units across all lines.
    ///
    /// This is the figure shown on the cart badge.
    pub fn unit_count(&self) -> u64 {
        self.cart_items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Sum of price × quantity over the cart, unrounded.
    pub fn total_price(&self) -> f64 {
        self.cart_items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_cart_empty(&self) -> bool {
        self.cart_items.is_empty()
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A discrete request to change [`AppState`].
///
/// ## Wire Form
/// Adjacently tagged, matching what a web frontend dispatches:
/// ```json
/// { "type": "ADD_TO_CART", "payload": { "id": 1, "title": "...", ... } }
/// { "type": "REMOVE_FROM_CART", "payload": 1 }
/// { "type": "TOGGLE_THEME" }
/// ```
/// Any other `type` decodes to [`Action::Unrecognized`] whatever its payload,
/// and the reducer ignores it. A known `type` with a payload of the wrong
/// shape is a decode error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    ToggleTheme,
    AddToCart(Product),
    RemoveFromCart(ProductId),
    ClearCart,
    /// An action type this version does not know about.
    Unrecognized,
}

/// Envelope read before the payload is interpreted.
#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawAction::deserialize(deserializer)?;
        let payload = raw.payload.unwrap_or(Value::Null);

        let action = match raw.kind.as_str() {
            "TOGGLE_THEME" => Action::ToggleTheme,
            "CLEAR_CART" => Action::ClearCart,
            "ADD_TO_CART" => {
                Action::AddToCart(serde_json::from_value(payload).map_err(de::Error::custom)?)
            }
            "REMOVE_FROM_CART" => {
                Action::RemoveFromCart(serde_json::from_value(payload).map_err(de::Error::custom)?)
            }
            _ => Action::Unrecognized,
        };

        Ok(action)
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies one action to a state and returns the resulting state.
///
/// Pure and total: never fails, never touches `state`. Removing an id that
/// is not in the cart, and unrecognized actions, return an equal state.
///
/// ## Example
/// ```rust
/// use shopvibe_core::state::{apply, Action, AppState};
/// use shopvibe_core::Theme;
///
/// let state = AppState::new();
/// let next = apply(&state, Action::ToggleTheme);
///
/// assert_eq!(next.theme, Theme::Dark);
/// assert_eq!(state.theme, Theme::Light); // input untouched
/// ```
pub fn apply(state: &AppState, action: Action) -> AppState {
    match action {
        Action::ToggleTheme => AppState {
            theme: state.theme.toggled(),
            cart_items: state.cart_items.clone(),
        },
        Action::AddToCart(product) => AppState {
            theme: state.theme,
            cart_items: add_to_cart(&state.cart_items, product),
        },
        Action::RemoveFromCart(id) => AppState {
            theme: state.theme,
            cart_items: state
                .cart_items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        },
        Action::ClearCart => AppState {
            theme: state.theme,
            cart_items: Vec::new(),
        },
        Action::Unrecognized => state.clone(),
    }
}

/// Builds the item list after adding one unit of `product`.
///
/// An existing line keeps its stored fields and only gains one unit.
fn add_to_cart(items: &[CartItem], product: Product) -> Vec<CartItem> {
    if items.iter().any(|item| item.id() == product.id) {
        return items
            .iter()
            .map(|item| {
                if item.id() == product.id {
                    CartItem {
                        product: item.product.clone(),
                        quantity: item.quantity.saturating_add(1),
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
    }

    let mut next = items.to_vec();
    next.push(CartItem::from_product(product));
    next
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub unit_count: u64,
    /// Full-precision total.
    pub total_price: f64,
    /// `total_price` rounded to cents.
    pub total_display: Money,
}

impl From<&AppState> for CartTotals {
    fn from(state: &AppState) -> Self {
        let total_price = state.total_price();
        CartTotals {
            line_count: state.line_count(),
            unit_count: state.unit_count(),
            total_price,
            total_display: Money::from_decimal(total_price),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
