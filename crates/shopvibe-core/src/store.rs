//! # Store
//!
//! Owns the single [`AppState`] of a session and routes every action through
//! the reducer.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Store Per Session                                │
//! │                                                                         │
//! │  Session (composition root)                                            │
//! │     │ owns                                                              │
//! │     ▼                                                                   │
//! │  Store ── dispatch(action) ──► state::apply(&state, action) ──► state'  │
//! │     │                                                                   │
//! │     └── state() ──► &AppState (read-only snapshot for rendering)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no process-wide store. Whoever creates a `Store` decides its
//! lifetime, and `dispatch` takes `&mut self`, so the reducer is the only
//! writer and actions apply strictly in call order.

use crate::state::{apply, Action, AppState, CartTotals};

/// Holder of the current state.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
    dispatched: u64,
}

impl Store {
    /// Creates a store holding the initial state (light theme, empty cart).
    pub fn new() -> Self {
        Store::default()
    }

    /// Creates a store starting from an existing state.
    pub fn with_state(state: AppState) -> Self {
        Store {
            state,
            dispatched: 0,
        }
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies an action and returns the new state.
    ///
    /// ## Example
    /// ```rust
    /// use shopvibe_core::state::Action;
    /// use shopvibe_core::store::Store;
    /// use shopvibe_core::Theme;
    ///
    /// let mut store = Store::new();
    /// store.dispatch(Action::ToggleTheme);
    /// assert_eq!(store.state().theme, Theme::Dark);
    /// ```
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        self.state = apply(&self.state, action);
        self.dispatched += 1;
        &self.state
    }

    /// Number of actions applied since the store was created.
    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Convenience for the cart summary of the current state.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.state)
    }

    /// Consumes the store, returning its final state.
    pub fn into_state(self) -> AppState {
        self.state
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
