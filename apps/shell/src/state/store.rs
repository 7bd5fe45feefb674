//! # Store
//!
//! The explicit store object every consumer receives: one read surface
//! (snapshots), one write surface (dispatch), one notification surface
//! (a watch channel of snapshots).
//!
//! ## Thread Safety
//! The current snapshot sits behind `Mutex<Arc<AppState>>`:
//! 1. The mutex makes dispatch single-writer — one action is applied at a
//!    time, to completion, before the next is accepted
//! 2. The `Arc` makes reads cheap and keeps prior snapshots valid for
//!    observers still holding them (the transition never mutates in place)
//!
//! Reads may run concurrently with each other; they only clone the `Arc`.

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::debug;

use olala_core::{transition, Action, AppState};

/// The application store.
///
/// ## Invariants
/// - Every state the store has ever exposed is immutable; `dispatch` swaps
///   in a fresh aggregate and never edits a published one
/// - The watch channel always carries the latest snapshot, in dispatch order
#[derive(Debug)]
pub struct Store {
    /// Current snapshot. The mutex serializes writers.
    state: Mutex<Arc<AppState>>,

    /// Publishes each new snapshot to subscribers.
    tx: watch::Sender<Arc<AppState>>,
}

impl Store {
    /// Creates a store seeded with the given initial state.
    pub fn new(initial: AppState) -> Self {
        let snapshot = Arc::new(initial);
        let (tx, _rx) = watch::channel(Arc::clone(&snapshot));
        Store {
            state: Mutex::new(snapshot),
            tx,
        }
    }

    /// Applies an action and returns the resulting snapshot.
    ///
    /// The single mutation entry point. The lock is held across the
    /// transition and the publish, so subscribers observe snapshots in
    /// dispatch order.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        let mut guard = self.state.lock().expect("Store mutex poisoned");
        debug!(action = action.kind(), "dispatch");

        let next = Arc::new(transition(&guard, action));
        *guard = Arc::clone(&next);
        self.tx.send_replace(Arc::clone(&next));
        next
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state.lock().expect("Store mutex poisoned"))
    }

    /// Executes a function with read access to the current snapshot.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = store.with_state(|s| views::cart_item_count(s));
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        f(&self.snapshot())
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts at the current snapshot and is woken on every
    /// dispatch. Observers read state; they never write through this.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(AppState::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olala_core::views;
    use olala_core::Product;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price_cents: 5000,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec!["https://picsum.photos/seed/p/800/600".to_string()],
            category: "Software".to_string(),
            tags: vec![],
            is_featured: false,
            is_live: true,
            stock: 10,
            digital_file: None,
        }
    }

    #[test]
    fn test_dispatch_replaces_snapshot() {
        let store = Store::default();
        let before = store.snapshot();

        let after = store.dispatch(Action::AddToCart(test_product("p-1")));

        assert!(before.cart.is_empty());
        assert_eq!(after.cart.len(), 1);
        assert_eq!(store.snapshot().cart.len(), 1);
    }

    #[test]
    fn test_held_snapshot_survives_later_dispatches() {
        let store = Store::default();
        let held = store.dispatch(Action::AddToCart(test_product("p-1")));

        store.dispatch(Action::AddToCart(test_product("p-1")));
        store.dispatch(Action::ClearCart);

        // The observer's snapshot still shows one line, quantity 1.
        assert_eq!(held.cart.len(), 1);
        assert_eq!(held.cart[0].quantity, 1);
        assert!(store.snapshot().cart.is_empty());
    }

    #[tokio::test]
    async fn test_subscribers_see_each_new_snapshot() {
        let store = Store::default();
        let mut rx = store.subscribe();

        assert_eq!(views::cart_item_count(&rx.borrow()), 0);

        store.dispatch(Action::AddToCart(test_product("p-1")));
        rx.changed().await.expect("store dropped");
        assert_eq!(views::cart_item_count(&rx.borrow_and_update()), 1);

        store.dispatch(Action::ClearCart);
        rx.changed().await.expect("store dropped");
        assert_eq!(views::cart_item_count(&rx.borrow_and_update()), 0);
    }
}
