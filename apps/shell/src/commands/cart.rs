//! # Cart Commands
//!
//! Cart manipulation for the header badge and the checkout page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Placed  │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                        │
//! │                   update_cart_item  (checkout.rs)                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The product is snapshotted into the cart line at add-time, so the line
//! keeps displaying consistent data even if the admin edits the catalog
//! entry afterwards.

use serde::{Deserialize, Serialize};
use tracing::debug;

use olala_core::{validation, views, Action, AppState, CartItem, CoreError, MAX_CART_ITEMS};

use crate::error::ApiError;
use crate::state::Store;

/// Cart summary figures derived per response; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines in the cart.
    pub line_count: usize,

    /// Total quantity across lines (the header badge number).
    pub item_count: i64,

    /// Σ effective price × quantity, in cents.
    pub subtotal_cents: i64,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&AppState> for CartResponse {
    fn from(state: &AppState) -> Self {
        CartResponse {
            items: state.cart.clone(),
            totals: CartTotals {
                line_count: state.cart.len(),
                item_count: views::cart_item_count(state),
                subtotal_cents: views::cart_subtotal(state).cents(),
            },
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &Store) -> CartResponse {
    debug!("get_cart command");
    store.with_state(|s| CartResponse::from(s))
}

/// Adds a product to the cart by catalog id.
///
/// ## Behavior
/// - Unknown product: error (the container would no-op, but the UI needs
///   feedback, so the existence check happens here)
/// - Unlisted product: error
/// - Already in cart: the line's quantity increases by one
/// - Otherwise: a new line (quantity 1) is appended with a frozen snapshot
pub fn add_to_cart(store: &Store, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    let state = store.snapshot();
    let product = state
        .products
        .iter()
        .find(|p| p.id == product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    if !product.is_live {
        return Err(CoreError::ProductNotLive(product.name.clone()).into());
    }

    // New line? Guard the distinct-line cap first.
    if !state.cart.iter().any(|l| l.product.id == product.id) {
        validation::validate_cart_size(state.cart.len())
            .map_err(|_| ApiError::from(CoreError::CartTooLarge { max: MAX_CART_ITEMS }))?;
    }

    let next = store.dispatch(Action::AddToCart(product.clone()));
    Ok(CartResponse::from(next.as_ref()))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity <= 0: the line is removed (matches the trash behavior)
/// - Quantity above the per-line cap: error
/// - Line not present: error (feedback pre-check; the container would no-op)
pub fn update_cart_item(
    store: &Store,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, quantity, "update_cart_item command");

    if quantity > 0 {
        validation::validate_quantity(quantity)?;
    }

    let state = store.snapshot();
    if !state.cart.iter().any(|l| l.product.id == product_id) {
        return Err(ApiError::not_found("Cart line", product_id));
    }

    let next = store.dispatch(Action::UpdateQuantity {
        product_id: product_id.to_string(),
        quantity,
    });
    Ok(CartResponse::from(next.as_ref()))
}

/// Removes a cart line.
pub fn remove_from_cart(store: &Store, product_id: &str) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");

    let state = store.snapshot();
    if !state.cart.iter().any(|l| l.product.id == product_id) {
        return Err(ApiError::not_found("Cart line", product_id));
    }

    let next = store.dispatch(Action::RemoveFromCart {
        product_id: product_id.to_string(),
    });
    Ok(CartResponse::from(next.as_ref()))
}

/// Clears all cart lines. Idempotent.
pub fn clear_cart(store: &Store) -> CartResponse {
    debug!("clear_cart command");
    let next = store.dispatch(Action::ClearCart);
    CartResponse::from(next.as_ref())
}
