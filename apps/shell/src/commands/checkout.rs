//! # Checkout Commands
//!
//! Turns the current cart into an order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  place_order(form)                                                      │
//! │       │                                                                 │
//! │       ├── cart empty? ──────────► Err(EmptyCart)                        │
//! │       ├── contact fields valid? ─► Err(Validation...)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build Order:                                                           │
//! │    id        = "ORD-" + uuid                                            │
//! │    items     = cart snapshot                                            │
//! │    total     = cart subtotal (discount-aware)                           │
//! │    user_id   = current session user, if logged in                       │
//! │    txn id    = form value, omitted for COD                              │
//! │    status    = Pending                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  dispatch AddOrder  ── order lands at index 0 (newest first)            │
//! │  dispatch ClearCart ── cart is empty afterwards                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use olala_core::{
    new_order_id, validation, views, Action, CoreError, CustomerInfo, Order, OrderStatus,
    PaymentMethod,
};

use crate::error::ApiError;
use crate::state::Store;

/// The checkout form as submitted by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,

    /// Wallet transaction reference. Required for every method except COD,
    /// where it is ignored.
    pub transaction_id: Option<String>,
}

/// Places an order from the current cart.
///
/// On success the order has been prepended to the order list and the cart
/// has been emptied.
pub fn place_order(store: &Store, form: &CheckoutForm) -> Result<Order, ApiError> {
    debug!(payment_method = ?form.payment_method, "place_order command");

    let state = store.snapshot();

    if state.cart.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    validation::validate_required("name", &form.name)?;
    validation::validate_email(&form.email)?;
    validation::validate_required("phone", &form.phone)?;
    validation::validate_required("address", &form.address)?;

    let transaction_id = if form.payment_method.requires_transaction_id() {
        let txn = form.transaction_id.as_deref().unwrap_or("").trim();
        if txn.is_empty() {
            return Err(ApiError::validation("transaction id is required"));
        }
        Some(txn.to_string())
    } else {
        None
    };

    let order = Order {
        id: new_order_id(),
        user_id: state.current_user.as_ref().map(|u| u.id.clone()),
        customer: CustomerInfo {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
        },
        items: state.cart.clone(),
        total_cents: views::cart_subtotal(&state).cents(),
        payment_method: form.payment_method,
        transaction_id,
        status: OrderStatus::Pending,
        date: Utc::now(),
    };

    info!(order_id = %order.id, total = %order.total(), "order placed");

    store.dispatch(Action::AddOrder(order.clone()));
    store.dispatch(Action::ClearCart);

    Ok(order)
}

/// Orders placed by the logged-in customer, newest first.
pub fn order_history(store: &Store) -> Result<Vec<Order>, ApiError> {
    debug!("order_history command");

    store.with_state(|s| {
        let user = s
            .current_user
            .as_ref()
            .ok_or_else(|| ApiError::unauthorized("Not logged in"))?;
        Ok(views::orders_for_user(s, &user.id)
            .into_iter()
            .cloned()
            .collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{auth, cart};
    use crate::seed::seed_state;
    use olala_core::AppState;
    use olala_core::Product;

    fn checkout_form(method: PaymentMethod) -> CheckoutForm {
        CheckoutForm {
            name: "Rohan Ahmed".to_string(),
            email: "rohan@example.com".to_string(),
            phone: "01712345678".to_string(),
            address: "Dhaka, Bangladesh".to_string(),
            payment_method: method,
            transaction_id: Some("BK123XYZ".to_string()),
        }
    }

    fn fifty_dollar_product() -> Product {
        Product {
            id: "p-fifty".to_string(),
            name: "Fifty Dollar Item".to_string(),
            description: String::new(),
            price_cents: 5000,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec!["https://picsum.photos/seed/fifty/800/600".to_string()],
            category: "Gift Card".to_string(),
            tags: vec![],
            is_featured: false,
            is_live: true,
            stock: 10,
            digital_file: None,
        }
    }

    #[test]
    fn test_checkout_end_to_end() {
        // Seeded product at $50.00, no discount. Add twice, drop to one,
        // checkout: order at index 0 with total $50.00, cart empty.
        let store = Store::new(AppState {
            products: vec![fifty_dollar_product()],
            ..AppState::new()
        });

        cart::add_to_cart(&store, "p-fifty").unwrap();
        cart::add_to_cart(&store, "p-fifty").unwrap();
        assert_eq!(store.snapshot().cart[0].quantity, 2);

        cart::update_cart_item(&store, "p-fifty", 1).unwrap();

        let order = place_order(&store, &checkout_form(PaymentMethod::Bkash)).unwrap();
        assert_eq!(order.total_cents, 5000);

        let state = store.snapshot();
        assert_eq!(state.orders[0].id, order.id);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_is_rejected_before_dispatch() {
        let store = Store::new(seed_state());
        let before = store.snapshot();

        let err = place_order(&store, &checkout_form(PaymentMethod::Bkash)).unwrap_err();
        assert_eq!(err.message, "Cart is empty");

        // Nothing was dispatched.
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_checkout_cod_omits_transaction_id() {
        let store = Store::new(seed_state());
        let product_id = store.snapshot().products[1].id.clone();
        cart::add_to_cart(&store, &product_id).unwrap();

        let mut form = checkout_form(PaymentMethod::CashOnDelivery);
        form.transaction_id = None;
        let order = place_order(&store, &form).unwrap();

        assert!(order.transaction_id.is_none());
    }

    #[test]
    fn test_checkout_wallet_requires_transaction_id() {
        let store = Store::new(seed_state());
        let product_id = store.snapshot().products[1].id.clone();
        cart::add_to_cart(&store, &product_id).unwrap();

        let mut form = checkout_form(PaymentMethod::Nagad);
        form.transaction_id = None;
        assert!(place_order(&store, &form).is_err());
    }

    #[test]
    fn test_checkout_links_logged_in_user() {
        let store = Store::new(seed_state());
        auth::login(&store, "farah@example.com", "farah123").unwrap();

        let product_id = store.snapshot().products[1].id.clone();
        cart::add_to_cart(&store, &product_id).unwrap();
        let order = place_order(&store, &checkout_form(PaymentMethod::Nagad)).unwrap();

        let user_id = store.snapshot().users[1].id.clone();
        assert_eq!(order.user_id.as_deref(), Some(user_id.as_str()));

        // The new order joins the seeded one in the user's history.
        let history = order_history(&store).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, order.id);
    }

    #[test]
    fn test_order_history_requires_login() {
        let store = Store::new(seed_state());
        assert!(order_history(&store).is_err());
    }
}
