//! # Application State & Transition Function
//!
//! The single authoritative state aggregate and the one mutation entry point.
//!
//! ## Transition Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  transition(state, action) → new state                  │
//! │                                                                         │
//! │  • TOTAL: never fails. Lookup misses (unknown product/order/slide id)   │
//! │    return the input state unchanged — a no-op, not an error.            │
//! │  • PURE BY REPLACEMENT: the input is never mutated in place; every      │
//! │    call produces a fresh aggregate, so snapshots held by observers      │
//! │    stay valid for consistent rendering.                                 │
//! │  • EXHAUSTIVE: the closed Action enum is matched without a wildcard     │
//! │    arm, so a new action variant is a compile error here, not a silent   │
//! │    no-op.                                                               │
//! │  • NO VALIDATION: email format, password strength, quantity bounds,     │
//! │    price positivity are all caller-side (see validation module). The    │
//! │    container is never asked to reject anything.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collection Ordering
//! - `orders` and `product_requests` are newest-first (prepend)
//! - `products` prepend (new items surface at the top of the admin list)
//! - `cart` and `hero_slides` append (insertion order is display order)

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::action::Action;
use crate::types::{
    new_entity_id, CartItem, HeroSlide, Order, Product, ProductRequest, User,
};

// =============================================================================
// Aggregate State
// =============================================================================

/// The complete application state at a point in time.
///
/// All collections are exclusively owned by the container; consumers read
/// snapshots and mutate only by dispatching actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Catalog, newest additions first.
    pub products: Vec<Product>,

    /// Current cart lines, in add order.
    pub cart: Vec<CartItem>,

    /// Placed orders, newest first.
    pub orders: Vec<Order>,

    /// Home-page hero rotation, in insertion order.
    pub hero_slides: Vec<HeroSlide>,

    /// Registered accounts (seeded + signed up this session).
    pub users: Vec<User>,

    /// Visitor product requests, newest first. Append-only.
    pub product_requests: Vec<ProductRequest>,

    /// The logged-in customer, if any.
    pub current_user: Option<User>,

    /// Customer auth flag. Mirrors `current_user.is_some()` after every
    /// transition that touches the session.
    pub is_authenticated: bool,

    /// Admin auth flag. A separate trust domain from the customer flag;
    /// customer logout never clears it.
    pub is_admin_authenticated: bool,
}

impl AppState {
    /// Creates an empty state (no catalog, no session).
    pub fn new() -> Self {
        AppState::default()
    }
}

// =============================================================================
// Transition Function
// =============================================================================

/// Applies an action to a state snapshot and returns the next state.
///
/// This is the only mutation entry point in the system. See the module docs
/// for the totality / purity contract.
pub fn transition(state: &AppState, action: Action) -> AppState {
    match action {
        // ---------------------------------------------------------------------
        // Cart
        // ---------------------------------------------------------------------
        Action::AddToCart(product) => {
            let mut next = state.clone();
            // Matching is by product id, not object identity.
            if let Some(line) = next.cart.iter_mut().find(|l| l.product.id == product.id) {
                line.quantity += 1;
            } else {
                next.cart.push(CartItem::new(product));
            }
            next
        }

        Action::RemoveFromCart { product_id } => {
            let mut next = state.clone();
            next.cart.retain(|l| l.product.id != product_id);
            next
        }

        Action::UpdateQuantity {
            product_id,
            quantity,
        } => {
            let mut next = state.clone();
            if let Some(line) = next.cart.iter_mut().find(|l| l.product.id == product_id) {
                line.quantity = quantity;
            }
            // Zero or negative input deletes the line rather than erroring.
            next.cart.retain(|l| l.quantity > 0);
            next
        }

        Action::ClearCart => {
            let mut next = state.clone();
            next.cart = Vec::new();
            next
        }

        // ---------------------------------------------------------------------
        // Orders
        // ---------------------------------------------------------------------
        Action::AddOrder(order) => {
            let mut next = state.clone();
            next.orders.insert(0, order);
            next
        }

        Action::UpdateOrderStatus { order_id, status } => {
            let mut next = state.clone();
            if let Some(order) = next.orders.iter_mut().find(|o| o.id == order_id) {
                order.status = status;
            }
            next
        }

        // ---------------------------------------------------------------------
        // Catalog
        // ---------------------------------------------------------------------
        Action::AddProduct(product) => {
            let mut next = state.clone();
            next.products.insert(0, product);
            next
        }

        Action::UpdateProduct(product) => {
            let mut next = state.clone();
            if let Some(slot) = next.products.iter_mut().find(|p| p.id == product.id) {
                *slot = product;
            }
            next
        }

        Action::ToggleProductLive { product_id } => {
            let mut next = state.clone();
            if let Some(product) = next.products.iter_mut().find(|p| p.id == product_id) {
                product.is_live = !product.is_live;
            }
            next
        }

        // ---------------------------------------------------------------------
        // Hero Slides
        // ---------------------------------------------------------------------
        Action::AddHeroSlide(draft) => {
            let mut next = state.clone();
            next.hero_slides.push(draft.into_slide(new_entity_id()));
            next
        }

        Action::DeleteHeroSlide { slide_id } => {
            let mut next = state.clone();
            next.hero_slides.retain(|s| s.id != slide_id);
            next
        }

        // ---------------------------------------------------------------------
        // Session
        // ---------------------------------------------------------------------
        Action::RegisterUser(draft) => {
            let mut next = state.clone();
            let user = draft.into_user(new_entity_id());
            // Email uniqueness is the form handler's pre-check; a duplicate
            // dispatched anyway is appended without complaint.
            next.users.push(user.clone());
            next.current_user = Some(user);
            next.is_authenticated = true;
            next
        }

        Action::SetCurrentUser(user) => {
            let mut next = state.clone();
            next.is_authenticated = user.is_some();
            next.current_user = user;
            next
        }

        Action::Logout => {
            let mut next = state.clone();
            next.current_user = None;
            next.is_authenticated = false;
            next
        }

        Action::SetAdminAuthenticated(flag) => {
            let mut next = state.clone();
            next.is_admin_authenticated = flag;
            next
        }

        // ---------------------------------------------------------------------
        // Product Requests
        // ---------------------------------------------------------------------
        Action::AddProductRequest(draft) => {
            let mut next = state.clone();
            next.product_requests
                .insert(0, draft.into_request(new_entity_id(), Utc::now()));
            next
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CustomerInfo, NewHeroSlide, NewProductRequest, NewUser, OrderStatus, PaymentMethod,
    };

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: "A digital product.".to_string(),
            price_cents,
            discount_price_cents: None,
            discount_end_date: None,
            images: vec![format!("https://picsum.photos/seed/{}/800/600", id)],
            category: "Software".to_string(),
            tags: vec!["Software".to_string()],
            is_featured: false,
            is_live: true,
            stock: 10,
            digital_file: None,
        }
    }

    fn test_order(id: &str, total_cents: i64) -> Order {
        Order {
            id: id.to_string(),
            user_id: None,
            customer: CustomerInfo {
                name: "Rohan Ahmed".to_string(),
                email: "rohan@example.com".to_string(),
                phone: "01712345678".to_string(),
                address: "Dhaka, Bangladesh".to_string(),
            },
            items: vec![CartItem::new(test_product("p-in-order", total_cents))],
            total_cents,
            payment_method: PaymentMethod::Bkash,
            transaction_id: Some("BK123XYZ".to_string()),
            status: OrderStatus::Pending,
            date: Utc::now(),
        }
    }

    #[test]
    fn test_add_same_product_twice_merges_into_one_line() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].quantity, 2);
    }

    #[test]
    fn test_add_different_products_appends_lines() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let state = transition(&state, Action::AddToCart(test_product("p-2", 9999)));

        assert_eq!(state.cart.len(), 2);
        assert_eq!(state.cart[0].product.id, "p-1");
        assert_eq!(state.cart[1].product.id, "p-2");
    }

    #[test]
    fn test_update_quantity_to_zero_removes_only_that_line() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let state = transition(&state, Action::AddToCart(test_product("p-2", 9999)));

        let state = transition(
            &state,
            Action::UpdateQuantity {
                product_id: "p-1".to_string(),
                quantity: 0,
            },
        );

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart[0].product.id, "p-2");
        assert_eq!(state.cart[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_negative_also_removes() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let state = transition(
            &state,
            Action::UpdateQuantity {
                product_id: "p-1".to_string(),
                quantity: -3,
            },
        );

        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let next = transition(
            &state,
            Action::UpdateQuantity {
                product_id: "ghost".to_string(),
                quantity: 7,
            },
        );

        assert_eq!(next, state);
    }

    #[test]
    fn test_clear_cart_is_idempotent() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let state = transition(&state, Action::ClearCart);
        assert!(state.cart.is_empty());

        let state = transition(&state, Action::ClearCart);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_orders_are_newest_first() {
        let state = AppState::new();
        let state = transition(&state, Action::AddOrder(test_order("ORD-a", 2999)));
        let state = transition(&state, Action::AddOrder(test_order("ORD-b", 12000)));

        assert_eq!(state.orders[0].id, "ORD-b");
        assert_eq!(state.orders[1].id, "ORD-a");
    }

    #[test]
    fn test_update_order_status_touches_only_the_match() {
        let state = AppState::new();
        let state = transition(&state, Action::AddOrder(test_order("ORD-a", 2999)));
        let state = transition(&state, Action::AddOrder(test_order("ORD-b", 12000)));

        let state = transition(
            &state,
            Action::UpdateOrderStatus {
                order_id: "ORD-a".to_string(),
                status: OrderStatus::Delivered,
            },
        );

        assert_eq!(state.orders[1].status, OrderStatus::Delivered);
        assert_eq!(state.orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_order_status_unknown_id_is_noop() {
        let state = AppState::new();
        let state = transition(&state, Action::AddOrder(test_order("ORD-a", 2999)));
        let next = transition(
            &state,
            Action::UpdateOrderStatus {
                order_id: "ORD-ghost".to_string(),
                status: OrderStatus::Delivered,
            },
        );

        assert_eq!(next, state);
    }

    #[test]
    fn test_update_product_replaces_wholesale() {
        let state = AppState::new();
        let state = transition(&state, Action::AddProduct(test_product("p-1", 5000)));

        let mut edited = test_product("p-1", 4500);
        edited.name = "Renamed".to_string();
        let state = transition(&state, Action::UpdateProduct(edited));

        assert_eq!(state.products[0].name, "Renamed");
        assert_eq!(state.products[0].price_cents, 4500);
    }

    #[test]
    fn test_toggle_product_live_is_involution() {
        let state = AppState::new();
        let state = transition(&state, Action::AddProduct(test_product("p-1", 5000)));
        let toggle = Action::ToggleProductLive {
            product_id: "p-1".to_string(),
        };

        let once = transition(&state, toggle.clone());
        assert!(!once.products[0].is_live);

        let twice = transition(&once, toggle);
        assert_eq!(twice.products[0].is_live, state.products[0].is_live);
    }

    #[test]
    fn test_hero_slide_add_then_delete_restores_list() {
        let state = AppState::new();
        let state = transition(
            &state,
            Action::AddHeroSlide(NewHeroSlide {
                image_url: "https://picsum.photos/seed/hero0/1600/600".to_string(),
                title: "Existing".to_string(),
                subtitle: "Already in rotation".to_string(),
                link: "/shop".to_string(),
            }),
        );
        let before = state.clone();

        let state = transition(
            &state,
            Action::AddHeroSlide(NewHeroSlide {
                image_url: "https://picsum.photos/seed/hero1/1600/600".to_string(),
                title: "Flash Sale".to_string(),
                subtitle: "48 hours only".to_string(),
                link: "/shop".to_string(),
            }),
        );
        assert_eq!(state.hero_slides.len(), 2);
        // New slides land at the bottom of the rotation.
        let added_id = state.hero_slides[1].id.clone();

        let state = transition(&state, Action::DeleteHeroSlide { slide_id: added_id });
        assert_eq!(state, before);
    }

    #[test]
    fn test_register_user_sets_session() {
        let state = AppState::new();
        let state = transition(
            &state,
            Action::RegisterUser(NewUser {
                name: "Farah Islam".to_string(),
                email: "farah@example.com".to_string(),
                phone: "01812345678".to_string(),
                address: "Chittagong, Bangladesh".to_string(),
                password: "hunter2".to_string(),
            }),
        );

        assert_eq!(state.users.len(), 1);
        assert!(state.is_authenticated);
        let current = state.current_user.as_ref().unwrap();
        assert_eq!(current.id, state.users[0].id);
        assert!(!current.id.is_empty());
    }

    #[test]
    fn test_register_duplicate_email_is_appended_without_complaint() {
        // The container does not deduplicate; rejection is the form
        // handler's job before dispatch.
        let draft = NewUser {
            name: "Farah Islam".to_string(),
            email: "farah@example.com".to_string(),
            phone: "01812345678".to_string(),
            address: "Chittagong, Bangladesh".to_string(),
            password: "hunter2".to_string(),
        };
        let state = AppState::new();
        let state = transition(&state, Action::RegisterUser(draft.clone()));
        let state = transition(&state, Action::RegisterUser(draft));

        assert_eq!(state.users.len(), 2);
        assert_eq!(state.users[0].email, state.users[1].email);
        assert_ne!(state.users[0].id, state.users[1].id);
    }

    #[test]
    fn test_set_current_user_none_clears_auth_flag() {
        let state = AppState::new();
        let state = transition(
            &state,
            Action::RegisterUser(NewUser {
                name: "Farah Islam".to_string(),
                email: "farah@example.com".to_string(),
                phone: "01812345678".to_string(),
                address: "Chittagong, Bangladesh".to_string(),
                password: "hunter2".to_string(),
            }),
        );
        let state = transition(&state, Action::SetCurrentUser(None));

        assert!(state.current_user.is_none());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_logout_leaves_admin_flag_untouched() {
        let state = AppState::new();
        let state = transition(&state, Action::SetAdminAuthenticated(true));
        let state = transition(
            &state,
            Action::RegisterUser(NewUser {
                name: "Farah Islam".to_string(),
                email: "farah@example.com".to_string(),
                phone: "01812345678".to_string(),
                address: "Chittagong, Bangladesh".to_string(),
                password: "hunter2".to_string(),
            }),
        );

        let state = transition(&state, Action::Logout);

        assert!(!state.is_authenticated);
        assert!(state.current_user.is_none());
        assert!(state.is_admin_authenticated);
    }

    #[test]
    fn test_product_requests_prepend_and_get_stamped() {
        let state = AppState::new();
        let state = transition(
            &state,
            Action::AddProductRequest(NewProductRequest {
                name: "Anik Ahmed".to_string(),
                email: "anik@example.com".to_string(),
                message: "Please stock a Figma yearly plan.".to_string(),
            }),
        );
        let state = transition(
            &state,
            Action::AddProductRequest(NewProductRequest {
                name: "Sadia Rahman".to_string(),
                email: "sadia@example.com".to_string(),
                message: "Any chance of Canva Pro?".to_string(),
            }),
        );

        assert_eq!(state.product_requests.len(), 2);
        assert_eq!(state.product_requests[0].name, "Sadia Rahman");
        assert!(!state.product_requests[0].id.is_empty());
    }

    #[test]
    fn test_transition_never_mutates_its_input() {
        let state = AppState::new();
        let state = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let snapshot = state.clone();

        let _next = transition(&state, Action::AddToCart(test_product("p-1", 5000)));
        let _next = transition(&state, Action::ClearCart);

        // The snapshot a renderer holds across dispatches stays valid.
        assert_eq!(state, snapshot);
        assert_eq!(state.cart[0].quantity, 1);
    }

    #[test]
    fn test_cart_snapshot_survives_catalog_edit() {
        let state = AppState::new();
        let state = transition(&state, Action::AddProduct(test_product("p-1", 5000)));
        let state = transition(&state, Action::AddToCart(state.products[0].clone()));

        let mut cheaper = test_product("p-1", 100);
        cheaper.name = "Repriced".to_string();
        let state = transition(&state, Action::UpdateProduct(cheaper));

        // The cart line keeps the add-time snapshot.
        assert_eq!(state.cart[0].product.price_cents, 5000);
        assert_eq!(state.products[0].price_cents, 100);
    }
}
