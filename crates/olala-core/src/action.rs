//! # Action Vocabulary
//!
//! The closed set of state mutations. Every write in the application is one
//! of these variants applied by [`crate::state::transition`]; there is no
//! other way to touch the aggregate.
//!
//! ## Wire Shape
//! Actions serialize in the frontend's dispatch shape:
//! ```json
//! { "type": "ADD_TO_CART", "payload": { "id": "...", "name": "...", ... } }
//! ```
//! The enum is exhaustively matched in the transition function, so adding a
//! variant is a compile-time obligation, not a silently ignored string tag.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{
    NewHeroSlide, NewProductRequest, NewUser, Order, OrderStatus, Product, User,
};

/// A tagged request to mutate state, consumed exactly once by the transition
/// function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    /// Merge the product into the cart: an existing line for the same
    /// product id gains quantity 1, otherwise a new line (qty 1) is appended.
    /// The payload is snapshotted into the line.
    AddToCart(Product),

    /// Delete the cart line for this product id. No-op if absent.
    RemoveFromCart { product_id: String },

    /// Set the line's quantity; a resulting quantity <= 0 deletes the line
    /// instead of erroring.
    UpdateQuantity { product_id: String, quantity: i64 },

    /// Empty the cart. Idempotent.
    ClearCart,

    /// Prepend the order (orders are kept newest-first). The caller supplies
    /// the generated id and timestamp.
    AddOrder(Order),

    /// Replace the status of the order with this id. No-op if unknown.
    /// Transitions are unguarded: any status may follow any other.
    UpdateOrderStatus { order_id: String, status: OrderStatus },

    /// Prepend a catalog product. The caller supplies a unique id.
    AddProduct(Product),

    /// Replace the product with the matching id wholesale. No-op if unknown.
    UpdateProduct(Product),

    /// Flip `is_live` on the product with this id. No-op if unknown.
    ToggleProductLive { product_id: String },

    /// Append a hero slide (bottom of the rotation). The container assigns
    /// the id.
    AddHeroSlide(NewHeroSlide),

    /// Remove the slide with this id. No-op if unknown.
    DeleteHeroSlide { slide_id: String },

    /// Append the user (container assigns the id), make them the current
    /// user, and set the customer auth flag. Does NOT check email
    /// uniqueness — that pre-check belongs to the registration form handler.
    RegisterUser(NewUser),

    /// Replace the current-user reference. The customer auth flag follows:
    /// true for Some, false for None. Used by the login flow after the
    /// external credential check.
    SetCurrentUser(Option<User>),

    /// Clear the current user and the customer auth flag. The admin flag is
    /// a separate trust domain and is left untouched.
    Logout,

    /// Replace the admin auth flag directly. Independent of customer auth.
    SetAdminAuthenticated(bool),

    /// Prepend a product request (container assigns id and date).
    /// Append-only audit trail.
    AddProductRequest(NewProductRequest),
}

impl Action {
    /// The wire tag of this action, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddToCart(_) => "ADD_TO_CART",
            Action::RemoveFromCart { .. } => "REMOVE_FROM_CART",
            Action::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            Action::ClearCart => "CLEAR_CART",
            Action::AddOrder(_) => "ADD_ORDER",
            Action::UpdateOrderStatus { .. } => "UPDATE_ORDER_STATUS",
            Action::AddProduct(_) => "ADD_PRODUCT",
            Action::UpdateProduct(_) => "UPDATE_PRODUCT",
            Action::ToggleProductLive { .. } => "TOGGLE_PRODUCT_LIVE",
            Action::AddHeroSlide(_) => "ADD_HERO_SLIDE",
            Action::DeleteHeroSlide { .. } => "DELETE_HERO_SLIDE",
            Action::RegisterUser(_) => "REGISTER_USER",
            Action::SetCurrentUser(_) => "SET_CURRENT_USER",
            Action::Logout => "LOGOUT",
            Action::SetAdminAuthenticated(_) => "SET_ADMIN_AUTHENTICATED",
            Action::AddProductRequest(_) => "ADD_PRODUCT_REQUEST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_matches_frontend_dispatch() {
        let action = Action::RemoveFromCart {
            product_id: "p-1".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "REMOVE_FROM_CART");
        assert_eq!(json["payload"]["productId"], "p-1");
    }

    #[test]
    fn test_payload_free_actions_serialize_with_tag_only() {
        let json = serde_json::to_value(&Action::ClearCart).unwrap();
        assert_eq!(json["type"], "CLEAR_CART");

        let logout = serde_json::to_value(&Action::Logout).unwrap();
        assert_eq!(logout["type"], "LOGOUT");
    }
}
