//! # Command Layer
//!
//! The functions the frontend invokes. This is the "calling/presentation
//! layer" in the architecture: every command validates its input, performs
//! any existence/uniqueness pre-checks, and only then dispatches an action.
//! By the time an action reaches the store, nothing can go wrong — the
//! transition function is total.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Storefront browsing (shop, home, product page)
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── checkout.rs ◄─── Order placement, order history
//! ├── auth.rs     ◄─── Mock customer/admin authentication
//! ├── admin.rs    ◄─── Back-office: products, orders, hero slides
//! └── requests.rs ◄─── "Request a product" messages
//! ```
//!
//! ## Pattern
//! Every command takes the [`crate::state::Store`] by reference, returns
//! `Result<Response, ApiError>` (or a plain response when it cannot fail),
//! and logs its entry at debug level — the same shape for every caller.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod requests;
