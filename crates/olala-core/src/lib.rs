//! # olala-core: Pure Business Logic for the OlalaDOT Storefront
//!
//! This crate is the **heart** of the storefront. It holds the application
//! state aggregate and the single transition function that every page-level
//! consumer drives through dispatched actions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      OlalaDOT Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript SPA)                      │   │
//! │  │    Home ──► Shop ──► Product ──► Checkout ──► Account ──► Admin │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(Action)                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 olala-shell (command layer)                     │   │
//! │  │    add_to_cart, place_order, login, admin operations            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ olala-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   state   │  │   views   │  │ validation│  │   │
//! │  │   │  Product  │  │ AppState  │  │  totals   │  │   rules   │  │   │
//! │  │   │   Order   │  │transition │  │  filters  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, User, HeroSlide, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`action`] - The closed action vocabulary consumed by [`state::transition`]
//! - [`state`] - The state aggregate and the transition function
//! - [`views`] - Derived read-only projections over the state
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-side input validation
//!
//! ## Design Principles
//!
//! 1. **One mutation entry point**: all writes are actions applied by
//!    [`state::transition`]; nothing else touches the aggregate
//! 2. **Replacement, not mutation**: every transition produces a fresh
//!    aggregate, so snapshots held by observers stay valid
//! 3. **Total transition**: the function cannot fail; lookup misses are
//!    identity no-ops, and the closed [`action::Action`] enum makes
//!    unrecognized actions unrepresentable
//! 4. **Integer Money**: all monetary values are in cents (i64)
//!
//! ## Example Usage
//!
//! ```rust
//! use olala_core::{transition, Action, AppState};
//! use olala_core::views;
//!
//! let state = AppState::new();
//! // Unknown product id: the transition is a no-op, never an error.
//! let next = transition(&state, Action::ToggleProductLive { product_id: "missing".into() });
//! assert_eq!(views::cart_item_count(&next), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod error;
pub mod money;
pub mod state;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use olala_core::Money` instead of
// `use olala_core::money::Money`

pub use action::Action;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use state::{transition, AppState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// Caller-side guard: the transition function itself never rejects, so the
/// command layer checks this before dispatching an add.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart
///
/// Prevents accidental over-ordering (e.g. typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
