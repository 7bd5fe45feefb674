//! # Derived Views
//!
//! Read-only projections computed on demand from [`AppState`]. None of these
//! are stored: caching them would let them go stale relative to the
//! container, so consumers recompute on every state (or clock) change.
//!
//! All functions here are pure over the state snapshot; the countdown
//! additionally takes the current instant as an argument rather than reading
//! the clock itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::state::AppState;
use crate::types::{Order, OrderStatus, Product};

// =============================================================================
// Cart Projections
// =============================================================================

/// Total quantity across all cart lines (the header badge number).
pub fn cart_item_count(state: &AppState) -> i64 {
    state.cart.iter().map(|l| l.quantity).sum()
}

/// Cart subtotal: Σ effective price × quantity over all lines.
pub fn cart_subtotal(state: &AppState) -> Money {
    state
        .cart
        .iter()
        .fold(Money::zero(), |acc, l| acc + l.line_total())
}

// =============================================================================
// Catalog Projections
// =============================================================================

/// Products shown in the home-page featured carousel: featured AND live.
pub fn featured_products(state: &AppState) -> Vec<&Product> {
    state
        .products
        .iter()
        .filter(|p| p.is_featured && p.is_live)
        .collect()
}

/// Products visible in the storefront.
pub fn live_products(state: &AppState) -> Vec<&Product> {
    state.products.iter().filter(|p| p.is_live).collect()
}

/// Distinct category values across the catalog, in first-seen order.
pub fn categories(state: &AppState) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for product in &state.products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(product.category.as_str());
        }
    }
    seen
}

/// Shop-page filter parameters. Every field is optional; an empty filter
/// returns all live products.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Case-insensitive match against name or any tag.
    pub search: Option<String>,

    /// Exact category match.
    pub category: Option<String>,

    /// Maximum effective price in cents, inclusive.
    pub max_price_cents: Option<i64>,
}

/// Live products matching the shop-page filter, in catalog order.
pub fn filter_products<'a>(state: &'a AppState, filter: &ProductFilter) -> Vec<&'a Product> {
    let needle = filter.search.as_deref().map(str::to_lowercase);

    state
        .products
        .iter()
        .filter(|p| p.is_live)
        .filter(|p| match &needle {
            Some(term) => {
                p.name.to_lowercase().contains(term)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(term))
            }
            None => true,
        })
        .filter(|p| match &filter.category {
            Some(category) => &p.category == category,
            None => true,
        })
        .filter(|p| match filter.max_price_cents {
            Some(max) => p.effective_price().cents() <= max,
            None => true,
        })
        .collect()
}

// =============================================================================
// Order Projections
// =============================================================================

/// Orders placed by the given user, newest first.
pub fn orders_for_user<'a>(state: &'a AppState, user_id: &str) -> Vec<&'a Order> {
    let mut orders: Vec<&Order> = state
        .orders
        .iter()
        .filter(|o| o.user_id.as_deref() == Some(user_id))
        .collect();
    orders.sort_by(|a, b| b.date.cmp(&a.date));
    orders
}

// =============================================================================
// Admin Dashboard Tiles
// =============================================================================

/// Count of live products, shown in the admin header.
pub fn live_product_count(state: &AppState) -> usize {
    state.products.iter().filter(|p| p.is_live).count()
}

/// Count of orders still pending, shown in the admin header.
pub fn pending_order_count(state: &AppState) -> usize {
    state
        .orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count()
}

// =============================================================================
// Discount Countdown
// =============================================================================

/// Snapshot of the time remaining until a discount ends.
///
/// Reaching or passing the end date freezes the display at `Expired`; the
/// discount itself stays on the product record untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Countdown {
    Remaining {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Expired,
}

/// Computes the countdown toward `end` as seen at instant `now`.
///
/// Recomputed once per second by the display ticker; pure so the tests can
/// pin the clock.
pub fn discount_countdown(end: DateTime<Utc>, now: DateTime<Utc>) -> Countdown {
    let remaining = end.signed_duration_since(now).num_seconds();
    if remaining <= 0 {
        return Countdown::Expired;
    }

    Countdown::Remaining {
        days: remaining / 86_400,
        hours: (remaining / 3_600) % 24,
        minutes: (remaining / 60) % 60,
        seconds: remaining % 60,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
