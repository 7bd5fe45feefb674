//! # Domain Types
//!
//! Core domain types for the OlalaDOT storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id ("ORD-..")  │   │  id (UUID)      │       │
//! │  │  price_cents    │   │  items (frozen) │   │  email          │       │
//! │  │  is_live        │   │  status         │   │  password*      │       │
//! │  │  is_featured    │   │  total_cents    │   │  (*demo only)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartItem     │   │   HeroSlide     │   │ ProductRequest  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product (snap) │   │  image_url      │   │  message        │       │
//! │  │  quantity ≥ 1   │   │  title/link     │   │  date           │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `CartItem` embeds a full copy of the `Product` at add-time, so cart lines
//! (and the order lines built from them) keep displaying consistent data even
//! if the catalog entry is edited afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Id Generation
// =============================================================================

/// Generates a fresh entity id.
///
/// The original storefront derived ids from the wall clock, which collides
/// under rapid dispatch. UUID v4 is collision-resistant without coordination.
#[inline]
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a fresh order id with the human-readable `ORD-` prefix.
#[inline]
pub fn new_order_id() -> String {
    format!("ORD-{}", Uuid::new_v4())
}

// =============================================================================
// Product
// =============================================================================

/// A digital product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4). Immutable once created.
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Longer description for the product detail page.
    pub description: String,

    /// List price in cents. Must be >= 0 (caller-checked).
    pub price_cents: i64,

    /// Discounted price in cents, if a sale is running.
    /// Caller contract: must be less than `price_cents`.
    pub discount_price_cents: Option<i64>,

    /// When the discount ends. Reaching this freezes the countdown display;
    /// it does not strip the discount from the record.
    #[ts(as = "Option<String>")]
    pub discount_end_date: Option<DateTime<Utc>>,

    /// Image URLs, ordered. Non-empty (caller-checked); the first entry is
    /// the card thumbnail.
    pub images: Vec<String>,

    /// Category used for shop filtering and the home-page category strip.
    pub category: String,

    /// Free-form tags, set-like. Matched by the shop search.
    pub tags: Vec<String>,

    /// Shown in the home-page featured carousel (when also live).
    pub is_featured: bool,

    /// Visible in the storefront. Admin can toggle this off to unlist.
    pub is_live: bool,

    /// Units available. Must be >= 0 (caller-checked).
    pub stock: i64,

    /// Payload delivered after purchase (download link or activation key).
    pub digital_file: Option<String>,
}

impl Product {
    /// Returns the list price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the discount price as Money, if present.
    #[inline]
    pub fn discount_price(&self) -> Option<Money> {
        self.discount_price_cents.map(Money::from_cents)
    }

    /// Returns the price a buyer actually pays: the discount price when one
    /// is set, the list price otherwise.
    #[inline]
    pub fn effective_price(&self) -> Money {
        Money::from_cents(self.discount_price_cents.unwrap_or(self.price_cents))
    }

    /// Checks whether a discount price is set.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_price_cents.is_some()
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// ## Invariants
/// - `quantity` stays >= 1; a line whose quantity would reach 0 or below is
///   removed by the transition function, never retained at 0
/// - `product` is a snapshot, not a live reference: later catalog edits do
///   not reach into existing cart lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Full product snapshot frozen at add-time.
    pub product: Product,

    /// Quantity in cart. Always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart line with quantity 1 from a product snapshot.
    pub fn new(product: Product) -> Self {
        CartItem {
            product,
            quantity: 1,
        }
    }

    /// Calculates the line total (effective price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.effective_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an order.
///
/// The listed order reflects the usual progression, but transitions are
/// unguarded: the admin may set any status from any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order received, payment not yet verified.
    Pending,
    /// Payment verified, delivery being prepared.
    Processing,
    /// Delivery details sent out.
    OnTheWay,
    /// Customer has received the product.
    Delivered,
}

impl OrderStatus {
    /// Human-readable label matching the storefront UI.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::OnTheWay => "On The Way",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// Mobile-wallet payment options plus cash on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    #[serde(rename = "bKash")]
    Bkash,
    Nagad,
    Rocket,
    Upay,
    /// Cash on delivery. The only method without a transaction id.
    #[serde(rename = "COD")]
    CashOnDelivery,
}

impl PaymentMethod {
    /// Whether this method carries a wallet transaction id.
    #[inline]
    pub fn requires_transaction_id(&self) -> bool {
        !matches!(self, PaymentMethod::CashOnDelivery)
    }
}

// =============================================================================
// Order
// =============================================================================

/// Contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A placed order.
///
/// Items are cart-line snapshots; editing the catalog after checkout never
/// rewrites order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique id, generated at creation ("ORD-" + UUID). Never reused.
    pub id: String,

    /// The registered user who placed the order, if any. Anonymous checkout
    /// leaves this empty.
    pub user_id: Option<String>,

    /// Contact details entered at checkout.
    pub customer: CustomerInfo,

    /// Snapshot of the cart at checkout. Non-empty (caller-checked).
    pub items: Vec<CartItem>,

    /// Order total in cents. The cart subtotal at checkout time.
    pub total_cents: i64,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Wallet transaction reference. Absent for cash on delivery.
    pub transaction_id: Option<String>,

    /// Fulfilment status. Unguarded; see [`OrderStatus`].
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered customer account.
///
/// ## Security Note
/// The password is stored in plaintext because this is a non-persistent demo
/// with mock authentication. Nothing here survives a restart and nothing is
/// written to disk. Do not copy this shape into a real system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub name: String,

    /// Intended unique; enforced only by the registration pre-check in the
    /// command layer, never structurally.
    pub email: String,

    pub phone: String,
    pub address: String,

    /// Plaintext credential for the mock login compare.
    pub password: String,
}

/// Registration payload. The container assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
}

impl NewUser {
    /// Completes the draft into a stored user with the given id.
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            password: self.password,
        }
    }
}

// =============================================================================
// Hero Slide
// =============================================================================

/// A slide in the home-page hero rotation.
///
/// Insertion order is rotation order; new slides append to the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub image_url: String,
    pub title: String,
    pub subtitle: String,

    /// Where the slide's call-to-action points.
    pub link: String,
}

/// Hero slide payload. The container assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewHeroSlide {
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
    pub link: String,
}

impl NewHeroSlide {
    /// Completes the draft into a stored slide with the given id.
    pub fn into_slide(self, id: String) -> HeroSlide {
        HeroSlide {
            id,
            image_url: self.image_url,
            title: self.title,
            subtitle: self.subtitle,
            link: self.link,
        }
    }
}

// =============================================================================
// Product Request
// =============================================================================

/// A "can you stock this?" message from a visitor.
///
/// Append-only audit trail: requests are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub name: String,
    pub email: String,
    pub message: String,

    /// Assigned by the container at creation.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
}

/// Product request payload. The container assigns id and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewProductRequest {
    /// Completes the draft into a stored request.
    pub fn into_request(self, id: String, date: DateTime<Utc>) -> ProductRequest {
        ProductRequest {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            date,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
