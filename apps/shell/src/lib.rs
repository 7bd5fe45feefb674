//! # OlalaDOT Shell
//!
//! The application shell around olala-core: store wiring, seed data, the
//! command layer, and a headless demo walkthrough.
//!
//! ## Module Organization
//! ```text
//! olala_shell/
//! ├── lib.rs          ◄─── You are here (tracing init & demo walkthrough)
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── store.rs    ◄─── The Store (dispatch + subscription)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Storefront browsing
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── checkout.rs ◄─── Order placement
//! │   ├── auth.rs     ◄─── Mock customer/admin authentication
//! │   ├── admin.rs    ◄─── Back-office operations
//! │   └── requests.rs ◄─── Product request trail
//! ├── display.rs      ◄─── Carousel & countdown tickers (read-only)
//! ├── seed.rs         ◄─── Startup dataset
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod display;
pub mod error;
pub mod seed;
pub mod state;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use olala_core::views::ProductFilter;
use olala_core::{NewHeroSlide, NewProductRequest, OrderStatus, PaymentMethod};

use commands::{admin, auth, cart, catalog, checkout, requests};
use state::Store;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatch and ticker refresh
/// - `RUST_LOG=olala=trace` - Trace for olala crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,olala=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the headless demo walkthrough.
///
/// ## Startup Sequence
/// 1. Build the store from the seed dataset
/// 2. Attach a subscriber that logs every state change
/// 3. Start the display tickers (carousel, discount countdown)
/// 4. Drive the storefront flows end to end
/// 5. Cancel the tickers and exit
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(Store::new(seed::seed_state()));
    info!(
        products = store.snapshot().products.len(),
        orders = store.snapshot().orders.len(),
        "seed data loaded"
    );

    // Observer: logs a one-line summary on every dispatch.
    let mut rx = store.subscribe();
    let logger = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update();
            info!(
                cart_items = olala_core::views::cart_item_count(&state),
                orders = state.orders.len(),
                logged_in = state.is_authenticated,
                admin = state.is_admin_authenticated,
                "state changed"
            );
        }
    });

    let carousel = display::spawn_carousel(Arc::clone(&store), display::CAROUSEL_PERIOD);
    let countdown = display::spawn_countdown(Arc::clone(&store));

    // --- Storefront browsing ---------------------------------------------
    let featured = catalog::featured_products(&store);
    info!(featured = featured.len(), "home page loaded");

    let software = catalog::search_products(
        &store,
        &ProductFilter {
            category: Some("Software".to_string()),
            ..ProductFilter::default()
        },
    );
    info!(results = software.len(), "shop filtered by category");

    // --- Cart and checkout ------------------------------------------------
    let graphics_bundle = featured[0].id.clone();
    cart::add_to_cart(&store, &graphics_bundle)?;
    cart::add_to_cart(&store, &graphics_bundle)?;
    cart::update_cart_item(&store, &graphics_bundle, 1)?;

    auth::login(&store, "rohan@example.com", "rohan123")?;

    let order = checkout::place_order(
        &store,
        &checkout::CheckoutForm {
            name: "Rohan Ahmed".to_string(),
            email: "rohan@example.com".to_string(),
            phone: "01712345678".to_string(),
            address: "Dhaka, Bangladesh".to_string(),
            payment_method: PaymentMethod::Bkash,
            transaction_id: Some("BK789QRS".to_string()),
        },
    )?;
    info!(order_id = %order.id, history = checkout::order_history(&store)?.len(), "checkout complete");

    // --- Visitor request ---------------------------------------------------
    requests::submit_product_request(
        &store,
        NewProductRequest {
            name: "Sadia Rahman".to_string(),
            email: "sadia@example.com".to_string(),
            message: "Any chance of Canva Pro?".to_string(),
        },
    )?;

    // --- Admin back-office -------------------------------------------------
    auth::admin_login(&store, auth::ADMIN_EMAIL, auth::ADMIN_PASSWORD)?;
    admin::update_order_status(&store, &order.id, OrderStatus::Processing)?;

    let slide = admin::add_hero_slide(
        &store,
        NewHeroSlide {
            image_url: "https://picsum.photos/seed/hero9/1600/600".to_string(),
            title: "Eid Mega Sale".to_string(),
            subtitle: "Up to 60% off".to_string(),
            link: "/shop".to_string(),
        },
    )?;
    admin::delete_hero_slide(&store, &slide.id)?;

    let tiles = admin::dashboard(&store);
    info!(
        live_products = tiles.live_products,
        pending_orders = tiles.pending_orders,
        "admin dashboard"
    );

    // Customer logout leaves the admin flag alone; the two are independent.
    auth::logout(&store);

    // Let the tickers produce a couple of refreshes before shutdown.
    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    carousel.abort();
    countdown.abort();
    logger.abort();

    info!("demo walkthrough finished");
    Ok(())
}
