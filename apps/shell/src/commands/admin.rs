//! # Admin Commands
//!
//! Back-office operations: catalog management, order fulfilment, and the
//! hero rotation. The admin page gates access visually behind
//! [`crate::commands::auth::admin_login`]; these commands trust their
//! caller, the same way every dispatch site does.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use chrono::{DateTime, Utc};
use olala_core::{
    new_entity_id, validation, views, Action, HeroSlide, NewHeroSlide, OrderStatus, Product,
};

use crate::error::ApiError;
use crate::state::Store;

/// The admin product form. The id is assigned on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub discount_price_cents: Option<i64>,
    pub discount_end_date: Option<DateTime<Utc>>,
    pub images: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub is_live: bool,
    pub stock: i64,
    pub digital_file: Option<String>,
}

impl ProductForm {
    fn validate(&self) -> Result<(), ApiError> {
        validation::validate_product_name(&self.name)?;
        validation::validate_price_cents(self.price_cents)?;
        validation::validate_discount(self.price_cents, self.discount_price_cents)?;
        validation::validate_stock(self.stock)?;
        validation::validate_images(&self.images)?;
        validation::validate_required("category", &self.category)?;
        Ok(())
    }

    fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            discount_price_cents: self.discount_price_cents,
            discount_end_date: self.discount_end_date,
            images: self.images,
            category: self.category,
            tags: self.tags,
            is_featured: self.is_featured,
            is_live: self.is_live,
            stock: self.stock,
            digital_file: self.digital_file,
        }
    }
}

/// Dashboard header tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub live_products: usize,
    pub pending_orders: usize,
}

/// Admin dashboard counts.
pub fn dashboard(store: &Store) -> DashboardResponse {
    debug!("dashboard command");
    store.with_state(|s| DashboardResponse {
        live_products: views::live_product_count(s),
        pending_orders: views::pending_order_count(s),
    })
}

/// Creates a catalog product with a generated id.
pub fn create_product(store: &Store, form: ProductForm) -> Result<Product, ApiError> {
    debug!(name = %form.name, "create_product command");
    form.validate()?;

    let product = form.into_product(new_entity_id());
    info!(product_id = %product.id, "product created");

    store.dispatch(Action::AddProduct(product.clone()));
    Ok(product)
}

/// Replaces an existing product wholesale.
pub fn update_product(store: &Store, product: Product) -> Result<Product, ApiError> {
    debug!(product_id = %product.id, "update_product command");

    validation::validate_product_name(&product.name)?;
    validation::validate_price_cents(product.price_cents)?;
    validation::validate_discount(product.price_cents, product.discount_price_cents)?;
    validation::validate_stock(product.stock)?;
    validation::validate_images(&product.images)?;
    validation::validate_required("category", &product.category)?;

    let state = store.snapshot();
    if !state.products.iter().any(|p| p.id == product.id) {
        return Err(ApiError::not_found("Product", &product.id));
    }

    store.dispatch(Action::UpdateProduct(product.clone()));
    Ok(product)
}

/// Flips a product's storefront visibility.
pub fn toggle_product_live(store: &Store, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id, "toggle_product_live command");

    let state = store.snapshot();
    if !state.products.iter().any(|p| p.id == product_id) {
        return Err(ApiError::not_found("Product", product_id));
    }

    let next = store.dispatch(Action::ToggleProductLive {
        product_id: product_id.to_string(),
    });
    next.products
        .iter()
        .find(|p| p.id == product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

/// Sets an order's fulfilment status.
///
/// Transitions are unguarded: any status may replace any other, in any
/// order — the admin decides.
pub fn update_order_status(
    store: &Store,
    order_id: &str,
    status: OrderStatus,
) -> Result<(), ApiError> {
    debug!(order_id, status = status.label(), "update_order_status command");

    let state = store.snapshot();
    if !state.orders.iter().any(|o| o.id == order_id) {
        return Err(ApiError::not_found("Order", order_id));
    }

    store.dispatch(Action::UpdateOrderStatus {
        order_id: order_id.to_string(),
        status,
    });
    Ok(())
}

/// Appends a hero slide to the bottom of the rotation.
pub fn add_hero_slide(store: &Store, draft: NewHeroSlide) -> Result<HeroSlide, ApiError> {
    debug!(title = %draft.title, "add_hero_slide command");

    validation::validate_required("image url", &draft.image_url)?;
    validation::validate_required("title", &draft.title)?;
    validation::validate_required("link", &draft.link)?;

    let next = store.dispatch(Action::AddHeroSlide(draft));
    next.hero_slides
        .last()
        .cloned()
        .ok_or_else(|| ApiError::new(crate::error::ErrorCode::Internal, "slide not appended"))
}

/// Removes a hero slide from the rotation.
pub fn delete_hero_slide(store: &Store, slide_id: &str) -> Result<(), ApiError> {
    debug!(slide_id, "delete_hero_slide command");

    let state = store.snapshot();
    if !state.hero_slides.iter().any(|s| s.id == slide_id) {
        return Err(ApiError::not_found("Hero slide", slide_id));
    }

    store.dispatch(Action::DeleteHeroSlide {
        slide_id: slide_id.to_string(),
    });
    Ok(())
}
