//! # Catalog Commands
//!
//! Read-only storefront browsing: the shop grid, the home-page featured
//! carousel, category strip, and the product detail page. These are thin
//! wrappers over the derived views — nothing here dispatches.

use tracing::debug;

use olala_core::views::{self, ProductFilter};
use olala_core::Product;

use crate::error::ApiError;
use crate::state::Store;

/// Lists every live product, in catalog order.
pub fn list_products(store: &Store) -> Vec<Product> {
    debug!("list_products command");
    store.with_state(|s| views::live_products(s).into_iter().cloned().collect())
}

/// Lists live products matching the shop-page filter.
pub fn search_products(store: &Store, filter: &ProductFilter) -> Vec<Product> {
    debug!(?filter, "search_products command");
    store.with_state(|s| {
        views::filter_products(s, filter)
            .into_iter()
            .cloned()
            .collect()
    })
}

/// Products for the home-page featured carousel (featured AND live).
pub fn featured_products(store: &Store) -> Vec<Product> {
    debug!("featured_products command");
    store.with_state(|s| views::featured_products(s).into_iter().cloned().collect())
}

/// Distinct category names, first-seen order.
pub fn list_categories(store: &Store) -> Vec<String> {
    debug!("list_categories command");
    store.with_state(|s| views::categories(s).into_iter().map(String::from).collect())
}

/// Fetches a single product for the detail page.
///
/// Unlisted products are still returned here — the admin preview uses the
/// same page; the storefront links only to live products.
pub fn get_product(store: &Store, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id, "get_product command");
    store.with_state(|s| {
        s.products
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_state;
    use olala_core::Action;

    #[test]
    fn test_list_products_skips_unlisted() {
        let store = Store::new(seed_state());
        let hidden_id = store.snapshot().products[0].id.clone();
        store.dispatch(Action::ToggleProductLive {
            product_id: hidden_id.clone(),
        });

        let listed = list_products(&store);
        assert_eq!(listed.len(), 5);
        assert!(listed.iter().all(|p| p.id != hidden_id));
    }

    #[test]
    fn test_search_by_category() {
        let store = Store::new(seed_state());
        let software = search_products(
            &store,
            &ProductFilter {
                category: Some("Software".to_string()),
                ..ProductFilter::default()
            },
        );
        assert_eq!(software.len(), 2);
    }

    #[test]
    fn test_get_product_unknown_id() {
        let store = Store::new(seed_state());
        let err = get_product(&store, "ghost").unwrap_err();
        assert_eq!(err.message, "Product not found: ghost");
    }

    #[test]
    fn test_featured_and_categories() {
        let store = Store::new(seed_state());
        assert_eq!(featured_products(&store).len(), 4);
        assert_eq!(list_categories(&store).len(), 5);
    }
}
