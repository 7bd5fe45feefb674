//! # Product Request Commands
//!
//! Visitors can ask for products the shop doesn't stock yet; the admin reads
//! the resulting append-only trail. Requests are never edited or deleted.

use tracing::debug;

use olala_core::{validation, Action, NewProductRequest, ProductRequest};

use crate::error::ApiError;
use crate::state::Store;

/// Submits a product request. The container assigns id and timestamp.
pub fn submit_product_request(
    store: &Store,
    draft: NewProductRequest,
) -> Result<ProductRequest, ApiError> {
    debug!(email = %draft.email, "submit_product_request command");

    validation::validate_required("name", &draft.name)?;
    validation::validate_email(&draft.email)?;
    validation::validate_required("message", &draft.message)?;

    let next = store.dispatch(Action::AddProductRequest(draft));
    next.product_requests
        .first()
        .cloned()
        .ok_or_else(|| ApiError::new(crate::error::ErrorCode::Internal, "request not recorded"))
}

/// Lists product requests, newest first.
pub fn list_product_requests(store: &Store) -> Vec<ProductRequest> {
    debug!("list_product_requests command");
    store.with_state(|s| s.product_requests.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_state;

    #[test]
    fn test_submit_assigns_id_and_date_and_prepends() {
        let store = Store::new(seed_state());

        let request = submit_product_request(
            &store,
            NewProductRequest {
                name: "Sadia Rahman".to_string(),
                email: "sadia@example.com".to_string(),
                message: "Any chance of Canva Pro?".to_string(),
            },
        )
        .unwrap();

        assert!(!request.id.is_empty());
        let listed = list_product_requests(&store);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, request.id);
    }

    #[test]
    fn test_submit_validates_fields() {
        let store = Store::new(seed_state());

        let err = submit_product_request(
            &store,
            NewProductRequest {
                name: String::new(),
                email: "sadia@example.com".to_string(),
                message: "hello".to_string(),
            },
        )
        .unwrap_err();
        assert!(err.message.contains("name"));

        assert_eq!(list_product_requests(&store).len(), 1);
    }
}
