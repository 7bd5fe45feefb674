//! # Error Types
//!
//! Domain-specific error types for olala-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  olala-core errors (this file)                                         │
//! │  ├── CoreError        - Caller-side domain failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  olala-shell errors (app crate)                                        │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the asymmetry with the transition function: `transition` is total
//! and never returns these. Every error here is raised by the command layer
//! BEFORE an action is dispatched (empty-cart checkout, duplicate email,
//! wrong credentials, unknown product id) — the container itself is never
//! asked to reject anything.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Caller-side domain errors.
///
/// These represent pre-dispatch rule violations; they are caught by the
/// shell and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id not present in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but is unlisted from the storefront.
    #[error("Product is not available for sale: {0}")]
    ProductNotLive(String),

    /// Order id not present in the order list.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Hero slide id not present in the rotation.
    #[error("Hero slide not found: {0}")]
    SlideNotFound(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Registration pre-check: the email already belongs to an account.
    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    /// Login compare failed (customer or admin).
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Cart has reached the maximum number of distinct lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when form input doesn't meet requirements. Used for early
/// validation before an action is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A discount price must undercut the list price.
    #[error("discount price {discount_cents} must be less than price {price_cents}")]
    DiscountNotBelowPrice {
        discount_cents: i64,
        price_cents: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DuplicateEmail("farah@example.com".to_string());
        assert_eq!(
            err.to_string(),
            "An account with email 'farah@example.com' already exists"
        );

        let err = CoreError::EmptyCart;
        assert_eq!(err.to_string(), "Cart is empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::DiscountNotBelowPrice {
            discount_cents: 5000,
            price_cents: 4999,
        };
        assert_eq!(
            err.to_string(),
            "discount price 5000 must be less than price 4999"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
