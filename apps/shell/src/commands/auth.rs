//! # Authentication Commands
//!
//! Mock authentication for the account page and the admin back-office.
//!
//! ## Mock Trust Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer: plaintext email+password compare against state.users         │
//! │            result fed in via SET_CURRENT_USER / REGISTER_USER           │
//! │                                                                         │
//! │  Admin:    one fixed shared credential pair                             │
//! │            result fed in via SET_ADMIN_AUTHENTICATED                    │
//! │                                                                         │
//! │  The two flags are separate trust domains: customer logout never        │
//! │  clears the admin flag, and vice versa.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Explicitly non-production-grade: no hashing, no sessions, no tokens.
//! The credential check happens here, outside the container — the container
//! only records the outcome.

use tracing::{debug, info};

use olala_core::{validation, Action, CoreError, NewUser, User};

use crate::error::ApiError;
use crate::state::Store;

/// The fixed admin credential pair.
pub const ADMIN_EMAIL: &str = "admin@olaladot.com";
pub const ADMIN_PASSWORD: &str = "password";

/// Logs a customer in.
///
/// Accepts any user record whose email+password pair matches a seeded or
/// registered user (plaintext compare).
pub fn login(store: &Store, email: &str, password: &str) -> Result<User, ApiError> {
    debug!(email, "login command");

    let state = store.snapshot();
    let user = state
        .users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .cloned()
        .ok_or(CoreError::InvalidCredentials)?;

    store.dispatch(Action::SetCurrentUser(Some(user.clone())));
    info!(user_id = %user.id, "customer logged in");
    Ok(user)
}

/// Registers a new customer account and logs them in.
///
/// The duplicate-email check happens HERE, before dispatch: the container
/// itself appends duplicates without complaint.
pub fn register(store: &Store, draft: NewUser) -> Result<User, ApiError> {
    debug!(email = %draft.email, "register command");

    validation::validate_required("name", &draft.name)?;
    validation::validate_email(&draft.email)?;
    validation::validate_password(&draft.password)?;
    validation::validate_required("phone", &draft.phone)?;
    validation::validate_required("address", &draft.address)?;

    let state = store.snapshot();
    if state.users.iter().any(|u| u.email == draft.email) {
        return Err(CoreError::DuplicateEmail(draft.email).into());
    }

    let next = store.dispatch(Action::RegisterUser(draft));
    let user = next
        .current_user
        .clone()
        .ok_or_else(|| ApiError::new(crate::error::ErrorCode::Internal, "registration failed"))?;

    info!(user_id = %user.id, "customer registered");
    Ok(user)
}

/// Logs the customer out. The admin flag is untouched.
pub fn logout(store: &Store) {
    debug!("logout command");
    store.dispatch(Action::Logout);
}

/// Logs the admin in against the fixed credential pair.
pub fn admin_login(store: &Store, email: &str, password: &str) -> Result<(), ApiError> {
    debug!(email, "admin_login command");

    if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
        return Err(CoreError::InvalidCredentials.into());
    }

    store.dispatch(Action::SetAdminAuthenticated(true));
    info!("admin logged in");
    Ok(())
}

/// Clears the admin flag. Customer session is untouched.
pub fn admin_logout(store: &Store) {
    debug!("admin_logout command");
    store.dispatch(Action::SetAdminAuthenticated(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_state;

    fn draft(email: &str) -> NewUser {
        NewUser {
            name: "Imran Khan".to_string(),
            email: email.to_string(),
            phone: "01912345678".to_string(),
            address: "Sylhet, Bangladesh".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn test_login_with_seeded_credentials() {
        let store = Store::new(seed_state());

        let user = login(&store, "rohan@example.com", "rohan123").unwrap();
        assert_eq!(user.name, "Rohan Ahmed");

        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert_eq!(state.current_user.as_ref().unwrap().id, user.id);
    }

    #[test]
    fn test_login_wrong_password_is_rejected() {
        let store = Store::new(seed_state());
        assert!(login(&store, "rohan@example.com", "wrong").is_err());
        assert!(!store.snapshot().is_authenticated);
    }

    #[test]
    fn test_register_assigns_id_and_logs_in() {
        let store = Store::new(seed_state());
        let user = register(&store, draft("imran@example.com")).unwrap();

        assert!(!user.id.is_empty());
        let state = store.snapshot();
        assert_eq!(state.users.len(), 3);
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_register_duplicate_email_rejected_before_dispatch() {
        let store = Store::new(seed_state());

        let err = register(&store, draft("farah@example.com")).unwrap_err();
        assert!(err.message.contains("already exists"));

        // The user list is unchanged: rejection happened before dispatch.
        assert_eq!(store.snapshot().users.len(), 2);
    }

    #[test]
    fn test_register_validates_fields() {
        let store = Store::new(seed_state());

        let mut bad_email = draft("not-an-email");
        bad_email.email = "not-an-email".to_string();
        assert!(register(&store, bad_email).is_err());

        let mut short_password = draft("ok@example.com");
        short_password.password = "123".to_string();
        assert!(register(&store, short_password).is_err());
    }

    #[test]
    fn test_admin_login_fixed_credentials() {
        let store = Store::new(seed_state());

        assert!(admin_login(&store, ADMIN_EMAIL, "nope").is_err());
        assert!(!store.snapshot().is_admin_authenticated);

        admin_login(&store, ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        assert!(store.snapshot().is_admin_authenticated);
    }

    #[test]
    fn test_auth_flags_are_independent() {
        let store = Store::new(seed_state());

        admin_login(&store, ADMIN_EMAIL, ADMIN_PASSWORD).unwrap();
        login(&store, "farah@example.com", "farah123").unwrap();

        // Customer logout must leave the admin flag untouched.
        logout(&store);
        let state = store.snapshot();
        assert!(!state.is_authenticated);
        assert!(state.is_admin_authenticated);

        // And admin logout must leave a customer session untouched.
        login(&store, "farah@example.com", "farah123").unwrap();
        admin_logout(&store);
        let state = store.snapshot();
        assert!(state.is_authenticated);
        assert!(!state.is_admin_authenticated);
    }
}
