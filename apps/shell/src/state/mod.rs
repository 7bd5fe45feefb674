//! # State Module
//!
//! Owns the application store for the shell.
//!
//! There is exactly one state object in this application — the
//! [`store::Store`] wrapping the olala-core aggregate — and exactly one way
//! to change it: [`store::Store::dispatch`]. Commands receive the store by
//! reference; nothing holds ambient global state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Architecture                                   │
//! │                                                                         │
//! │   commands ──► dispatch(action) ─┐                                      │
//! │                                  ▼                                      │
//! │                     ┌──────────────────────┐                            │
//! │                     │ Mutex<Arc<AppState>> │  single writer             │
//! │                     └──────────┬───────────┘                            │
//! │                                │ transition(&state, action)             │
//! │                                ▼                                        │
//! │                     ┌──────────────────────┐                            │
//! │                     │  watch::Sender       │  snapshot fan-out          │
//! │                     └──────────┬───────────┘                            │
//! │                                ▼                                        │
//! │          subscribers (render loop, tickers, logger)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod store;

pub use store::Store;
