//! # OlalaDOT Shell Entry Point
//!
//! Headless demo binary: seeds the store, runs the storefront flows end to
//! end, and logs every state change along the way.
//!
//! ## Usage
//! ```bash
//! # Default (info) logging
//! cargo run -p olala-shell
//!
//! # Watch every dispatch and ticker refresh
//! RUST_LOG=debug cargo run -p olala-shell
//! ```

use tracing::error;

#[tokio::main]
async fn main() {
    olala_shell::init_tracing();

    if let Err(err) = olala_shell::run().await {
        error!(%err, "demo walkthrough failed");
        std::process::exit(1);
    }
}
