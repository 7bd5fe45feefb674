//! # Display Tickers
//!
//! The two time-driven behaviors in the storefront: the rotating hero/
//! featured carousel and the once-per-second discount countdown. Both are
//! periodic, cancellable refresh tasks that READ state and never write it —
//! they live entirely outside the container.
//!
//! Rotation is a pure function of tick count and slide count, so the clock
//! never leaks into the index math.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

use olala_core::views::{self, Countdown};

use crate::state::Store;

/// How often the hero carousel advances (matches the frontend's 5s timer).
pub const CAROUSEL_PERIOD: Duration = Duration::from_secs(5);

/// The countdown refresh cadence.
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

/// The slide to show at a given tick, wrapping around the rotation.
///
/// Returns `None` for an empty rotation.
pub fn carousel_index(tick: u64, slide_count: usize) -> Option<usize> {
    if slide_count == 0 {
        return None;
    }
    Some((tick % slide_count as u64) as usize)
}

/// Spawns the hero carousel ticker.
///
/// Reads the current slide list on every tick — slides added or deleted by
/// the admin join/leave the rotation on the next advance. Cancel by
/// aborting the returned handle.
pub fn spawn_carousel(store: Arc<Store>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        let mut tick: u64 = 0;

        loop {
            ticker.tick().await;

            let state = store.snapshot();
            if let Some(index) = carousel_index(tick, state.hero_slides.len()) {
                debug!(
                    slide = index,
                    title = %state.hero_slides[index].title,
                    "carousel advance"
                );
            }
            tick += 1;
        }
    })
}

/// Spawns the discount countdown ticker.
///
/// Recomputes the remaining time once per second for every discounted
/// product with an end date. Passing the end date freezes the display at
/// "expired"; the discount stays on the product record. Cancel by aborting
/// the returned handle.
pub fn spawn_countdown(store: Arc<Store>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(COUNTDOWN_PERIOD);

        loop {
            ticker.tick().await;

            let state = store.snapshot();
            let now = Utc::now();
            for product in state.products.iter().filter(|p| p.has_discount()) {
                if let Some(end) = product.discount_end_date {
                    match views::discount_countdown(end, now) {
                        Countdown::Remaining {
                            days,
                            hours,
                            minutes,
                            seconds,
                        } => debug!(
                            product = %product.name,
                            remaining = %format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds),
                            "discount countdown"
                        ),
                        Countdown::Expired => debug!(
                            product = %product.name,
                            "discount countdown expired"
                        ),
                    }
                }
            }
        }
    })
}
