#![doc(test(attr(deny(warnings))))]

//! Report Core turns a user's raw expense history into derived analytics:
//! period totals and averages, category breakdowns, daily and monthly
//! trends, budget utilization, calendar heatmaps, and spending insights.

pub mod core;
pub mod domain;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Report Core tracing initialized.");
    });
}
