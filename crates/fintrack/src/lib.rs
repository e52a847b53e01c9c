//! fintrack
//!
//! Personal finance tracking core: a transaction/goal record store plus the
//! pure derivations (totals, category breakdown, monthly trend, goal
//! progress) a front end renders. Presentation is a separate concern; this
//! crate exposes plain function calls over in-memory snapshots.

pub mod config;
pub mod tracker;

pub use config::TrackerConfig;
pub use tracker::FinanceTracker;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("fintrack=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
