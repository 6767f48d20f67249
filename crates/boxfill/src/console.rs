//! Console output for search runs.
//!
//! Installs a `tracing` subscriber that prints engine and driver events.
//! `RUST_LOG` overrides the default filter.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVES: &str = "boxfill=info,boxfill_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. A global
/// subscriber installed elsewhere is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init();
    });
}
