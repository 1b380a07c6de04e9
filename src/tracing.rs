//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `PATE_LOG=pate_apriori=debug`.
pub const LOG_ENV: &str = "PATE_LOG";

const DEFAULT_FILTER: &str = "pate_apriori=info,pate=info";

/// Installs the global subscriber. Later calls are no-ops.
///
/// Falls back to `pate_apriori=info,pate=info` when `PATE_LOG` is unset or invalid.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
