//! Process-wide tracing for the `tammany` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,tammany=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install one-line JSON output. Calling it again keeps the first
/// subscriber.
pub fn init_tracing() {
    let json = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(false)
        .with_current_span(true)
        .with_span_list(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter())
        .with(json)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = DEFAULT_FILTER, "Tracing initialized");
    }
}
