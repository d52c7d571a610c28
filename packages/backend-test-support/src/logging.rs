//! One-time tracing setup for test binaries.
//!
//! Unit tests install it from a `ctor` in the engine's `lib.rs`; each
//! integration test binary does the same from `tests/common/mod.rs`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default filter when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

fn filter_from_env() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the test subscriber. Safe to call any number of times.
///
/// Output goes through the libtest writer so it is captured per test, and
/// timestamps are left out so runs diff cleanly.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
        tracing::debug!("test logging ready");
    });
}
