//! Unified test logging initialization.
//!
//! One entry point for every test binary (unit and integration) so tracing
//! output behaves the same everywhere.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Install the test tracing subscriber.
///
/// Idempotent and race-safe; call it from as many test binaries as needed.
/// Level selection: `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
///
/// Output goes through `with_test_writer()` so cargo/nextest capture works,
/// and timestamps are suppressed to keep assertions on log output stable.
pub fn init() {
    INSTALLED.get_or_init(|| {
        fmt()
            .with_env_filter(env_filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}

fn env_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}
