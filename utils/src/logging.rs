//! Tracing setup for test binaries.
//!
//! Stand-ins log their creation at `trace` and the value model logs failed
//! meta-operations at `debug`. Run tests with `RUST_LOG=standin_core=trace`
//! to see the stand-in graph a test actually walked.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install a subscriber that writes through the test harness's capture.
///
/// Safe to call from every test: only the first call installs anything.
pub fn init_test_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(env_filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("test tracing initialized");
    }
}
