//! Tracing setup
//!
//! Library code only emits events; the binary decides whether anything is
//! printed by calling [`init_tracing`].

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default directive when `RUST_LOG` does not say otherwise
const DEFAULT_DIRECTIVE: &str = "fintrack=warn";

/// Initializes the global tracing subscriber, writing to stderr
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // Another subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
