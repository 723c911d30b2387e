//! Logging setup for the binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `QUILL_LOG=quill_eval=debug`.
pub const LOG_ENV: &str = "QUILL_LOG";

/// Install the global subscriber.
///
/// Logs go to stderr as an indented span tree, filtered by `QUILL_LOG`
/// (default `warn`). Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true);

        if tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .is_err()
        {
            // Someone else (a test harness, an embedder) got there first.
            tracing::debug!("tracing subscriber already installed");
        }
    });
}
