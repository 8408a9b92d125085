use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "showroom_ledger=info";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` directives are honoured; when none are set only
/// `showroom_ledger=info` and warnings from the other crates are shown.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("warn,{DEFAULT_DIRECTIVE}")));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
