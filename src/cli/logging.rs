//! Progress logging to stderr.
//!
//! The filter comes from `SEGCLEAN_LOG` (e.g. `SEGCLEAN_LOG=segclean=debug`);
//! without it, `segclean=info`, or `segclean=debug` with `--verbose`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "SEGCLEAN_LOG";

pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "segclean=debug"
    } else {
        "segclean=info"
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
