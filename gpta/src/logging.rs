//! Diagnostics on stderr.
//!
//! Command output goes to stdout untouched; everything logged here goes to
//! stderr so the two never mix in a pipeline.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the filter is `warn`, raised to
/// `gpta=info` in verbose mode so executed commands and exit codes are shown.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose { "warn,gpta=info" } else { "warn" }
}
