//! Shared logging setup for Parley binaries.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_LOG_FILTER: &str = "parley=info,parley_chat=info,parley_classifier=info";
const VERBOSE_LOG_FILTER: &str = "parley=debug,parley_chat=debug,parley_classifier=debug";

/// Initialize tracing with stderr output.
///
/// `RUST_LOG` takes precedence over both defaults; `verbose` only raises the
/// fallback filter.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init()?;

    Ok(())
}
