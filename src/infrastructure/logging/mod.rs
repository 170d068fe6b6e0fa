// Logging module - Logging infrastructure
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// `RUST_LOG` wins when set; otherwise verbose mode surfaces the per-entry
/// skip/error diagnostics and quiet mode only warnings. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "unsuspend=debug"
    } else {
        "unsuspend=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_reentrant() {
        init_logging(false);
        init_logging(true);
    }
}
