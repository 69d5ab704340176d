use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr tracing subscriber. `RUST_LOG` takes precedence over
/// the verbosity flag.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "cnfmt=debug" } else { "cnfmt=warn" };

    // Keep whichever subscriber was installed first.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
