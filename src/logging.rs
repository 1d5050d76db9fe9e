use tracing_subscriber::EnvFilter;

/// Set up logging for the CLI. Controlled with the `NEXTPUB_LOG` environment
/// variable, e.g. `NEXTPUB_LOG=debug` to see store discovery events.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NEXTPUB_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
