use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Level comes from `RUST_LOG`, falling back to `default_level`. Logs go to
/// stderr so they never interleave with the interactive prompt on stdout.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
