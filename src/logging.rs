use tracing_subscriber::EnvFilter;

/// Install the global subscriber, filtered from RUST_LOG. For binaries
/// and tests embedding the library; calling it twice is a no-op.
pub fn init() {
    // route `log` records from dependencies through tracing
    let _ = tracing_log::LogTracer::init();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
