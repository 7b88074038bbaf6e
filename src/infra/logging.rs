use tracing_subscriber::EnvFilter;

/// Default filter: our own events at info, per-request spans from the HTTP layer at debug.
const DEFAULT_FILTER: &str = "info,tower_http=debug";

pub fn init() {
    // RUST_LOG wins when it parses; a bad directive falls back to the default.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
