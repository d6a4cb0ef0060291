use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber for hosts that do not bring their own.
/// Debug mode widens this crate's events to `debug` and lets `RUST_LOG`
/// take over; otherwise the filter is pinned to `info` so a stray
/// environment variable cannot flood an interactive session with
/// per-sample output.
pub fn init(debug: bool) {
    let fallback = if debug { "silkweave=debug,info" } else { "info" };

    let filter = match (debug, EnvFilter::try_from_default_env()) {
        (true, Ok(env)) => env,
        _ => EnvFilter::new(fallback),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
