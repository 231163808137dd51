use tracing_subscriber::{EnvFilter, fmt};

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Defaults to `statboard=debug` so failure diagnostics and payloads show up.
/// Calling it again is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statboard=debug"));
    let _ = fmt().with_env_filter(filter).try_init();
}
