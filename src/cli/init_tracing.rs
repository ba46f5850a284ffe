use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr, `RUST_LOG` overrides the `warn` default.
/// Progress lines stay on stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
