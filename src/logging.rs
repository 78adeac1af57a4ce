use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr; stdout carries the
/// board, history and CSV exports.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    // Already set when a test harness or an embedding program got there first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
