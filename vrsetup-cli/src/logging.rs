//! tracing subscriber setup shared by both binaries
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the repeat count of `-v` to a log level
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber; stdout is reserved for generated output.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::new(level_for(verbosity).to_string());
    // A subscriber may already be installed when running under a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
