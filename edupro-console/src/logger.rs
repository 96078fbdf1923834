//! Logging Infrastructure
//!
//! Logs go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "edupro=warn,edupro_client=warn";

/// Initialize the logger
pub fn init_logger(verbose: bool) {
    let fallback = if verbose {
        "edupro=debug,edupro_client=debug"
    } else {
        DEFAULT_FILTER
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .without_time()
        .init();
}
