//! Logging configuration and initialization
//!
//! Logs go to stderr; stdout is reserved for conversion results.

use crate::app::config::AppConfig;
use tracing::{debug, trace};

/// Initialize tracing/logging for the application
pub fn init_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(config.log_level())
        .with_writer(std::io::stderr)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_line_number(config.verbose >= 3)
        .init();

    debug!(
        "roman started with verbosity level {} and capacity {}",
        config.verbose, config.capacity
    );
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}
