//! Error handling utilities
//!
//! Per-token conversion failures never reach this point; they are reported
//! inline and only affect the exit status. What is left is I/O trouble.

use tracing::error;

/// Handle fatal errors and exit with a failure status
///
/// - `verbose = 0`: the top-level message only
/// - `verbose >= 1`: the full error chain as well
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(1)
}
