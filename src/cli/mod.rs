//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Token classification and routing
//! - Usage text

pub mod args;
pub mod help;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::Cli;
pub use help::generate_usage;
pub use router::{classify, convert_token, run, Outcome, Token};
