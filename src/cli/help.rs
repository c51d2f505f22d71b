//! Help text generation and utilities

use crate::cli::args::Cli;
use clap::CommandFactory;

/// Generate the one-line usage summary
pub fn generate_usage() -> String {
    Cli::command().render_usage().to_string()
}
