//! Application configuration
//!
//! This module handles application-wide configuration settings.

use crate::numeral::DEFAULT_CAPACITY;

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Output buffer size in bytes, terminator included
    pub capacity: usize,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Set the output buffer size
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
