//! CLI argument structures
//!
//! Short flags are kept to `-h` only. Letters such as `-v` or `-x` are
//! perfectly good negative numerals and must reach the converter untouched.

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::app::AppConfig;
use crate::numeral::DEFAULT_CAPACITY;

/// Largest output buffer the tool will allocate
pub const MAX_CAPACITY: usize = 1 << 20;

/// Convert numbers to Roman numerals and back
#[derive(Parser, Debug)]
#[command(name = "roman")]
#[command(
    about = "roman - Convert numbers to Roman numerals and Roman numerals to numbers",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output (repeat for trace)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output buffer size in bytes, including the terminator
    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_CAPACITY,
        value_parser = clap::value_parser!(u64)
            .range(1..=MAX_CAPACITY as u64)
            .map(|v| v as usize)
    )]
    pub capacity: usize,

    /// Decimal numbers to format, or numerals to parse
    #[arg(value_name = "NUMBER|NUMERAL", allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig::new(self.verbose).with_capacity(self.capacity)
    }
}
