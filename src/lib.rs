//! # Roman
//!
//! Convert between integers and Roman numerals, in both directions.
//!
//! ## Usage
//!
//! ```bash
//! roman [--verbose] [--capacity BYTES] [NUMBER]... [ROMAN NUMERAL]...
//! ```
//!
//! ```
//! assert_eq!(roman::parse("XIIII"), Ok(14));
//! assert_eq!(roman::to_roman(1994).as_deref(), Ok("MCMXCIV"));
//! ```
//!
//! ## Modules
//!
//! - `numeral` - The conversion core: glyph table, parser and formatter
//! - `error` - Error types for both conversion directions
//! - `app` - Configuration, logging and fatal error handling for the binary
//! - `cli` - Argument parsing and per-token routing
pub mod app;
pub mod cli;
pub mod error;
pub mod numeral;


pub use error::{ConversionError, FormatError, ParseError};
pub use numeral::{
    format_into, parse, parse_bytes, to_roman, to_roman_with_capacity, DEFAULT_CAPACITY,
};
