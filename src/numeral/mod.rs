//! Roman numeral conversion core
//!
//! Two independent, stateless conversions:
//! - `parse` - numeral text to integer, lenient about spelling
//! - `format` - integer to canonical numeral text in a bounded buffer
//!
//! Both are pure functions over their arguments and safe to call from any
//! number of threads at once.

pub mod digits;
pub mod format;
pub mod parse;

pub use digits::{digit_value, NumeralValue, NUMERALS};
pub use format::{format_into, to_roman, to_roman_with_capacity, DEFAULT_CAPACITY};
pub use parse::{parse, parse_bytes};
