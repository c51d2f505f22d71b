//! Token routing and execution
//!
//! Each command-line token is routed on its shape alone: an optionally
//! signed run of decimal digits is formatted as a numeral, anything else is
//! parsed as one. A failing token prints a fixed message and marks the run
//! as failed, but never stops the remaining tokens.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::error::{ConversionError, ParseError};
use crate::numeral::{parse, to_roman_with_capacity};

/// How a single command-line token will be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Decimal integer, to be formatted
    Number(i64),
    /// Decimal digits that do not fit in an `i64`
    OutOfRange,
    /// Anything else, to be parsed
    Numeral(&'a str),
}

/// Overall result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Classify a token with a strict signed-decimal scan.
///
/// Only `-?[0-9]+` counts as a number. No `+`, no whitespace, no empty
/// digit run.
pub fn classify(token: &str) -> Token<'_> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Token::Numeral(token);
    }
    match token.parse::<i64>() {
        Ok(value) => Token::Number(value),
        Err(_) => Token::OutOfRange,
    }
}

/// Convert one token, producing the line to print on success.
pub fn convert_token(token: &str, capacity: usize) -> Result<String, ConversionError> {
    match classify(token) {
        Token::Number(value) => Ok(to_roman_with_capacity(value, capacity)?),
        Token::Numeral(text) => Ok(parse(text)?.to_string()),
        Token::OutOfRange => Err(ParseError::Malformed.into()),
    }
}

/// Convert every token in order, writing one line per token to `out`.
pub fn run<W: Write>(values: &[String], capacity: usize, out: &mut W) -> Result<Outcome> {
    let mut outcome = Outcome::Success;

    for token in values {
        trace!("Routing token {:?} as {:?}", token, classify(token));
        let line = match convert_token(token, capacity) {
            Ok(line) => line,
            Err(e) => {
                debug!("Conversion of {:?} failed: {}", token, e);
                outcome = Outcome::Failure;
                e.user_message().to_string()
            }
        };
        writeln!(out, "{line}").context("Failed to write conversion result")?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::DEFAULT_CAPACITY;

    fn run_tokens(tokens: &[&str], capacity: usize) -> (Outcome, String) {
        let values: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let mut out = Vec::new();
        let outcome = run(&values, capacity, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify("0"), Token::Number(0));
        assert_eq!(classify("14"), Token::Number(14));
        assert_eq!(classify("-10"), Token::Number(-10));
        assert_eq!(classify("-1"), Token::Number(-1));
        assert_eq!(classify("-9223372036854775808"), Token::Number(i64::MIN));
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify("9223372036854775808"), Token::OutOfRange);
        assert_eq!(classify("-99999999999999999999"), Token::OutOfRange);
    }

    #[test]
    fn test_classify_numerals() {
        for token in ["XIV", "-X", "", "-", "+5", " 5", "5 ", "1X", "--5"] {
            assert_eq!(classify(token), Token::Numeral(token), "token {token:?}");
        }
    }

    #[test]
    fn test_convert_token_both_directions() {
        assert_eq!(convert_token("1994", DEFAULT_CAPACITY).as_deref(), Ok("MCMXCIV"));
        assert_eq!(convert_token("-10", DEFAULT_CAPACITY).as_deref(), Ok("-X"));
        assert_eq!(convert_token("0", DEFAULT_CAPACITY).as_deref(), Ok("N"));
        assert_eq!(convert_token("MCMXCIV", DEFAULT_CAPACITY).as_deref(), Ok("1994"));
        assert_eq!(convert_token("-X", DEFAULT_CAPACITY).as_deref(), Ok("-10"));
        assert_eq!(convert_token("nulla", DEFAULT_CAPACITY).as_deref(), Ok("0"));
    }

    #[test]
    fn test_convert_token_errors() {
        assert_eq!(
            convert_token("IIZ", DEFAULT_CAPACITY),
            Err(ConversionError::Parse(ParseError::Malformed))
        );
        assert_eq!(
            convert_token("99999999999999999999", DEFAULT_CAPACITY),
            Err(ConversionError::Parse(ParseError::Malformed))
        );
        assert_eq!(
            convert_token("4000", 4),
            Err(ConversionError::Format(crate::error::FormatError::BufferTooSmall))
        );
    }

    #[test]
    fn test_run_all_succeed() {
        let (outcome, out) = run_tokens(&["4", "XIV", "N"], DEFAULT_CAPACITY);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "IV\n14\n0\n");
    }

    #[test]
    fn test_run_continues_after_failure() {
        let (outcome, out) = run_tokens(&["IIZ", "9", "1000000"], DEFAULT_CAPACITY);
        assert_eq!(outcome, Outcome::Failure);
        assert_eq!(out, "Invalid input.\nIX\nResult is too long.\n");
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_run_respects_capacity() {
        let (outcome, out) = run_tokens(&["4000"], 5);
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out, "MMMM\n");
    }

    #[test]
    fn test_run_reports_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let values = vec!["I".to_string()];
        let err = run(&values, DEFAULT_CAPACITY, &mut Broken).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
