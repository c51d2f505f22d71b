//! Numeral parsing
//!
//! The parser is deliberately lenient. Besides strict subtractive numerals it
//! accepts run-length spellings ("IIII"), double subtractives ("IIX"), a
//! leading `-` or `N` sign, and the zero words "N", "NULLA" and "NIHIL".
//!
//! Glyphs are folded with two pieces of state: `last`, the value of the
//! previous glyph, and `part`, the value of the group still being built.
//!
//! - equal to `last`: the run grows, `part += cur`
//! - greater than `last`: the whole group is subtracted, `part = cur - part`
//! - less than `last`: the group is done, it moves into `sum` and `part = cur`
//!
//! Subtracting the whole group rather than only the previous glyph is what
//! makes "IIX" read as 8 and "XVIV" as 19.

use std::cmp::Ordering;

use tracing::trace;

use super::digits::{digit_value, is_space};
use crate::error::ParseError;

/// Parse a whole string.
pub fn parse(text: &str) -> Result<i64, ParseError> {
    parse_bytes(text.as_bytes())
}

/// Parse a bounded span of bytes.
///
/// The span does not need to be terminated; nothing past `input.len()` is
/// ever read.
pub fn parse_bytes(input: &[u8]) -> Result<i64, ParseError> {
    let mut pos = skip_space(input, 0);
    if pos == input.len() {
        return Ok(0);
    }

    let negative = match input[pos] {
        b'-' => {
            pos += 1;
            true
        }
        b'n' | b'N' => {
            pos += 1;
            if is_zero_word(&input[pos..]) {
                return Ok(0);
            }
            true
        }
        _ => false,
    };

    pos = skip_space(input, pos);
    let first = input
        .get(pos)
        .copied()
        .and_then(digit_value)
        .ok_or(ParseError::Malformed)?;
    pos += 1;

    let mut sum: i64 = 0;
    let mut part = i64::from(first);
    let mut last = first;

    while let Some(&byte) = input.get(pos) {
        if is_space(byte) {
            break;
        }
        let cur = digit_value(byte).ok_or(ParseError::Malformed)?;
        let value = i64::from(cur);

        part = match cur.cmp(&last) {
            Ordering::Equal => part.checked_add(value),
            Ordering::Greater => value.checked_sub(part),
            Ordering::Less => {
                sum = sum.checked_add(part).ok_or(ParseError::Malformed)?;
                Some(value)
            }
        }
        .ok_or(ParseError::Malformed)?;
        last = cur;
        pos += 1;
    }
    sum = sum.checked_add(part).ok_or(ParseError::Malformed)?;

    if input[pos..].iter().any(|&byte| !is_space(byte)) {
        trace!("trailing garbage at byte {}", pos);
        return Err(ParseError::Malformed);
    }

    if negative {
        sum.checked_neg().ok_or(ParseError::Malformed)
    } else {
        Ok(sum)
    }
}

fn skip_space(input: &[u8], from: usize) -> usize {
    input[from..]
        .iter()
        .position(|&byte| !is_space(byte))
        .map_or(input.len(), |offset| from + offset)
}

/// Whether the text after a leading `N` completes a zero word.
///
/// A bare `N` counts, as do "NULLA" and "NIHIL" in any case. The word must
/// run to the end of the span; anything after it, whitespace included,
/// makes the `N` a sign.
fn is_zero_word(rest: &[u8]) -> bool {
    rest.is_empty() || rest.eq_ignore_ascii_case(b"ulla") || rest.eq_ignore_ascii_case(b"ihil")
}
