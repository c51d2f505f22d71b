//! Numeral formatting
//!
//! Output is always strict subtractive form. Each power-of-ten tier
//! (thousands, hundreds, tens, ones) is written on its own; a 4 or 9 in the
//! lower three tiers becomes a subtractive pair. Thousands have no glyph
//! above M to pair with, so they are written as a plain run of `M` whose
//! length is limited only by the buffer.

use super::digits::NUMERALS;
use crate::error::FormatError;

/// Buffer size used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 256;

/// Index of `M`, the top power-of-ten glyph.
const TOP_TIER: usize = NUMERALS.len() - 1;

/// Bounded writer over a caller-owned buffer.
///
/// Every write keeps one byte free for the terminator.
struct NumeralWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> NumeralWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    fn reserve(&self, count: u64) -> Result<usize, FormatError> {
        let free = (self.buf.len() - self.len) as u64;
        if count >= free {
            return Err(FormatError::BufferTooSmall);
        }
        Ok(count as usize)
    }

    fn push(&mut self, byte: u8) -> Result<(), FormatError> {
        self.reserve(1)?;
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    fn push_pair(&mut self, first: u8, second: u8) -> Result<(), FormatError> {
        self.reserve(2)?;
        self.buf[self.len] = first;
        self.buf[self.len + 1] = second;
        self.len += 2;
        Ok(())
    }

    fn push_run(&mut self, byte: u8, count: u64) -> Result<(), FormatError> {
        let count = self.reserve(count)?;
        self.buf[self.len..self.len + count].fill(byte);
        self.len += count;
        Ok(())
    }

    fn finish(self) -> usize {
        self.buf[self.len] = 0;
        self.len
    }
}

/// Write `value` as a numeral into `buf`, followed by a NUL byte.
///
/// Returns the numeral's length, not counting the terminator. On
/// [`FormatError::BufferTooSmall`] the buffer holds whatever was written
/// before the failing tier.
pub fn format_into(value: i64, buf: &mut [u8]) -> Result<usize, FormatError> {
    if buf.is_empty() {
        return Err(FormatError::BufferTooSmall);
    }

    let mut writer = NumeralWriter::new(buf);
    if value == 0 {
        writer.push(b'N')?;
        return Ok(writer.finish());
    }
    if value < 0 {
        writer.push(b'-')?;
    }

    let mut remaining = value.unsigned_abs();
    for rank in (0..NUMERALS.len()).rev().step_by(2) {
        let base = NUMERALS[rank];
        let tier_value = u64::from(base.value);
        let digit = remaining / tier_value;
        remaining %= tier_value;

        if digit == 0 {
            continue;
        }

        if rank != TOP_TIER && (digit == 4 || digit == 9) {
            // 4 pairs with the next glyph up, 9 with the one above that
            let offset = ((digit + 1) / 5) as usize;
            writer.push_pair(base.glyph, NUMERALS[rank + offset].glyph)?;
        } else if rank != TOP_TIER && digit >= 5 {
            writer.push(NUMERALS[rank + 1].glyph)?;
            writer.push_run(base.glyph, digit - 5)?;
        } else {
            writer.push_run(base.glyph, digit)?;
        }
    }

    Ok(writer.finish())
}

/// Format `value` using a [`DEFAULT_CAPACITY`] byte buffer.
pub fn to_roman(value: i64) -> Result<String, FormatError> {
    to_roman_with_capacity(value, DEFAULT_CAPACITY)
}

/// Format `value` into a fresh string, as if written to a buffer of
/// `capacity` bytes including the terminator.
pub fn to_roman_with_capacity(value: i64, capacity: usize) -> Result<String, FormatError> {
    let mut buf = vec![0u8; capacity];
    let len = format_into(value, &mut buf)?;
    buf.truncate(len);
    // only ASCII glyphs and '-' are ever written
    Ok(buf.into_iter().map(char::from).collect())
}
