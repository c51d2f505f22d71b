//! Glyph table shared by the parser and the formatter.

/// A single numeral glyph and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralValue {
    pub glyph: u8,
    pub value: u16,
}

/// The seven canonical glyphs, ordered by strictly increasing value.
///
/// Even indices hold the powers of ten (I, X, C, M); odd indices hold the
/// five-multiples between them. The formatter relies on this layout.
pub const NUMERALS: [NumeralValue; 7] = [
    NumeralValue { glyph: b'I', value: 1 },
    NumeralValue { glyph: b'V', value: 5 },
    NumeralValue { glyph: b'X', value: 10 },
    NumeralValue { glyph: b'L', value: 50 },
    NumeralValue { glyph: b'C', value: 100 },
    NumeralValue { glyph: b'D', value: 500 },
    NumeralValue { glyph: b'M', value: 1000 },
];

/// Look up the value of a glyph, ignoring case.
///
/// Returns `None` for anything that is not one of `IVXLCDM`.
pub fn digit_value(byte: u8) -> Option<u16> {
    let upper = byte.to_ascii_uppercase();
    NUMERALS
        .iter()
        .find(|numeral| numeral.glyph == upper)
        .map(|numeral| numeral.value)
}

/// Whitespace as the numeral grammar sees it.
///
/// Includes vertical tab, which `u8::is_ascii_whitespace` leaves out.
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
