use thiserror::Error;

/// Failure to read a numeral.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown glyph, missing digits, trailing garbage, or a value that does
    /// not fit in an `i64`.
    #[error("malformed numeral")]
    Malformed,
}

/// Failure to write a numeral.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The destination cannot hold the numeral plus its terminator.
    #[error("buffer too small for numeral")]
    BufferTooSmall,
}

/// Either side of a conversion, for callers that route tokens both ways.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ParseError {
    /// Message shown to users of the command-line tool
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Malformed => "Invalid input.",
        }
    }
}

impl FormatError {
    /// Message shown to users of the command-line tool
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BufferTooSmall => "Result is too long.",
        }
    }
}

impl ConversionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.user_message(),
            Self::Format(e) => e.user_message(),
        }
    }
}
