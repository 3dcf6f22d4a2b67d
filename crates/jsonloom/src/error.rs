use bstr::ByteSlice;
use thiserror::Error;

/// Why a decode failed, and the byte offset at which it stopped.
///
/// Positions are byte offsets into the original input. When the input ran
/// out in the middle of a value the position is the input length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input is not valid JSON at this byte.
    #[error("syntax error at position {0}")]
    Syntax(usize),
    /// An array or object opened here would nest deeper than the configured
    /// limit.
    #[error("nesting depth limit of {limit} exceeded at position {position}")]
    DepthLimitExceeded {
        /// Offset of the opening `[` or `{`.
        position: usize,
        /// The configured maximum depth.
        limit: usize,
    },
    /// The number starting here does not fit in an `f64`.
    #[error("number out of range at position {0}")]
    NumberOutOfRange(usize),
}

/// A 1-based line and byte column within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number, counting `\n` separators.
    pub line: usize,
    /// Byte column within the line.
    pub column: usize,
}

impl DecodeError {
    /// The byte offset the error is anchored at.
    #[must_use]
    pub fn position(&self) -> usize {
        match *self {
            DecodeError::Syntax(position)
            | DecodeError::NumberOutOfRange(position)
            | DecodeError::DepthLimitExceeded { position, .. } => position,
        }
    }

    /// Returns `true` for plain grammar errors.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, DecodeError::Syntax(_))
    }

    /// Translates the error position into a line and column of `input`.
    ///
    /// `input` should be the buffer that produced the error; positions past
    /// its end are clamped.
    ///
    /// ```
    /// use jsonloom::decode;
    ///
    /// let input = b"[1,\n 2,\n ]";
    /// let err = decode(input).unwrap_err();
    /// let loc = err.location(input);
    /// assert_eq!((loc.line, loc.column), (3, 2));
    /// ```
    #[must_use]
    pub fn location(&self, input: &[u8]) -> Location {
        let before = &input[..self.position().min(input.len())];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = match before.rfind_byte(b'\n') {
            Some(nl) => before.len() - nl,
            None => before.len() + 1,
        };
        Location { line, column }
    }
}
