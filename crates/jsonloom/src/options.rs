/// The nesting depth allowed by [`DecoderOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the decoder.
///
/// The defaults decode exactly the grammar described in the crate docs and
/// bound nesting at [`DEFAULT_MAX_DEPTH`].
///
/// # Examples
///
/// ```rust
/// use jsonloom::{Decoder, DecoderOptions};
///
/// let options = DecoderOptions {
///     max_depth: Some(4),
///     reject_non_finite_numbers: true,
///     ..Default::default()
/// };
/// let value = Decoder::new(b"[[1]]").with_options(options).decode();
/// assert!(value.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// How many arrays and objects may be open at once.
    ///
    /// Each container recurses once through the decoder, so this bounds stack
    /// usage on adversarial input. Opening one container too many fails with
    /// [`DecodeError::DepthLimitExceeded`](crate::DecodeError::DepthLimitExceeded)
    /// at the opening bracket. `None` removes the limit.
    ///
    /// # Default
    ///
    /// `Some(DEFAULT_MAX_DEPTH)`
    pub max_depth: Option<usize>,

    /// Whether a number literal that overflows `f64` is an error.
    ///
    /// By default `1e+400` silently decodes to infinity. When `true`, it fails
    /// with [`DecodeError::NumberOutOfRange`](crate::DecodeError::NumberOutOfRange)
    /// at the first byte of the literal.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_non_finite_numbers: bool,

    /// Whether an unrecognised escape such as `\x` is an error.
    ///
    /// By default the backslash and the escaped byte are both dropped. When
    /// `true`, the decoder fails with a syntax error at the escaped byte.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_unknown_escapes: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            reject_non_finite_numbers: false,
            reject_unknown_escapes: false,
        }
    }
}
