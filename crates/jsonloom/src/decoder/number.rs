//! Number lexing.
//!
//! Accepted: an optional `-` that must be followed by a digit, then digits
//! with at most one `.` among them, then an optional exponent. The exponent
//! is only taken when `e`/`E` is directly followed by a sign and a digit, so
//! `1e5` lexes as `1` and leaves `e5` unread.
//!
//! The matched bytes go through the standard `f64` parser. Overflow yields
//! an infinity, which is an error only when the caller asks for that.
use super::cursor::Cursor;
use crate::error::DecodeError;

pub(crate) fn lex_number(
    cursor: &mut Cursor<'_>,
    reject_non_finite: bool,
) -> Result<f64, DecodeError> {
    let start = cursor.pos();
    let bytes = cursor.rest();

    if bytes.first() == Some(&b'-') && !bytes.get(1).is_some_and(u8::is_ascii_digit) {
        return Err(DecodeError::Syntax(start));
    }

    let mut i = 1;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => {}
            b'.' if seen_dot => return Err(DecodeError::Syntax(start + i)),
            b'.' => seen_dot = true,
            _ => break,
        }
        i += 1;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E'))
        && matches!(bytes.get(i + 1), Some(b'+' | b'-'))
        && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)
    {
        i += 3;
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
    }

    cursor.advance(i);

    // The lexed text is ASCII digits, signs, dots and exponent markers, which
    // the float parser accepts; a failure here degrades to zero.
    let n = core::str::from_utf8(cursor.since(start))
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(0.0);

    if reject_non_finite && !n.is_finite() {
        return Err(DecodeError::NumberOutOfRange(start));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use rstest::rstest;

    use super::*;

    fn lex(input: &[u8]) -> (Result<f64, DecodeError>, usize) {
        let mut c = Cursor::new(input);
        let r = lex_number(&mut c, false);
        (r, c.pos())
    }

    #[rstest]
    #[case(b"0", 0.0, 1)]
    #[case(b"-0", -0.0, 2)]
    #[case(b"100", 100.0, 3)]
    #[case(b"-0.123456789", -0.123_456_789, 12)]
    #[case(b"-1234.3425525e+3", -1_234_342.552_5, 16)]
    #[case(b"-1234.3425525E+3", -1_234_342.552_5, 16)]
    #[case(b"25e-1", 2.5, 5)]
    #[case(b"007", 7.0, 3)]
    #[case(b"1.", 1.0, 2)]
    #[case(b"1,", 1.0, 1)]
    #[case(b"12]", 12.0, 2)]
    fn lexes_numbers(#[case] input: &[u8], #[case] expected: f64, #[case] end: usize) {
        let (r, pos) = lex(input);
        assert_eq!(r, Ok(expected));
        assert_eq!(pos, end);
    }

    #[rstest]
    #[case(b"1e5")]
    #[case(b"1E5")]
    #[case(b"1e+")]
    #[case(b"1e-x")]
    #[case(b"1e")]
    fn exponent_requires_sign_and_digit(#[case] input: &[u8]) {
        let (r, pos) = lex(input);
        assert_eq!(r, Ok(1.0));
        assert_eq!(pos, 1);
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let (r, _) = lex(b"-0");
        assert!(r.unwrap().is_sign_negative());
    }

    #[test]
    fn bare_minus_is_an_error_at_the_sign() {
        assert_eq!(lex(b"-").0, Err(DecodeError::Syntax(0)));
        assert_eq!(lex(b"-a").0, Err(DecodeError::Syntax(0)));
        assert_eq!(lex(b"--1").0, Err(DecodeError::Syntax(0)));
        assert_eq!(lex(b"-.5").0, Err(DecodeError::Syntax(0)));
    }

    #[test]
    fn second_dot_is_an_error_at_the_dot() {
        assert_eq!(lex(b"1.2.3").0, Err(DecodeError::Syntax(3)));
        assert_eq!(lex(b"0..").0, Err(DecodeError::Syntax(2)));
    }

    #[test]
    fn overflow_is_infinite_unless_rejected() {
        let (r, _) = lex(b"1e+400");
        assert_eq!(r, Ok(f64::INFINITY));
        let (r, _) = lex(b"-1e+400");
        assert_eq!(r, Ok(f64::NEG_INFINITY));

        let mut c = Cursor::new(b"1e+400");
        assert_eq!(
            lex_number(&mut c, true),
            Err(DecodeError::NumberOutOfRange(0))
        );
        let mut c = Cursor::new(b"1e-400");
        assert_eq!(lex_number(&mut c, true), Ok(0.0));
    }
}
