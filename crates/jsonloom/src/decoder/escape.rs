//! Helpers for `\uXXXX` escapes.
//!
//! JSON writes characters outside the basic multilingual plane as two UTF-16
//! escapes, a high surrogate followed by a low one. The string lexer reads one
//! code unit with [`hex4`], asks [`is_surrogate`] whether a second unit must
//! follow, and merges the two with [`combine_surrogates`].
//!
//! Nothing here fails on bad surrogates. A unit that cannot become a scalar
//! value turns into U+FFFD.

/// Converts a single ASCII hex digit into its 0..=15 value.
#[inline]
fn hex_val(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'a'..=b'f' => Some(u16::from(b - b'a') + 10),
        b'A'..=b'F' => Some(u16::from(b - b'A') + 10),
        _ => None,
    }
}

/// Reads the four hex digits at the start of `digits` as one UTF-16 code
/// unit.
///
/// Returns `None` if fewer than four bytes are available or any of them is
/// not a hex digit.
#[inline]
pub(crate) fn hex4(digits: &[u8]) -> Option<u16> {
    let digits = digits.get(..4)?;
    digits
        .iter()
        .try_fold(0u16, |acc, &b| Some((acc << 4) | hex_val(b)?))
}

/// High and low halves both count.
#[inline]
pub(crate) fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

/// A code unit outside the surrogate range as a `char`.
#[inline]
pub(crate) fn unit_to_char(unit: u16) -> char {
    char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Merges a high and a low surrogate. Any other pairing is U+FFFD.
#[inline]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> char {
    if !(0xD800..0xDC00).contains(&high) || !(0xDC00..0xE000).contains(&low) {
        return char::REPLACEMENT_CHARACTER;
    }
    let code = 0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use quickcheck_macros::quickcheck;

    use super::*;

    #[quickcheck]
    fn hex4_reads_any_formatted_unit(unit: u16, upper: bool) -> bool {
        let text = if upper {
            format!("{unit:04X}")
        } else {
            format!("{unit:04x}")
        };
        hex4(text.as_bytes()) == Some(unit)
    }

    #[quickcheck]
    fn non_surrogates_map_to_themselves(unit: u16) -> bool {
        is_surrogate(unit) || u32::from(unit_to_char(unit)) == u32::from(unit)
    }

    #[test]
    fn basic_decoding() {
        assert_eq!(hex4(b"0041"), Some(0x41));
        assert_eq!(unit_to_char(0x41), 'A');
    }

    #[test]
    fn mixed_case_hex() {
        assert_eq!(hex4(b"AbCd"), Some(0xABCD));
        assert_eq!(hex4(b"abcd\""), Some(0xABCD));
    }

    #[test]
    fn short_or_invalid_digits() {
        assert_eq!(hex4(b"004"), None);
        assert_eq!(hex4(b"00G1"), None);
        assert_eq!(hex4(b""), None);
    }

    #[test]
    fn surrogate_ranges() {
        assert!(is_surrogate(0xD800));
        assert!(is_surrogate(0xDFFF));
        assert!(!is_surrogate(0xD7FF));
        assert!(!is_surrogate(0xE000));
    }

    #[test]
    fn pairs_combine() {
        assert_eq!(combine_surrogates(0xD83E, 0xDD2A), '\u{1F92A}');
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), '\u{10FFFF}');
    }

    #[test]
    fn bad_pairs_are_replaced() {
        assert_eq!(combine_surrogates(0xDC00, 0xD800), char::REPLACEMENT_CHARACTER);
        assert_eq!(combine_surrogates(0xD800, 0x0041), char::REPLACEMENT_CHARACTER);
        assert_eq!(combine_surrogates(0xD800, 0xD800), char::REPLACEMENT_CHARACTER);
    }
}
