//! String lexing.
//!
//! Bytes between the quotes are copied into the decoder's scratch buffer,
//! escapes are decoded on the way, and the finished contents are copied out
//! into a fresh `String`. The scratch buffer is empty again whenever
//! [`lex_string`] returns, on success and on error.
//!
//! Raw bytes are copied as they are. If the result is not valid UTF-8 the
//! offending sequences become U+FFFD, the same substitution used for unpaired
//! surrogate escapes.
use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

use super::{
    cursor::Cursor,
    escape::{combine_surrogates, hex4, is_surrogate, unit_to_char},
};
use crate::error::DecodeError;

/// Lexes the string whose opening quote is under the cursor and leaves the
/// cursor just past the closing quote.
pub(crate) fn lex_string(
    cursor: &mut Cursor<'_>,
    scratch: &mut Vec<u8>,
    reject_unknown_escapes: bool,
) -> Result<String, DecodeError> {
    debug_assert_eq!(cursor.peek(), Some(b'"'));
    scratch.clear();
    let result = lex_into(cursor, scratch, reject_unknown_escapes)
        .map(|()| scratch.to_str_lossy().into_owned());
    scratch.clear();
    result
}

fn lex_into(
    cursor: &mut Cursor<'_>,
    scratch: &mut Vec<u8>,
    reject_unknown_escapes: bool,
) -> Result<(), DecodeError> {
    cursor.advance(1);
    loop {
        let rest = cursor.rest();
        let run = rest
            .iter()
            .position(|&b| b == b'"' || b == b'\\')
            .unwrap_or(rest.len());
        scratch.extend_from_slice(&rest[..run]);
        cursor.advance(run);

        match cursor.peek() {
            None => return Err(DecodeError::Syntax(cursor.pos())),
            Some(b'"') => {
                cursor.advance(1);
                return Ok(());
            }
            Some(_) => {
                cursor.advance(1);
                unescape(cursor, scratch, reject_unknown_escapes)?;
            }
        }
    }
}

/// Decodes the escape whose backslash was just consumed.
fn unescape(
    cursor: &mut Cursor<'_>,
    scratch: &mut Vec<u8>,
    reject_unknown_escapes: bool,
) -> Result<(), DecodeError> {
    let Some(b) = cursor.peek() else {
        return Err(DecodeError::Syntax(cursor.pos()));
    };
    match b {
        b'"' | b'\\' | b'/' | b'\'' => scratch.push(b),
        b'r' => scratch.push(b'\r'),
        b'n' => scratch.push(b'\n'),
        b't' => scratch.push(b'\t'),
        b'b' => scratch.push(0x08),
        b'f' => scratch.push(0x0C),
        b'u' => {
            cursor.advance(1);
            let ch = unicode_escape(cursor)?;
            let mut buf = [0; 4];
            scratch.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            return Ok(());
        }
        _ if reject_unknown_escapes => return Err(DecodeError::Syntax(cursor.pos())),
        // dropped along with its backslash
        _ => {}
    }
    cursor.advance(1);
    Ok(())
}

/// Reads the hex digits of a `\u` escape, plus a second `\u` escape when the
/// first unit is a surrogate.
fn unicode_escape(cursor: &mut Cursor<'_>) -> Result<char, DecodeError> {
    let unit = read_unit(cursor)?;
    if !is_surrogate(unit) {
        return Ok(unit_to_char(unit));
    }
    if cursor.peek() != Some(b'\\') || cursor.peek_at(1) != Some(b'u') {
        return Ok(char::REPLACEMENT_CHARACTER);
    }
    cursor.advance(2);
    let low = read_unit(cursor)?;
    Ok(combine_surrogates(unit, low))
}

fn read_unit(cursor: &mut Cursor<'_>) -> Result<u16, DecodeError> {
    let unit = hex4(cursor.rest()).ok_or(DecodeError::Syntax(cursor.pos()))?;
    cursor.advance(4);
    Ok(unit)
}
