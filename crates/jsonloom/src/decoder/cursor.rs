/// Read position within the input.
///
/// The position only moves forward. Everything the decoder reports is a byte
/// offset produced here.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The byte under the cursor.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// The byte `offset` bytes past the cursor.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Everything from the cursor to the end of input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.pos.min(self.input.len())..]
    }

    /// The input between `start` and the cursor.
    #[inline]
    pub fn since(&self, start: usize) -> &'a [u8] {
        &self.input[start..self.pos]
    }

    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.input.len());
        self.pos += n;
    }

    /// Skips space, tab, carriage return and line feed. Nothing else counts
    /// as whitespace.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn skip_whitespace_is_idempotent() {
        let mut c = Cursor::new(b" \t\r\n x");
        c.skip_whitespace();
        assert_eq!(c.pos(), 5);
        c.skip_whitespace();
        assert_eq!(c.pos(), 5);
        assert_eq!(c.peek(), Some(b'x'));
    }

    #[test]
    fn other_whitespace_is_significant() {
        // vertical tab, form feed, and a UTF-8 no-break space
        for input in [&b"\x0bx"[..], b"\x0cx", "\u{a0}x".as_bytes()] {
            let mut c = Cursor::new(input);
            c.skip_whitespace();
            assert_eq!(c.pos(), 0);
        }
    }

    #[test]
    fn peeks_stop_at_end() {
        let mut c = Cursor::new(b"ab");
        assert_eq!(c.peek_at(1), Some(b'b'));
        assert_eq!(c.peek_at(2), None);
        c.advance(2);
        assert!(c.is_at_end());
        assert_eq!(c.peek(), None);
        assert!(c.rest().is_empty());
        assert_eq!(c.since(0), b"ab");
    }
}
