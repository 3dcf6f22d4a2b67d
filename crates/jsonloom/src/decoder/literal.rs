use super::cursor::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// The literal introduced by `first`, if any.
    pub fn from_first(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Literal::Null),
            b't' => Some(Literal::True),
            b'f' => Some(Literal::False),
            _ => None,
        }
    }

    fn text(self) -> &'static [u8] {
        match self {
            Literal::Null => b"null",
            Literal::True => b"true",
            Literal::False => b"false",
        }
    }

    /// Consumes the literal if the input under the cursor spells it exactly.
    ///
    /// Returns `false` without moving when it does not; the caller reports
    /// the error at the literal's first byte.
    pub fn consume(self, cursor: &mut Cursor<'_>) -> bool {
        let text = self.text();
        if cursor.rest().starts_with(text) {
            cursor.advance(text.len());
            true
        } else {
            false
        }
    }
}
