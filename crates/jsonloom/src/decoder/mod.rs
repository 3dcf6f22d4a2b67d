//! Single-pass recursive-descent decoder.
//!
//! Overview
//! - [`Decoder`] owns a [`Cursor`] over the input, a scratch buffer shared by
//!   every string it lexes, and one builder each for arrays and objects.
//! - `parse_value` is the only recursion point: it skips whitespace, looks at
//!   one byte, hands off to the matching lexer or container parser, and skips
//!   trailing whitespace. Arrays and objects call it once per element.
//! - Containers are never built directly. Every `[` and `{` goes through the
//!   registered [`ArrayBuilder`] / [`ObjectBuilder`], so nested values come
//!   out in the caller's shape at every depth.
//!
//! Errors
//! - Every failure is returned immediately as a [`DecodeError`] carrying the
//!   byte offset of the first offending byte, or the input length when the
//!   input ends inside a value. There is no recovery and no partial value.
//!
//! Container grammar
//! - After the opening bracket the parser is in one of three states: before
//!   the first item (closer allowed), after a comma (item required), or after
//!   an item (comma or closer required). A violation is reported at the byte
//!   that broke the rule, so `[1,]` fails at the `]` and `[,1]` at the `,`.
mod cursor;
mod escape;
mod literal;
mod number;
mod string;

use alloc::{string::String, vec::Vec};
use core::marker::PhantomData;

use cursor::Cursor;
use literal::Literal;

use crate::{
    builder::{ArrayBuilder, ArrayHook, GenericArray, GenericObject, ObjectBuilder, ObjectHook},
    error::DecodeError,
    options::DecoderOptions,
    value::{Generic, Shape, Value},
};

/// Initial scratch capacity; most keys and short strings fit without growing.
const SCRATCH_CAPACITY: usize = 128;

/// A one-shot JSON decoder over a byte buffer.
///
/// `S` is the [`Shape`] of the produced values, `A` and `O` the builders for
/// its arrays and objects. [`Decoder::new`] decodes into the [`Generic`]
/// shape; [`Decoder::with_shape`] starts from any other shape, after which
/// hooks for one or both container kinds are attached.
///
/// # Examples
///
/// ```
/// use jsonloom::{Decoder, Value};
///
/// let value = Decoder::new(br#"{"a": [true, null]}"#).decode().unwrap();
/// let Value::Object(map) = value else { panic!() };
/// assert_eq!(map["a"], Value::Array(vec![Value::Boolean(true), Value::Null]));
/// ```
///
/// Decoding straight into a caller-defined array type:
///
/// ```
/// use jsonloom::{Decoder, Map, Shape, Value};
///
/// #[derive(Debug, Clone, PartialEq, Default)]
/// struct Sum(f64);
///
/// struct Summed;
///
/// impl Shape for Summed {
///     type Array = Sum;
///     type Object = Map<Summed>;
/// }
///
/// let value = Decoder::<Summed>::with_shape(b"[1, 2, 3.5]")
///     .with_array_hook(Sum::default, |Sum(total), _index, item| {
///         Sum(total + item.as_f64().unwrap_or(0.0))
///     })
///     .decode()
///     .unwrap();
/// assert_eq!(value, Value::Array(Sum(6.5)));
/// ```
pub struct Decoder<'a, S: Shape = Generic, A = GenericArray, O = GenericObject> {
    cursor: Cursor<'a>,
    scratch: Vec<u8>,
    arrays: A,
    objects: O,
    options: DecoderOptions,
    depth: usize,
    _shape: PhantomData<fn() -> S>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder producing [`Generic`] values.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Decoder::with_shape(input)
    }
}

impl<'a, S: Shape> Decoder<'a, S> {
    /// Creates a decoder producing values of shape `S`, using the generic
    /// builders until hooks are attached.
    #[must_use]
    pub fn with_shape(input: &'a [u8]) -> Self {
        Decoder {
            cursor: Cursor::new(input),
            scratch: Vec::with_capacity(SCRATCH_CAPACITY),
            arrays: GenericArray,
            objects: GenericObject,
            options: DecoderOptions::default(),
            depth: 0,
            _shape: PhantomData,
        }
    }
}

impl<'a, S: Shape, A, O> Decoder<'a, S, A, O> {
    /// Replaces the decoder options.
    #[must_use]
    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds every array with `builder`.
    #[must_use]
    pub fn with_array_builder<B: ArrayBuilder<S>>(self, builder: B) -> Decoder<'a, S, B, O> {
        Decoder {
            cursor: self.cursor,
            scratch: self.scratch,
            arrays: builder,
            objects: self.objects,
            options: self.options,
            depth: self.depth,
            _shape: PhantomData,
        }
    }

    /// Builds every object with `builder`.
    #[must_use]
    pub fn with_object_builder<B: ObjectBuilder<S>>(self, builder: B) -> Decoder<'a, S, A, B> {
        Decoder {
            cursor: self.cursor,
            scratch: self.scratch,
            arrays: self.arrays,
            objects: builder,
            options: self.options,
            depth: self.depth,
            _shape: PhantomData,
        }
    }

    /// Builds every array with a pair of closures: `empty` runs once per
    /// array, `push` once per element with its index, and each `push`
    /// returns the container handed to the next call.
    #[must_use]
    pub fn with_array_hook<E, P>(self, empty: E, push: P) -> Decoder<'a, S, ArrayHook<E, P>, O>
    where
        E: FnMut() -> S::Array,
        P: FnMut(S::Array, usize, Value<S>) -> S::Array,
    {
        self.with_array_builder(ArrayHook::new(empty, push))
    }

    /// Builds every object with a pair of closures: `empty` runs once per
    /// object, `push` once per member with its key.
    #[must_use]
    pub fn with_object_hook<E, P>(self, empty: E, push: P) -> Decoder<'a, S, A, ObjectHook<E, P>>
    where
        E: FnMut() -> S::Object,
        P: FnMut(S::Object, String, Value<S>) -> S::Object,
    {
        self.with_object_builder(ObjectHook::new(empty, push))
    }
}

impl<S, A, O> Decoder<'_, S, A, O>
where
    S: Shape,
    A: ArrayBuilder<S>,
    O: ObjectBuilder<S>,
{
    /// Decodes the whole input as a single JSON value.
    ///
    /// Whitespace around the value is ignored; anything else after it is a
    /// syntax error at its first byte.
    ///
    /// # Errors
    ///
    /// Returns the first [`DecodeError`] encountered. No value is produced
    /// in that case.
    pub fn decode(mut self) -> Result<Value<S>, DecodeError> {
        tracing::trace!(len = self.cursor.len(), "decoding input");
        let result = self.decode_document();
        if let Err(err) = &result {
            tracing::debug!(position = err.position(), %err, "decode failed");
        }
        result
    }

    fn decode_document(&mut self) -> Result<Value<S>, DecodeError> {
        let value = self.parse_value()?;
        if !self.cursor.is_at_end() {
            return Err(self.syntax_error());
        }
        Ok(value)
    }

    #[inline]
    fn syntax_error(&self) -> DecodeError {
        DecodeError::Syntax(self.cursor.pos())
    }

    fn parse_value(&mut self) -> Result<Value<S>, DecodeError> {
        self.cursor.skip_whitespace();
        let Some(b) = self.cursor.peek() else {
            return Err(self.syntax_error());
        };
        let value = match b {
            b'-' | b'0'..=b'9' => Value::Number(number::lex_number(
                &mut self.cursor,
                self.options.reject_non_finite_numbers,
            )?),
            b'"' => Value::String(self.parse_string()?),
            b'[' => Value::Array(self.parse_array()?),
            b'{' => Value::Object(self.parse_object()?),
            _ => match Literal::from_first(b) {
                Some(literal) if literal.consume(&mut self.cursor) => match literal {
                    Literal::Null => Value::Null,
                    Literal::True => Value::Boolean(true),
                    Literal::False => Value::Boolean(false),
                },
                _ => return Err(self.syntax_error()),
            },
        };
        self.cursor.skip_whitespace();
        Ok(value)
    }

    fn parse_string(&mut self) -> Result<String, DecodeError> {
        string::lex_string(
            &mut self.cursor,
            &mut self.scratch,
            self.options.reject_unknown_escapes,
        )
    }

    /// Consumes an opening bracket, enforcing the depth limit.
    fn enter(&mut self) -> Result<(), DecodeError> {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(DecodeError::DepthLimitExceeded {
                    position: self.cursor.pos(),
                    limit,
                });
            }
        }
        self.depth += 1;
        self.cursor.advance(1);
        self.cursor.skip_whitespace();
        Ok(())
    }

    fn parse_array(&mut self) -> Result<S::Array, DecodeError> {
        self.enter()?;
        let mut array = self.arrays.empty();
        let mut index = 0;
        let mut after_comma = false;
        loop {
            match self.cursor.peek() {
                None => return Err(self.syntax_error()),
                Some(b']') if !after_comma => {
                    self.cursor.advance(1);
                    self.depth -= 1;
                    return Ok(array);
                }
                Some(b',') if index > 0 && !after_comma => {
                    self.cursor.advance(1);
                    after_comma = true;
                }
                Some(_) if index == 0 || after_comma => {
                    let value = self.parse_value()?;
                    array = self.arrays.push(array, index, value);
                    index += 1;
                    after_comma = false;
                }
                Some(_) => return Err(self.syntax_error()),
            }
        }
    }

    fn parse_object(&mut self) -> Result<S::Object, DecodeError> {
        self.enter()?;
        let mut object = self.objects.empty();
        let mut members = 0usize;
        let mut after_comma = false;
        loop {
            match self.cursor.peek() {
                None => return Err(self.syntax_error()),
                Some(b'}') if !after_comma => {
                    self.cursor.advance(1);
                    self.depth -= 1;
                    return Ok(object);
                }
                Some(b',') if members > 0 && !after_comma => {
                    self.cursor.advance(1);
                    self.cursor.skip_whitespace();
                    after_comma = true;
                }
                Some(b'"') if members == 0 || after_comma => {
                    let key = self.parse_string()?;
                    self.cursor.skip_whitespace();
                    if self.cursor.peek() != Some(b':') {
                        return Err(self.syntax_error());
                    }
                    self.cursor.advance(1);
                    let value = self.parse_value()?;
                    object = self.objects.push(object, key, value);
                    members += 1;
                    after_comma = false;
                }
                Some(_) => return Err(self.syntax_error()),
            }
        }
    }
}
