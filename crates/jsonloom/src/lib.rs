//! A single-pass JSON decoder with pluggable container construction.
//!
//! `jsonloom` reads one JSON document from a byte buffer and produces a
//! [`Value`]. Arrays and objects are created through [`ArrayBuilder`] and
//! [`ObjectBuilder`], so the same decoder can fill the default
//! `Vec`/`BTreeMap` containers or build a caller's own types directly, at
//! every nesting level, without an intermediate tree.
//!
//! ```rust
//! use jsonloom::Value;
//!
//! let value = jsonloom::decode(br#" {"name": "loom", "tags": [1, 2]} "#).unwrap();
//! let Value::Object(map) = &value else { panic!() };
//! assert_eq!(map["name"].as_str(), Some("loom"));
//! assert_eq!(map["tags"].as_array().map(Vec::len), Some(2));
//! ```
//!
//! Failures carry the byte offset where decoding stopped:
//!
//! ```rust
//! use jsonloom::DecodeError;
//!
//! let err = jsonloom::decode(br#"{"key":}"#).unwrap_err();
//! assert_eq!(err, DecodeError::Syntax(7));
//! ```
//!
//! # Grammar
//!
//! The accepted language is JSON with a few relaxations:
//!
//! - numbers may have leading zeros and a bare trailing dot (`007`, `1.`),
//!   and an exponent is only read when `e`/`E` is followed by a sign;
//! - the escapes `\'` and `\/` are accepted, other unknown escapes are
//!   dropped unless [`DecoderOptions::reject_unknown_escapes`] is set;
//! - invalid UTF-8 and unpaired surrogate escapes decode to U+FFFD.
//!
//! Whitespace is space, tab, carriage return and line feed. Exactly one value
//! is read; anything but whitespace after it is an error.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod builder;
mod decoder;
mod error;
mod options;
mod value;

#[cfg(test)]
mod tests;

pub use builder::{ArrayBuilder, ArrayHook, GenericArray, GenericObject, ObjectBuilder, ObjectHook};
pub use decoder::Decoder;
pub use error::{DecodeError, Location};
pub use options::{DEFAULT_MAX_DEPTH, DecoderOptions};
pub use value::{Array, Generic, Map, Shape, Value};

/// Decodes `input` into a [`Generic`] value with default options.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    Decoder::new(input).decode()
}

/// Decodes `input` into a [`Generic`] value with the given options.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode_with(input: &[u8], options: DecoderOptions) -> Result<Value, DecodeError> {
    Decoder::new(input).with_options(options).decode()
}
