//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any decoded JSON
//! value, and the [`Shape`] trait, which names the container types a decode
//! produces for arrays and objects.
//!
//! The default shape, [`Generic`], stores arrays as `Vec<Value>` and objects
//! as `BTreeMap<String, Value>`. Callers that decode straight into their own
//! containers declare a shape of their own and register matching builders on
//! the [`Decoder`](crate::Decoder).
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt;

/// The generic array container of shape `S`.
pub type Array<S = Generic> = Vec<Value<S>>;

/// The generic object container of shape `S`.
pub type Map<S = Generic> = BTreeMap<String, Value<S>>;

/// Names the container types used for JSON arrays and objects.
///
/// The bounds on the associated types let [`Value`] implement `Debug`,
/// `Clone` and `PartialEq` for every shape.
///
/// # Examples
///
/// A shape that keeps the generic object map but collects arrays into a
/// custom type:
///
/// ```
/// use jsonloom::{Map, Shape, Value};
///
/// #[derive(Debug, Clone, PartialEq, Default)]
/// struct Tally {
///     items: Vec<Value<Counted>>,
/// }
///
/// struct Counted;
///
/// impl Shape for Counted {
///     type Array = Tally;
///     type Object = Map<Counted>;
/// }
/// ```
pub trait Shape {
    /// The container a JSON array decodes into.
    type Array: fmt::Debug + Clone + PartialEq;
    /// The container a JSON object decodes into.
    type Object: fmt::Debug + Clone + PartialEq;
}

/// The default shape: arrays are [`Array`], objects are [`Map`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generic;

impl Shape for Generic {
    type Array = Array;
    type Object = Map;
}

/// A JSON value as defined by [RFC 8259].
///
/// - Null
/// - Boolean
/// - Number, always an `f64`
/// - String
/// - Array, stored as `S::Array`
/// - Object, stored as `S::Object`
///
/// # Examples
///
/// ```
/// use jsonloom::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v: Value = Value::Object(map);
/// assert!(v.is_object());
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
pub enum Value<S: Shape = Generic> {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// Any JSON number.
    Number(f64),
    /// A string with all escapes decoded.
    String(String),
    /// An array in the shape's array container.
    Array(S::Array),
    /// An object in the shape's object container.
    Object(S::Object),
}

impl<S: Shape> fmt::Debug for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(a) => f.debug_tuple("Array").field(a).finish(),
            Value::Object(o) => f.debug_tuple("Object").field(o).finish(),
        }
    }
}

impl<S: Shape> Clone for Value<S> {
    fn clone(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Boolean(b) => Value::Boolean(*b),
            Value::Number(n) => Value::Number(*n),
            Value::String(s) => Value::String(s.clone()),
            Value::Array(a) => Value::Array(a.clone()),
            Value::Object(o) => Value::Object(o.clone()),
        }
    }
}

impl<S: Shape> PartialEq for Value<S> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl<S: Shape> Default for Value<S> {
    fn default() -> Self {
        Self::Null
    }
}

impl<S: Shape> From<bool> for Value<S> {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl<S: Shape> From<f64> for Value<S> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl<S: Shape> From<String> for Value<S> {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<S: Shape> From<&str> for Value<S> {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl<S: Shape> Value<S> {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonloom::Value;
    ///
    /// assert!(Value::<jsonloom::Generic>::Null.is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean, if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string contents, if this is a [`String`](Value::String).
    ///
    /// ```
    /// use jsonloom::decode;
    ///
    /// let v = decode(br#""hi""#).unwrap();
    /// assert_eq!(v.as_str(), Some("hi"));
    /// ```
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The array container, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&S::Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The object container, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&S::Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

// Serialization exists so downstream crates and snapshot tests can inspect
// decoded trees; the crate itself never renders JSON text.
#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for Value {
    fn serialize<Z: serde::Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(a) => serializer.collect_seq(a),
            Value::Object(o) => serializer.collect_map(o),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    #[test]
    fn accessors_match_variants() {
        let v: Value = Value::from("x");
        assert!(v.is_string());
        assert_eq!(v.as_str(), Some("x"));
        assert_eq!(v.as_f64(), None);

        let v: Value = Value::from(2.5);
        assert!(v.is_number());
        assert_eq!(v.as_f64(), Some(2.5));

        let v: Value = Value::from(true);
        assert_eq!(v.as_bool(), Some(true));
        assert!(Value::<Generic>::default().is_null());
    }

    #[test]
    fn containers_compare_structurally() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::Array(vec![Value::Null]));
        let a: Value = Value::Object(map.clone());
        let b = Value::from(map);
        assert_eq!(a, b);
        assert_ne!(a, Value::Array(vec![]));
        assert_eq!(a.as_object().map(BTreeMap::len), Some(1));
    }

    #[test]
    fn debug_names_variants() {
        let v: Value = Value::Array(vec![Value::Number(1.0), Value::Null]);
        assert_eq!(alloc::format!("{v:?}"), "Array([Number(1.0), Null])");
    }
}
