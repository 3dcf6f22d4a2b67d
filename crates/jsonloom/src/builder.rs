//! Abstraction over array and object construction.
//!
//! The decoder never builds containers itself. For every array it calls
//! [`ArrayBuilder::empty`] once when the `[` is read and
//! [`ArrayBuilder::push`] once per element, threading the returned container
//! from call to call; objects work the same way through [`ObjectBuilder`].
//! The container returned by the last call is the decoded value.
//!
//! [`GenericArray`] and [`GenericObject`] fill the shape's generic
//! containers. [`ArrayHook`] and [`ObjectHook`] adapt a pair of closures.
use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::value::{Array, Map, Shape, Value};

/// Builds the array container of shape `S`.
pub trait ArrayBuilder<S: Shape> {
    /// Creates the container for a newly opened array.
    fn empty(&mut self) -> S::Array;

    /// Adds the element at `index` and returns the container to use from
    /// now on.
    fn push(&mut self, array: S::Array, index: usize, value: Value<S>) -> S::Array;
}

/// Builds the object container of shape `S`.
pub trait ObjectBuilder<S: Shape> {
    /// Creates the container for a newly opened object.
    fn empty(&mut self) -> S::Object;

    /// Adds the member `key` and returns the container to use from now on.
    ///
    /// Called once for every member in input order, duplicates included.
    fn push(&mut self, object: S::Object, key: String, value: Value<S>) -> S::Object;
}

impl<S: Shape, B: ArrayBuilder<S> + ?Sized> ArrayBuilder<S> for &mut B {
    #[inline]
    fn empty(&mut self) -> S::Array {
        (**self).empty()
    }

    #[inline]
    fn push(&mut self, array: S::Array, index: usize, value: Value<S>) -> S::Array {
        (**self).push(array, index, value)
    }
}

impl<S: Shape, B: ObjectBuilder<S> + ?Sized> ObjectBuilder<S> for &mut B {
    #[inline]
    fn empty(&mut self) -> S::Object {
        (**self).empty()
    }

    #[inline]
    fn push(&mut self, object: S::Object, key: String, value: Value<S>) -> S::Object {
        (**self).push(object, key, value)
    }
}

/// Collects arrays into `Vec<Value<S>>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericArray;

impl<S> ArrayBuilder<S> for GenericArray
where
    S: Shape<Array = Array<S>>,
{
    #[inline]
    fn empty(&mut self) -> Array<S> {
        Vec::new()
    }

    #[inline]
    fn push(&mut self, mut array: Array<S>, _index: usize, value: Value<S>) -> Array<S> {
        array.push(value);
        array
    }
}

/// Collects objects into `BTreeMap<String, Value<S>>`; a repeated key keeps
/// its last value.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericObject;

impl<S> ObjectBuilder<S> for GenericObject
where
    S: Shape<Object = Map<S>>,
{
    #[inline]
    fn empty(&mut self) -> Map<S> {
        BTreeMap::new()
    }

    #[inline]
    fn push(&mut self, mut object: Map<S>, key: String, value: Value<S>) -> Map<S> {
        object.insert(key, value);
        object
    }
}

/// An [`ArrayBuilder`] made of an `empty` closure and a `push` closure.
#[derive(Clone, Copy, Debug)]
pub struct ArrayHook<E, P> {
    empty: E,
    push: P,
}

impl<E, P> ArrayHook<E, P> {
    /// Pairs the two closures.
    #[must_use]
    pub fn new(empty: E, push: P) -> Self {
        Self { empty, push }
    }
}

impl<S, E, P> ArrayBuilder<S> for ArrayHook<E, P>
where
    S: Shape,
    E: FnMut() -> S::Array,
    P: FnMut(S::Array, usize, Value<S>) -> S::Array,
{
    #[inline]
    fn empty(&mut self) -> S::Array {
        (self.empty)()
    }

    #[inline]
    fn push(&mut self, array: S::Array, index: usize, value: Value<S>) -> S::Array {
        (self.push)(array, index, value)
    }
}

/// An [`ObjectBuilder`] made of an `empty` closure and a `push` closure.
#[derive(Clone, Copy, Debug)]
pub struct ObjectHook<E, P> {
    empty: E,
    push: P,
}

impl<E, P> ObjectHook<E, P> {
    /// Pairs the two closures.
    #[must_use]
    pub fn new(empty: E, push: P) -> Self {
        Self { empty, push }
    }
}

impl<S, E, P> ObjectBuilder<S> for ObjectHook<E, P>
where
    S: Shape,
    E: FnMut() -> S::Object,
    P: FnMut(S::Object, String, Value<S>) -> S::Object,
{
    #[inline]
    fn empty(&mut self) -> S::Object {
        (self.empty)()
    }

    #[inline]
    fn push(&mut self, object: S::Object, key: String, value: Value<S>) -> S::Object {
        (self.push)(object, key, value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec, vec::Vec};

    use super::*;
    use crate::value::Generic;

    #[test]
    fn generic_builders_fill_std_containers() {
        let mut arrays = GenericArray;
        let arr = ArrayBuilder::<Generic>::empty(&mut arrays);
        let arr = ArrayBuilder::<Generic>::push(&mut arrays, arr, 0, Value::Boolean(true));
        assert_eq!(arr, vec![Value::Boolean(true)]);

        let mut objects = GenericObject;
        let obj = ObjectBuilder::<Generic>::empty(&mut objects);
        let obj = ObjectBuilder::<Generic>::push(&mut objects, obj, "n".to_string(), 1.0.into());
        let obj = ObjectBuilder::<Generic>::push(&mut objects, obj, "n".to_string(), 2.0.into());
        assert_eq!(obj, Map::from([("n".to_string(), Value::Number(2.0))]));
    }

    #[test]
    fn hooks_forward_to_closures() {
        let mut seen = Vec::new();
        let mut hook = ArrayHook::new(Vec::new, |mut a: Array, i: usize, v: Value| {
            seen.push(i);
            a.push(v);
            a
        });
        let arr = ArrayBuilder::<Generic>::empty(&mut hook);
        let arr = ArrayBuilder::<Generic>::push(&mut hook, arr, 0, Value::Null);
        let arr = ArrayBuilder::<Generic>::push(&mut hook, arr, 1, Value::Null);
        assert_eq!(arr.len(), 2);
        assert_eq!(seen, vec![0, 1]);
    }
}
