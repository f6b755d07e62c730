//! Uniform iteration over Sequences and Mappings.
//!
//! Every function here accepts anything implementing [`Collection`] and
//! behaves the same whichever shape it is given. The input is classified once
//! per call into a [`Shape`], and a single visitor walks that shape:
//! Sequences in index order with [`Key::Index`], Mappings in enumeration order
//! with [`Key::Name`].
//!
//! Inputs that are absent or not containers are treated as empty: callbacks
//! are never invoked and nothing fails.
//!
//! ```
//! use colltools::{iter, value};
//!
//! let doubled = iter::map(&value!([1, 2, 3]), |v, _| v.as_int().unwrap_or(0) * 2);
//! assert_eq!(doubled, value!([2, 4, 6]).as_list().cloned().unwrap());
//!
//! let keys = iter::keys(&value!({"a": 1, "b": 2}));
//! assert_eq!(keys, value!(["a", "b"]).as_list().cloned().unwrap());
//! ```

use std::ops::ControlFlow;

use crate::{Key, List, Map, Value};

/// The classified shape of a collection.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// Ordered, integer-indexed elements
    Sequence(&'a [Value]),
    /// Key/value pairs
    Mapping(&'a Map),
}

impl<'a> Shape<'a> {
    /// Visits every element until the visitor breaks.
    ///
    /// Returns the break value, or `None` if every element was visited.
    pub fn try_visit<B>(
        self,
        mut visitor: impl FnMut(&'a Value, Key<'a>) -> ControlFlow<B>,
    ) -> Option<B> {
        let flow = match self {
            Shape::Sequence(items) => items
                .iter()
                .enumerate()
                .try_for_each(|(index, value)| visitor(value, Key::Index(index))),
            Shape::Mapping(map) => map
                .iter()
                .try_for_each(|(name, value)| visitor(value, Key::Name(name))),
        };
        match flow {
            ControlFlow::Break(found) => Some(found),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Visits every element
    pub fn visit(self, mut visitor: impl FnMut(&'a Value, Key<'a>)) {
        self.try_visit::<()>(|value, key| {
            visitor(value, key);
            ControlFlow::Continue(())
        });
    }

    /// Number of elements in the shape
    pub fn len(&self) -> usize {
        match self {
            Shape::Sequence(items) => items.len(),
            Shape::Mapping(map) => map.len(),
        }
    }

    /// Returns true if the shape has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that can be iterated as a Sequence or a Mapping.
///
/// `shape` returns `None` for values that are not containers; iteration
/// functions treat those as empty. Slices and vectors of values are the
/// positional pseudo-collections of the toolkit and classify as Sequences.
pub trait Collection {
    /// Classifies the collection
    fn shape(&self) -> Option<Shape<'_>>;
}

impl Collection for Value {
    fn shape(&self) -> Option<Shape<'_>> {
        match self {
            Value::List(list) => Some(Shape::Sequence(list.as_slice())),
            Value::Map(map) => Some(Shape::Mapping(map)),
            _ => None,
        }
    }
}

impl Collection for List {
    fn shape(&self) -> Option<Shape<'_>> {
        Some(Shape::Sequence(self.as_slice()))
    }
}

impl Collection for Map {
    fn shape(&self) -> Option<Shape<'_>> {
        Some(Shape::Mapping(self))
    }
}

impl Collection for [Value] {
    fn shape(&self) -> Option<Shape<'_>> {
        Some(Shape::Sequence(self))
    }
}

impl Collection for Vec<Value> {
    fn shape(&self) -> Option<Shape<'_>> {
        Some(Shape::Sequence(self.as_slice()))
    }
}

impl<T: Collection + ?Sized> Collection for &T {
    fn shape(&self) -> Option<Shape<'_>> {
        (**self).shape()
    }
}

impl<T: Collection> Collection for Option<T> {
    fn shape(&self) -> Option<Shape<'_>> {
        self.as_ref().and_then(Collection::shape)
    }
}

/// Invokes `callback(value, key)` once per element.
///
/// A no-op for absent or non-container input.
pub fn each<'a, C>(collection: &'a C, callback: impl FnMut(&'a Value, Key<'a>))
where
    C: Collection + ?Sized,
{
    if let Some(shape) = collection.shape() {
        shape.visit(callback);
    }
}

/// Collects `iterator(value, key)` for every element into a new [`List`].
///
/// The result is always a Sequence, in the same order `each` visits, even when
/// the input is a Mapping.
pub fn map<'a, C, T>(collection: &'a C, mut iterator: impl FnMut(&'a Value, Key<'a>) -> T) -> List
where
    C: Collection + ?Sized,
    T: Into<Value>,
{
    let Some(shape) = collection.shape() else {
        return List::new();
    };
    let mut out = List::with_capacity(shape.len());
    shape.visit(|value, key| out.push(iterator(value, key)));
    out
}

/// Returns the first element for which `iterator` returns `true`.
///
/// Traversal stops at the first match. `None` is the absent result.
pub fn find<'a, C>(
    collection: &'a C,
    mut iterator: impl FnMut(&'a Value, Key<'a>) -> bool,
) -> Option<&'a Value>
where
    C: Collection + ?Sized,
{
    collection.shape()?.try_visit(|value, key| {
        if iterator(value, key) {
            ControlFlow::Break(value)
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// What [`contains`] searches for.
pub enum Needle<'n> {
    /// A value, matched by strict identity ([`Value::strict_eq`])
    Value(&'n Value),
    /// A predicate; the collection contains a match if any element satisfies it
    Predicate(&'n dyn Fn(&Value, Key<'_>) -> bool),
}

impl<'n> From<&'n Value> for Needle<'n> {
    fn from(value: &'n Value) -> Self {
        Needle::Value(value)
    }
}

/// Returns true if the collection holds the needle.
///
/// A predicate behaves as `find(..).is_some()`. A plain value is searched with
/// [`index_of`] in Sequences and by strict identity among a Mapping's values.
///
/// ```
/// use colltools::{iter::{Needle, contains}, value, Value};
///
/// let list = value!([1, 2, 3]);
/// assert!(contains(&list, &Value::from(2)));
/// assert!(contains(&list, Needle::Predicate(&|v, _| v.as_int() > Some(2))));
/// assert!(!contains(&list, &Value::from(5)));
/// ```
pub fn contains<'n, C>(collection: &C, needle: impl Into<Needle<'n>>) -> bool
where
    C: Collection + ?Sized,
{
    match needle.into() {
        Needle::Predicate(predicate) => find(collection, predicate).is_some(),
        Needle::Value(target) => match collection.shape() {
            Some(Shape::Sequence(items)) => index_of(items, target).is_some(),
            _ => find(collection, |value, _| value.strict_eq(target)).is_some(),
        },
    }
}

/// Returns every key visited by [`each`], as a Sequence.
///
/// Sequences yield their indices as integers, Mappings their keys as text.
pub fn keys<C>(collection: &C) -> List
where
    C: Collection + ?Sized,
{
    map(collection, |_, key| key)
}

/// Copies the elements of a positional pseudo-collection into a new [`List`],
/// skipping the first `start_from` elements.
///
/// Mappings contribute their values in enumeration order.
pub fn to_array<C>(args_like: &C, start_from: usize) -> List
where
    C: Collection + ?Sized,
{
    let values = map(args_like, |value, _| value.clone());
    if start_from > 0 {
        values.slice_from(start_from)
    } else {
        values
    }
}

/// Returns the first position whose element is strictly equal to `item`.
pub fn index_of<S>(sequence: &S, item: &Value) -> Option<usize>
where
    S: AsRef<[Value]> + ?Sized,
{
    sequence
        .as_ref()
        .iter()
        .position(|element| element.strict_eq(item))
}
