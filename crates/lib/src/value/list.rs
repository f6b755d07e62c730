//! The Sequence shape.

use std::fmt;

use super::{Value, ValueError};

/// An ordered, integer-indexed collection of values.
///
/// `List` is the output shape of [`crate::iter::map`], [`crate::iter::keys`]
/// and [`crate::iter::to_array`]. Writes past the end grow the list, filling
/// the gap with [`Value::Undefined`] holes.
///
/// ```
/// # use colltools::{List, Value};
/// let mut list = List::new();
/// list.push(1);
/// list.set(3, "x")?;
///
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.get(2), Some(&Value::Undefined));
/// # Ok::<(), colltools::ValueError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements, holes included
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an element by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to an element by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value to the end of the list
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Removes and returns the last value
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Largest number of elements a single write past the end may add.
    ///
    /// Writing to `len() + MAX_GROWTH - 1` is the furthest a write can reach;
    /// anything beyond is refused instead of allocating the holes.
    pub const MAX_GROWTH: usize = 1 << 16;

    /// Sets the value at `index`, growing the list if needed.
    ///
    /// Returns the previous value if the index was already in bounds, or
    /// [`ValueError::IndexOutOfRange`] when the write would grow the list by
    /// more than [`List::MAX_GROWTH`] elements.
    pub fn set(
        &mut self,
        index: usize,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ValueError> {
        let len = self.items.len();
        let slot = self
            .slot(index)
            .ok_or(ValueError::IndexOutOfRange { index, len })?;
        let old = std::mem::replace(slot, value.into());
        Ok(old.is_defined().then_some(old))
    }

    /// Returns a mutable reference to the element at `index`, growing the
    /// list with undefined holes when the index is past the end.
    ///
    /// Returns `None` when reaching `index` would add more than
    /// [`List::MAX_GROWTH`] elements.
    pub fn slot(&mut self, index: usize) -> Option<&mut Value> {
        if index >= self.items.len() {
            let new_len = index.checked_add(1)?;
            if new_len - self.items.len() > Self::MAX_GROWTH {
                return None;
            }
            self.items.resize(new_len, Value::Undefined);
        }
        self.items.get_mut(index)
    }

    /// Removes the element at `index`, shifting later elements down
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Borrows the elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Consumes the list, returning the underlying vector
    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    /// Keeps the elements from `start` on, dropping the rest
    pub fn slice_from(mut self, start: usize) -> Self {
        let start = start.min(self.items.len());
        self.items.drain(..start);
        self
    }
}

impl AsRef<[Value]> for List {
    fn as_ref(&self) -> &[Value] {
        &self.items
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<T: Into<Value>> FromIterator<T> for List {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
