//! Snapshots of joined data.
//!
//! A [`JoinedSnapshot`] pairs a location in an external realtime database
//! (anything implementing [`Reference`]) with the data read from it. Child
//! navigation is delegated to the reference; structural questions are answered
//! from the data with the helpers in [`crate::iter`] and [`crate::ops`].

use crate::{
    Key, Value,
    iter::{each, map},
    ops::{has, is_empty},
};

/// A navigable location in an external database.
pub trait Reference: Sized {
    /// Returns the reference for the child at `path`
    fn child(&self, path: &str) -> Self;

    /// Returns the last path segment of this location
    fn name(&self) -> String;
}

/// Data read from a [`Reference`], together with the reference itself.
#[derive(Debug, Clone)]
pub struct JoinedSnapshot<R> {
    reference: R,
    data: Value,
}

impl<R: Reference> JoinedSnapshot<R> {
    /// Wraps `data` read at `reference`
    pub fn new(reference: R, data: impl Into<Value>) -> Self {
        Self {
            reference,
            data: data.into(),
        }
    }

    /// Returns the snapshot's data
    pub fn val(&self) -> &Value {
        &self.data
    }

    /// Consumes the snapshot, returning its data
    pub fn into_val(self) -> Value {
        self.data
    }

    /// Returns the reference for the child at `path`
    pub fn child(&self, path: &str) -> R {
        self.reference.child(path)
    }

    /// Calls `callback` with a snapshot of every child, in enumeration order.
    ///
    /// Each child snapshot pairs the child reference with the child's data.
    /// Snapshots of scalar data have no children.
    pub fn for_each(&self, mut callback: impl FnMut(JoinedSnapshot<R>)) {
        each(&self.data, |value, key| {
            callback(JoinedSnapshot::new(self.child(&key.to_string()), value.clone()));
        });
    }

    /// Returns the name of the location this snapshot was read from
    pub fn name(&self) -> String {
        self.reference.name()
    }

    /// Counts the children of the snapshot's data
    pub fn num_children(&self) -> usize {
        map(&self.data, |_, _| Value::Null).len()
    }

    /// Returns the reference this snapshot was read from
    pub fn reference(&self) -> &R {
        &self.reference
    }

    /// Returns true if the data has a child at `key`
    pub fn has_child<'k>(&self, key: impl Into<Key<'k>>) -> bool {
        has(&self.data, key)
    }

    /// Returns true if the data is a container with at least one child
    pub fn has_children(&self) -> bool {
        self.data.is_object() && !is_empty(&self.data)
    }
}
