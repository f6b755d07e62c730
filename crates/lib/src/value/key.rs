//! Keys handed to iteration callbacks.

use std::fmt;

/// The position of an element inside a collection.
///
/// Sequences are visited with [`Key::Index`], Mappings with [`Key::Name`].
/// Either form can address either shape: an index is looked up in a Mapping by
/// its decimal string, and a name that parses as an index addresses a Sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Position in a Sequence
    Index(usize),
    /// Key in a Mapping
    Name(&'a str),
}

impl Key<'_> {
    /// Returns the index this key addresses in a Sequence, if any.
    ///
    /// Only canonical decimal names address a position: no sign, and no
    /// leading zero except for `"0"` itself. `"01"` and `"+1"` are plain names.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(name) => parse_canonical_index(name),
        }
    }

    /// Returns the name if this is a Mapping key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }
}

fn parse_canonical_index(name: &str) -> Option<usize> {
    let canonical = match name.as_bytes() {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical { name.parse().ok() } else { None }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for Key<'static> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name)
    }
}
