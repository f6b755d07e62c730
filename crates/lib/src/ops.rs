//! Structural operations built on uniform iteration.
//!
//! - [`is_equal`] - deep structural equality
//! - [`extend`] - shallow or deep merge into a destination, in place
//! - [`is_empty`] / [`has`] - emptiness and key membership
//!
//! `Value` trees are owned, so they cannot contain cycles and every recursion
//! here terminates.

use crate::{
    Key, Value,
    iter::{Collection, Needle, Shape, contains, find},
};

/// Returns true if the value is absent, null, an empty Sequence or a Mapping
/// with no keys.
///
/// A Mapping whose only key holds [`Value::Undefined`] is not empty: the key
/// exists. Scalars other than null are never empty.
///
/// ```
/// # use colltools::{ops::is_empty, value, Value};
/// assert!(is_empty(&value!([])));
/// assert!(is_empty(&value!({})));
/// assert!(is_empty(&Value::Null));
/// assert!(is_empty(None));
/// assert!(!is_empty(&Value::from(colltools::Map::new().with("a", Value::Undefined))));
/// ```
pub fn is_empty<'a>(value: impl Into<Option<&'a Value>>) -> bool {
    match value.into() {
        None | Some(Value::Undefined) | Some(Value::Null) => true,
        // `find` hands back the matched element itself, so a Mapping whose
        // only key holds an undefined value still counts as non-empty
        Some(value) if value.is_object() => find(value, |_, _| true).is_none(),
        Some(_) => false,
    }
}

/// Returns true if `key` addresses a defined element of a Sequence or an
/// existing key of a Mapping.
///
/// ```
/// # use colltools::{ops::has, value, Value};
/// let list = value!([1, null]);
/// assert!(has(&list, 0usize));
/// assert!(has(&list, 1usize)); // null is defined
/// assert!(!has(&list, 2usize));
///
/// assert!(has(&value!({"a": null}), "a"));
/// assert!(!has(&Value::Int(3), "a"));
/// ```
pub fn has<'k, C>(collection: &C, key: impl Into<Key<'k>>) -> bool
where
    C: Collection + ?Sized,
{
    let key = key.into();
    match collection.shape() {
        Some(Shape::Sequence(items)) => key
            .as_index()
            .and_then(|index| items.get(index))
            .is_some_and(Value::is_defined),
        Some(Shape::Mapping(map)) => match key {
            Key::Name(name) => map.contains_key(name),
            Key::Index(index) => map.contains_key(&index.to_string()),
        },
        None => false,
    }
}

/// Deep structural equality.
///
/// 1. Strictly identical values are equal.
/// 2. Values of different runtime type ([`Value::type_of`]) are never equal.
/// 3. Sequences are equal when they have the same length and every positional
///    pair is equal; order matters.
/// 4. Mappings are equal when their sorted key lists match and every shared
///    key holds equal values; key order is irrelevant.
/// 5. A Sequence never equals a Mapping.
/// 6. Everything else compares strictly.
///
/// ```
/// # use colltools::{ops::is_equal, value};
/// assert!(is_equal(&value!({"a": 1, "b": 2}), &value!({"b": 2, "a": 1})));
/// assert!(!is_equal(&value!([1, 2]), &value!({"0": 1, "1": 2})));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if a.strict_eq(b) {
        return true;
    }
    if a.type_of() != b.type_of() {
        return false;
    }

    match (a.shape(), b.shape()) {
        (Some(Shape::Sequence(left)), Some(Shape::Sequence(right))) => {
            left.len() == right.len()
                && !contains(
                    left,
                    Needle::Predicate(&|value: &Value, key: Key<'_>| {
                        key.as_index()
                            .and_then(|index| right.get(index))
                            .is_none_or(|other| !is_equal(value, other))
                    }),
                )
        }
        (Some(Shape::Mapping(left)), Some(Shape::Mapping(right))) => {
            sorted_keys(left) == sorted_keys(right)
                && !contains(
                    left,
                    Needle::Predicate(&|value: &Value, key: Key<'_>| {
                        key.as_name()
                            .and_then(|name| right.get(name))
                            .is_none_or(|other| !is_equal(value, other))
                    }),
                )
        }
        _ => false,
    }
}

fn sorted_keys(map: &crate::Map) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().collect();
    keys.sort_unstable();
    keys
}

/// Merges each source's keys into `destination`, left to right, and returns
/// the destination.
///
/// Later sources override earlier ones at the same key. With `deep` set, when
/// both the value already in the destination and the incoming value are
/// Mappings they are merged recursively, keeping sibling keys; every other
/// combination replaces the destination value outright.
///
/// Sources that are not containers are skipped. Sequence sources contribute
/// their indices as keys. A Mapping destination stores every key by name; a
/// Sequence destination assigns by index and ignores keys that are not
/// canonical indices or that would grow it by more than
/// [`List::MAX_GROWTH`](crate::List::MAX_GROWTH); any other destination is
/// returned unchanged.
///
/// ```
/// # use colltools::{ops::extend, value};
/// let mut deep = value!({"a": {"x": 1}});
/// extend(true, &mut deep, [&value!({"a": {"y": 2}})]);
/// assert_eq!(deep, value!({"a": {"x": 1, "y": 2}}));
///
/// let mut shallow = value!({"a": {"x": 1}});
/// extend(false, &mut shallow, [&value!({"a": {"y": 2}})]);
/// assert_eq!(shallow, value!({"a": {"y": 2}}));
/// ```
pub fn extend<'d, 's>(
    deep: bool,
    destination: &'d mut Value,
    sources: impl IntoIterator<Item = &'s Value>,
) -> &'d mut Value {
    for source in sources {
        let Some(shape) = source.shape() else {
            tracing::trace!(source = source.type_name(), "skipping non-container source");
            continue;
        };
        shape.visit(|incoming, key| assign(deep, destination, key, incoming));
    }
    destination
}

/// [`extend`] in deep mode
pub fn extend_deep<'d, 's>(
    destination: &'d mut Value,
    sources: impl IntoIterator<Item = &'s Value>,
) -> &'d mut Value {
    extend(true, destination, sources)
}

/// [`extend`] in shallow mode
pub fn extend_shallow<'d, 's>(
    destination: &'d mut Value,
    sources: impl IntoIterator<Item = &'s Value>,
) -> &'d mut Value {
    extend(false, destination, sources)
}

fn assign(deep: bool, destination: &mut Value, key: Key<'_>, incoming: &Value) {
    let slot = match destination {
        Value::Map(map) => map.slot(key.to_string()),
        Value::List(list) => {
            let len = list.len();
            let Some(slot) = key.as_index().and_then(|index| list.slot(index)) else {
                tracing::trace!(key = %key, len, "skipping key outside the list");
                return;
            };
            slot
        }
        _ => return,
    };

    if deep && slot.is_mapping() && incoming.is_mapping() {
        tracing::trace!(key = %key, "deep merging nested mapping");
        extend(true, slot, [incoming]);
    } else {
        *slot = incoming.clone();
    }
}
