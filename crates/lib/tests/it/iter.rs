use colltools::{
    Key, List, Map, Value,
    iter::{Needle, contains, each, find, index_of, keys, map, to_array},
    value,
};

use crate::helpers::list;

#[test]
fn test_each_visits_mapping_in_enumeration_order() {
    let data = value!({"c": 3, "a": 1, "b": 2});
    let mut seen = Vec::new();
    each(&data, |value, key| {
        seen.push(format!("{key}={value}"));
    });

    assert_eq!(seen, ["c=3", "a=1", "b=2"]);
}

#[test]
fn test_each_on_absent_input_performs_no_callbacks() {
    let mut calls = 0;
    each(&None::<Value>, |_, _| calls += 1);
    each(&Value::Undefined, |_, _| calls += 1);
    each(&Value::Int(5), |_, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_map_identity_reproduces_order() {
    let sequence = value!([3, 1, 2]);
    assert_eq!(map(&sequence, |v, _| v.clone()), list(sequence.clone()));

    let mapping = value!({"z": "last", "a": "first"});
    assert_eq!(map(&mapping, |v, _| v.clone()), list(value!(["last", "first"])));
}

#[test]
fn test_map_over_mapping_returns_sequence() {
    let mapping = value!({"a": 1, "b": 2});
    let pairs = map(&mapping, |value, key| format!("{key}:{value}"));
    assert_eq!(pairs, list(value!(["a:1", "b:2"])));
}

#[test]
fn test_find_returns_first_match() {
    let data = value!([1, 2, 3]);

    assert_eq!(find(&data, |v, _| v.as_int() > Some(1)), Some(&Value::Int(2)));
    assert_eq!(find(&data, |v, _| v.as_int() > Some(5)), None);
}

#[test]
fn test_find_passes_keys() {
    let data = value!({"skip": 1, "take": 2});
    let found = find(&data, |_, key| key == Key::Name("take"));
    assert_eq!(found, Some(&Value::Int(2)));
}

#[test]
fn test_contains_value_and_predicate() {
    let data = value!([1, 2, 3]);

    assert!(contains(&data, &Value::Int(2)));
    assert!(!contains(&data, &Value::Int(4)));
    assert!(contains(&data, Needle::Predicate(&|v: &Value, _| v.as_int() > Some(2))));
    assert!(!contains(&Value::Null, &Value::Null));
}

#[test]
fn test_contains_in_mapping_values() {
    let data = value!({"a": "x", "b": "y"});
    assert!(contains(&data, &Value::from("y")));
    assert!(!contains(&data, &Value::from("b")));
}

#[test]
fn test_contains_predicate_over_mapping() {
    let data = value!({"low": 1, "high": 10});

    assert!(contains(&data, Needle::Predicate(&|v: &Value, _| v.as_int() > Some(5))));
    assert!(contains(&data, Needle::Predicate(&|_: &Value, key: Key<'_>| key == Key::Name("low"))));
    assert!(!contains(&data, Needle::Predicate(&|v: &Value, _| v.is_null())));
}

#[test]
fn test_keys_of_both_shapes() {
    assert_eq!(keys(&value!(["a", "b"])), list(value!([0, 1])));
    assert_eq!(keys(&value!({"x": 1, "y": 2})), list(value!(["x", "y"])));
    assert!(keys(&Value::from("text")).is_empty());
}

#[test]
fn test_to_array_slices_positional_arguments() {
    let args = vec![Value::from("fn"), Value::from("scope"), Value::Int(1), Value::Int(2)];

    assert_eq!(to_array(&args, 2), list(value!([1, 2])));
    assert_eq!(to_array(&args, 0).len(), 4);
    assert!(to_array(&args, 10).is_empty());
}

#[test]
fn test_to_array_over_mapping_takes_values() {
    let data = value!({"first": 1, "second": "two", "third": [3]});

    assert_eq!(to_array(&data, 0), list(value!([1, "two", [3]])));
    assert_eq!(to_array(&data, 1), list(value!(["two", [3]])));
    assert!(to_array(&Value::Null, 0).is_empty());
}

#[test]
fn test_index_of_uses_strict_equality() {
    let items: List = [Value::Int(1), Value::Float(2.0), Value::from("2")].into_iter().collect();

    assert_eq!(index_of(&items, &Value::Int(2)), Some(1));
    assert_eq!(index_of(&items, &Value::from("1")), None);
    assert_eq!(index_of(&items, &Value::from(Map::new())), None);
}
