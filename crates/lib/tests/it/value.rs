use colltools::{Error, List, Map, Value, value};

#[test]
fn test_type_of_matches_runtime_types() {
    assert_eq!(Value::Undefined.type_of(), "undefined");
    assert_eq!(Value::Null.type_of(), "object");
    assert_eq!(Value::Int(1).type_of(), Value::Float(1.5).type_of());
    assert_eq!(value!([]).type_of(), value!({}).type_of());
    assert_eq!(Value::from("x").type_of(), "string");
}

#[test]
fn test_strict_eq_is_identity_for_containers() {
    let list = value!([1, 2]);
    let copy = list.clone();

    assert!(list.strict_eq(&list));
    assert!(!list.strict_eq(&copy));
    assert_eq!(list, copy);

    assert!(Value::Int(3).strict_eq(&Value::Float(3.0)));
    assert!(!Value::Float(f64::NAN).strict_eq(&Value::Float(f64::NAN)));
    assert!(Value::Undefined.strict_eq(&Value::Undefined));
    assert!(!Value::Undefined.strict_eq(&Value::Null));
}

#[test]
fn test_get_by_index_and_name() {
    let v = value!({"items": ["a", "b"], "0": "zero"});

    assert_eq!(v.get("items").and_then(|items| items.get(1usize)), Some(&Value::from("b")));
    assert_eq!(v.get(0usize), Some(&Value::from("zero")));
    assert_eq!(v.get("missing"), None);
    assert_eq!(Value::Int(1).get("a"), None);
}

#[test]
fn test_list_set_grows_with_holes() {
    let mut list = List::new();
    list.set(2, "c").unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&Value::Undefined));
    assert_eq!(list.get(2), Some(&Value::from("c")));
}

#[test]
fn test_list_refuses_unbounded_growth() {
    let mut list = List::new();
    let err: Error = list.set(usize::MAX, "x").unwrap_err().into();

    assert!(err.is_out_of_range());
    assert!(list.is_empty());
}

#[test]
fn test_get_requires_canonical_index_names() {
    let v = value!(["a", "b"]);
    assert_eq!(v.get("1"), Some(&Value::from("b")));
    assert_eq!(v.get("01"), None);
    assert_eq!(v.get("+1"), None);
}

#[test]
fn test_map_keeps_insertion_order() {
    let map = Map::new().with("z", 1).with("a", 2).with("m", 3);
    assert_eq!(map.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
}

#[test]
fn test_try_from_reports_type_mismatch() {
    let err = i64::try_from(&Value::from("nope")).unwrap_err();
    assert!(err.is_type_error());

    let err: Error = err.into();
    assert!(err.is_type_error());
    assert_eq!(err.module(), "value");
}

#[test]
fn test_json_round_trip_preserves_key_order() {
    let input = r#"{"b":1,"a":[true,null,2.5],"c":{"y":"text","x":0}}"#;
    let value: Value = input.parse().unwrap();

    assert_eq!(value.to_json_string(false).unwrap(), input);
}

#[test]
fn test_undefined_serializes_as_null() {
    let value = Value::from(vec![Value::Undefined, Value::Int(1)]);
    assert_eq!(serde_json::to_string(&value).unwrap(), "[null,1]");
}

#[test]
fn test_invalid_json_is_a_serialization_error() {
    let err = Value::from_json_str("{not json").unwrap_err();
    assert!(err.is_serialization_error());
}

#[test]
fn test_value_deserializes_inside_structs() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        payload: Value,
    }

    let wrapper: Wrapper = serde_json::from_str(r#"{"payload": {"a": [1]}}"#).unwrap();
    assert_eq!(wrapper.payload, value!({"a": [1]}));
}

#[test]
fn test_typed_map_access() {
    let map = Map::new().with("name", "rex").with("age", 3);

    assert_eq!(map.get_as::<&str>("name"), Some("rex"));
    assert_eq!(map.get_as::<i64>("name"), None);
    assert_eq!(map.try_get_as::<i64>("age").unwrap(), 3);

    let err = map.try_get_as::<i64>("weight").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.key(), Some("weight"));
}
