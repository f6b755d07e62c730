use colltools::{
    Value,
    predicates::{is_array, is_defined, is_object},
    value,
};

#[test]
fn test_predicates_are_total() {
    let samples = [
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::Int(0),
        Value::Float(0.5),
        Value::from(""),
        value!([]),
        value!({}),
    ];

    let objects: Vec<bool> = samples.iter().map(|v| is_object(v)).collect();
    let arrays: Vec<bool> = samples.iter().map(|v| is_array(v)).collect();
    let defined: Vec<bool> = samples.iter().map(|v| is_defined(v)).collect();

    assert_eq!(objects, [false, false, false, false, false, false, true, true]);
    assert_eq!(arrays, [false, false, false, false, false, false, true, false]);
    assert_eq!(defined, [false, true, true, true, true, true, true, true]);
}

#[test]
fn test_missing_lookup_is_not_defined() {
    let v = value!({"a": 1});
    assert!(is_defined(v.get("a")));
    assert!(!is_defined(v.get("b")));
    assert!(!is_object(v.get("a")));
}
