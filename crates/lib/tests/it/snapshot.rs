use colltools::{Value, snapshot::JoinedSnapshot, value};

use crate::helpers::FakeRef;

fn users() -> JoinedSnapshot<FakeRef> {
    JoinedSnapshot::new(
        FakeRef::root("/users"),
        value!({"ann": {"age": 31}, "bob": {"age": 27}, "cy": null}),
    )
}

#[test]
fn test_val_and_name() {
    let snapshot = users();
    assert_eq!(snapshot.name(), "users");
    assert_eq!(snapshot.val().get("ann"), Some(&value!({"age": 31})));
    assert_eq!(snapshot.reference(), &FakeRef::root("/users"));
}

#[test]
fn test_child_delegates_to_reference() {
    assert_eq!(users().child("ann/age"), FakeRef::root("/users/ann/age"));
}

#[test]
fn test_for_each_yields_child_snapshots_in_order() {
    let mut names = Vec::new();
    let mut ages = Vec::new();
    users().for_each(|child| {
        names.push(child.name());
        ages.push(child.val().get("age").cloned().unwrap_or_default());
    });

    assert_eq!(names, ["ann", "bob", "cy"]);
    assert_eq!(ages, [Value::Int(31), Value::Int(27), Value::Undefined]);
}

#[test]
fn test_for_each_over_sequence_uses_indices() {
    let snapshot = JoinedSnapshot::new(FakeRef::root("/queue"), value!(["a", "b"]));
    let mut refs = Vec::new();
    snapshot.for_each(|child| refs.push(child.reference().clone()));

    assert_eq!(refs, [FakeRef::root("/queue/0"), FakeRef::root("/queue/1")]);
}

#[test]
fn test_child_counts_and_membership() {
    let snapshot = users();
    assert_eq!(snapshot.num_children(), 3);
    assert!(snapshot.has_children());
    assert!(snapshot.has_child("cy"));
    assert!(!snapshot.has_child("dan"));

    let empty = JoinedSnapshot::new(FakeRef::root("/empty"), value!({}));
    assert_eq!(empty.num_children(), 0);
    assert!(!empty.has_children());
}
