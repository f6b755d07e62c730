//! Shared fixtures for the integration tests

use std::rc::Rc;

use colltools::{
    List, Value,
    class::{Class, Instance},
    snapshot::Reference,
};

// ===== VALUE HELPERS =====

/// Unwraps a `value!` literal that is known to be a Sequence
pub fn list(value: Value) -> List {
    value
        .as_list()
        .cloned()
        .unwrap_or_else(|| panic!("Expected a list, got {value:?}"))
}

/// Reads an integer field, treating anything else as a test failure
pub fn int_field(instance: &Instance, name: &str) -> i64 {
    instance
        .get(name)
        .and_then(Value::as_int)
        .unwrap_or_else(|| panic!("Expected integer field '{name}' on {instance:?}"))
}

// ===== CLASS FIXTURES =====

/// A base class whose initializer stores its first argument as `name`
pub fn animal() -> Rc<Class> {
    Rc::new(
        Class::new("Animal")
            .with_init(|_, this, args| {
                this.set("name", args.first().cloned().unwrap_or_default());
                this.set("legs", 4);
                Ok(())
            })
            .with_method("describe", |this, _| {
                let name = this.get("name").and_then(Value::as_text).unwrap_or("?");
                Ok(Value::from(format!("{name} the animal")))
            })
            .with_method("name", |this, _| {
                Ok(this.get("name").cloned().unwrap_or_default())
            }),
    )
}

// ===== SNAPSHOT FIXTURES =====

/// A slash-separated path standing in for a database location
#[derive(Debug, Clone, PartialEq)]
pub struct FakeRef(pub String);

impl FakeRef {
    pub fn root(path: &str) -> Self {
        FakeRef(path.to_string())
    }
}

impl Reference for FakeRef {
    fn child(&self, path: &str) -> Self {
        FakeRef(format!("{}/{path}", self.0.trim_end_matches('/')))
    }

    fn name(&self) -> String {
        self.0.rsplit('/').next().unwrap_or_default().to_string()
    }
}
