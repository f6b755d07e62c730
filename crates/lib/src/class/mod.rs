//! Single-parent class hierarchies by composition.
//!
//! A [`Class`] owns its base class as a field and a table of [`Methods`].
//! [`inherit`] wires a child class to a parent; method lookup falls through
//! the base chain, and [`Class::super_init`] forwards initialization to the
//! base explicitly. No instance of the parent is ever created to build the
//! child, so parents need no zero-argument constructor.
//!
//! # Examples
//!
//! ```
//! use colltools::{Value, class::{Class, inherit, method, methods}};
//! use std::rc::Rc;
//!
//! let animal = Rc::new(
//!     Class::new("Animal")
//!         .with_init(|_, this, args| {
//!             this.set("name", args.first().cloned().unwrap_or_default());
//!             Ok(())
//!         })
//!         .with_method("name", |this, _| Ok(this.get("name").cloned().unwrap_or_default())),
//! );
//!
//! let dog = inherit(
//!     Class::new("Dog").with_init(|class, this, args| {
//!         class.super_init(this, args)?;
//!         this.set("sound", "woof");
//!         Ok(())
//!     }),
//!     &animal,
//!     [methods([(
//!         "speak",
//!         method(|this, _| Ok(this.get("sound").cloned().unwrap_or_default())),
//!     )])],
//! );
//!
//! let mut rex = dog.instantiate(&[Value::from("Rex")])?;
//! assert!(rex.instance_of(&animal));
//! assert_eq!(rex.call("name", &[])?, Value::from("Rex"));
//! assert_eq!(rex.call("speak", &[])?, Value::from("woof"));
//! # Ok::<(), colltools::Error>(())
//! ```

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{List, Map, Result, Value};

pub mod errors;

pub use errors::ClassError;

/// A method: receives the instance it runs on and the call arguments.
pub type Method = Rc<dyn Fn(&mut Instance, &[Value]) -> Result<Value>>;

/// A named group of methods. Later entries override earlier ones.
pub type Methods = IndexMap<String, Method>;

/// Initialization logic. Receives the class that owns it, so that
/// [`Class::super_init`] always forwards one level up the chain.
pub type Initializer = Rc<dyn Fn(&Class, &mut Instance, &[Value]) -> Result<()>>;

/// A method fixed to one receiver.
pub type BoundMethod = Rc<dyn Fn(&[Value]) -> Result<Value>>;

/// A group of bound methods.
pub type BoundMethods = IndexMap<String, BoundMethod>;

/// A shared, mutable receiver for bound methods.
pub type Receiver = Rc<RefCell<Instance>>;

/// Wraps a closure as a [`Method`]
pub fn method<F>(f: F) -> Method
where
    F: Fn(&mut Instance, &[Value]) -> Result<Value> + 'static,
{
    Rc::new(f)
}

/// Builds a [`Methods`] group from name/method pairs
pub fn methods<I, K>(entries: I) -> Methods
where
    I: IntoIterator<Item = (K, Method)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, method)| (name.into(), method))
        .collect()
}

/// A class: a name, an optional base, optional initialization logic and a
/// method table.
pub struct Class {
    name: String,
    base: Option<Rc<Class>>,
    init: Option<Initializer>,
    prototype: Methods,
}

impl Class {
    /// Creates a class with no base, no initializer and no methods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            init: None,
            prototype: Methods::new(),
        }
    }

    /// Builder method to set the initializer
    pub fn with_init<F>(mut self, init: F) -> Self
    where
        F: Fn(&Class, &mut Instance, &[Value]) -> Result<()> + 'static,
    {
        self.init = Some(Rc::new(init));
        self
    }

    /// Builder method to add a method
    pub fn with_method<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut Instance, &[Value]) -> Result<Value> + 'static,
    {
        self.prototype.insert(name.into(), method(f));
        self
    }

    /// Returns the class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base class, if any
    pub fn base(&self) -> Option<&Rc<Class>> {
        self.base.as_ref()
    }

    /// Returns the methods defined directly on this class
    pub fn own_methods(&self) -> &Methods {
        &self.prototype
    }

    /// Iterates this class followed by each of its ancestors
    pub fn ancestry(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.base.as_deref())
    }

    /// Finds a method on this class or the nearest ancestor defining it
    pub fn lookup(&self, name: &str) -> Option<&Method> {
        self.ancestry().find_map(|class| class.prototype.get(name))
    }

    /// Returns true if instances of this class respond to `name`
    pub fn responds_to(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Returns true if `other` is this class or one of its ancestors
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestry().any(|class| std::ptr::eq(class, other))
    }

    /// Runs this class's initialization logic against `instance`.
    ///
    /// A class without an initializer defers to its nearest ancestor that has
    /// one; if none does, nothing happens.
    pub fn initialize(&self, instance: &mut Instance, args: &[Value]) -> Result<()> {
        let Some((owner, init)) = self
            .ancestry()
            .find_map(|class| class.init.as_ref().map(|init| (class, init)))
        else {
            return Ok(());
        };
        tracing::trace!(class = %owner.name, "running initializer");
        init(owner, instance, args)
    }

    /// Runs the base class's initialization logic against `instance`.
    ///
    /// This is how an initializer forwards to its parent. A class without a
    /// base has nothing to forward to.
    pub fn super_init(&self, instance: &mut Instance, args: &[Value]) -> Result<()> {
        match &self.base {
            Some(base) => base.initialize(instance, args),
            None => Ok(()),
        }
    }

    /// Creates an instance and initializes it with `args`
    pub fn instantiate(self: &Rc<Self>, args: &[Value]) -> Result<Instance> {
        let mut instance = Instance {
            class: Rc::clone(self),
            fields: Map::new(),
        };
        self.initialize(&mut instance, args)?;
        Ok(instance)
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("base", &self.base.as_ref().map(|base| base.name()))
            .field("methods", &self.prototype.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Makes `parent` the base of `child`.
///
/// The child keeps the methods it already had; each of `extra_groups` is then
/// merged on top in order, later groups overriding earlier ones. Methods the
/// child does not define are found on the parent chain.
pub fn inherit(
    child: Class,
    parent: &Rc<Class>,
    extra_groups: impl IntoIterator<Item = Methods>,
) -> Rc<Class> {
    let Class {
        name,
        init,
        mut prototype,
        ..
    } = child;
    for group in extra_groups {
        prototype.extend(group);
    }
    tracing::debug!(class = %name, base = %parent.name, "inheriting");

    Rc::new(Class {
        name,
        base: Some(Rc::clone(parent)),
        init,
        prototype,
    })
}

/// An object created by [`Class::instantiate`].
///
/// Holds its class and a [`Map`] of fields, so instances can be inspected
/// with the iteration and structural helpers of this crate.
pub struct Instance {
    class: Rc<Class>,
    fields: Map,
}

impl Instance {
    /// Returns the class this instance was created from
    pub fn class(&self) -> &Rc<Class> {
        &self.class
    }

    /// Returns true if `class` is this instance's class or an ancestor of it
    pub fn instance_of(&self, class: &Class) -> bool {
        self.class.is_subclass_of(class)
    }

    /// Returns true if the instance responds to `name`
    pub fn responds_to(&self, name: &str) -> bool {
        self.class.responds_to(name)
    }

    /// Gets a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Sets a field, returning the old value if present
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key, value)
    }

    /// Borrows all fields
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    /// Mutably borrows all fields
    pub fn fields_mut(&mut self) -> &mut Map {
        &mut self.fields
    }

    /// Calls a method found on the class chain
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let method = self
            .class
            .lookup(name)
            .cloned()
            .ok_or_else(|| ClassError::NotCallable {
                class: self.class.name.clone(),
                method: name.to_string(),
            })?;
        tracing::trace!(class = %self.class.name, method = name, "dispatching");
        method(self, args)
    }

    /// Wraps the instance for use with [`bind`] and [`bind_all`]
    pub fn into_receiver(self) -> Receiver {
        Rc::new(RefCell::new(self))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class.name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Fixes `method` to `receiver`: the result can be called with just the
/// arguments.
pub fn bind(name: impl Into<String>, method: Method, receiver: &Receiver) -> BoundMethod {
    let name = name.into();
    let receiver = Rc::clone(receiver);
    Rc::new(move |args: &[Value]| {
        let mut this = receiver
            .try_borrow_mut()
            .map_err(|_| ClassError::ReceiverBusy {
                method: name.clone(),
            })?;
        method(&mut this, args)
    })
}

/// Binds every method of the group to `receiver`, keeping names and order.
pub fn bind_all(receiver: &Receiver, methods: Methods) -> BoundMethods {
    methods
        .into_iter()
        .map(|(name, method)| {
            let bound = bind(name.clone(), method, receiver);
            (name, bound)
        })
        .collect()
}

/// Calls `method` on every instance that responds to it, collecting the
/// results in order. Instances without the method are skipped.
pub fn invoke_all<'a>(
    instances: impl IntoIterator<Item = &'a mut Instance>,
    method: &str,
    args: &[Value],
) -> Result<List> {
    let mut results = List::new();
    for instance in instances {
        if instance.responds_to(method) {
            results.push(instance.call(method, args)?);
        }
    }
    Ok(results)
}
