//! Lexical environments.
//!
//! An [`Environment`] is a handle on one node of a parent-linked scope
//! chain. Blocks and calls create child nodes; closures keep a handle on
//! the node they were declared in. There is no process-wide global: every
//! evaluation call takes its environment explicitly.

// Rc is the intentional implementation detail of LocalScope<T>
#![expect(
    clippy::disallowed_types,
    reason = "Rc is the implementation of LocalScope<T>"
)]

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use quill_ir::Name;

use crate::Value;

/// Error returned by `Scope::assign` when no scope binds the name.
/// Hands the rejected value back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Unbound(pub Value);

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope: bindings plus a link to the enclosing scope.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Insert or overwrite in this scope only.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        if let Some(value) = self.bindings.get(&name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Overwrite the nearest existing binding of `name`. Never creates one.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), Unbound> {
        if let Some(slot) = self.bindings.get_mut(&name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(Unbound(value))
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
            || self
                .parent
                .as_ref()
                .is_some_and(|parent| parent.borrow().contains(name))
    }
}

// Bindings are not printed: closures stored in them point back at scopes.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.bindings.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

/// Handle on one node of the scope chain.
///
/// Cloning is cheap and yields a handle on the same node.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root environment with no parent.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::new()),
        }
    }

    /// A new empty node whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Self {
        tracing::trace!("push scope");
        Environment {
            scope: LocalScope::new(Scope::with_parent(self.scope.clone())),
        }
    }

    #[inline]
    pub fn define(&self, name: Name, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    #[inline]
    pub fn assign(&self, name: Name, value: Value) -> Result<(), Unbound> {
        self.scope.borrow_mut().assign(name, value)
    }

    /// Whether any node in the chain binds `name`.
    pub fn is_defined(&self, name: Name) -> bool {
        self.scope.borrow().contains(name)
    }

    /// Number of nodes from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut parent = self.scope.borrow().parent.clone();
        while let Some(scope) = parent {
            depth += 1;
            parent = scope.borrow().parent.clone();
        }
        depth
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .finish()
    }
}
