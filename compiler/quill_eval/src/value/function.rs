//! Closures.

// The declaration is shared with the syntax tree.
#![expect(
    clippy::disallowed_types,
    reason = "Rc<FunctionDecl> is shared with the AST"
)]

use std::fmt;
use std::rc::Rc;

use quill_ir::{FunctionDecl, Name};

use crate::Environment;

/// A function declaration paired with the environment it was declared in.
pub struct FunctionValue {
    decl: Rc<FunctionDecl>,
    closure: Environment,
}

impl FunctionValue {
    pub fn new(decl: Rc<FunctionDecl>, closure: Environment) -> Self {
        FunctionValue { decl, closure }
    }

    pub fn name(&self) -> Name {
        self.decl.name
    }

    pub fn params(&self) -> &[Name] {
        &self.decl.params
    }

    pub fn body(&self) -> &[quill_ir::Stmt] {
        &self.decl.body
    }

    /// The environment captured at declaration.
    pub fn closure(&self) -> &Environment {
        &self.closure
    }
}

impl fmt::Debug for FunctionValue {
    // The closure is omitted: it usually contains this function.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.decl.name)
            .field("params", &self.decl.params)
            .finish_non_exhaustive()
    }
}
