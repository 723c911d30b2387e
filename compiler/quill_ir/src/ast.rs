//! Syntax tree.
//!
//! Expressions produce values; statements mutate the environment or write
//! output. The built-in operations (`input`, `append`, `remove`, `put`,
//! `dict_remove`) are resolved by name at parse time and get their own
//! [`Expr`] variants with fixed arity.

// Function declarations are shared between the tree and every closure
// created from them.
#![expect(
    clippy::disallowed_types,
    reason = "Rc shares FunctionDecl between the AST and runtime closures"
)]

use std::fmt;
use std::rc::Rc;

use crate::Name;

/// Binary operators, in no particular order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`, the identity.
    Plus,
    /// `!x`
    Not,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
        }
    }
}

/// The fixed set of built-in operations recognized at call sites.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Input,
    Append,
    Remove,
    Put,
    DictRemove,
}

impl Builtin {
    /// Resolve a callee name to a built-in, if it is one.
    pub fn from_name(name: &str) -> Option<Builtin> {
        match name {
            "input" => Some(Builtin::Input),
            "append" => Some(Builtin::Append),
            "remove" => Some(Builtin::Remove),
            "put" => Some(Builtin::Put),
            "dict_remove" => Some(Builtin::DictRemove),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Input => "input",
            Builtin::Append => "append",
            Builtin::Remove => "remove",
            Builtin::Put => "put",
            Builtin::DictRemove => "dict_remove",
        }
    }

    /// Number of arguments the built-in takes.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Input => 1,
            Builtin::Append | Builtin::Remove | Builtin::DictRemove => 2,
            Builtin::Put => 3,
        }
    }
}

/// Literal constants.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// A number together with the exact text it was written as.
    Number { value: f64, text: Box<str> },
    Str(Box<str>),
    Bool(bool),
}

/// Expression nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Variable(Name),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `[a, b, c]`
    Array(Vec<Expr>),
    /// `dict{ k: v, ... }`
    Dict(Vec<(Expr, Expr)>),
    /// `receiver[index]`
    Index {
        receiver: Box<Expr>,
        index: Box<Expr>,
    },
    /// `callee(args...)` for anything that is not a built-in.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `input(prompt)`
    Input { prompt: Box<Expr> },
    /// `append(array, element)`
    Append {
        array: Box<Expr>,
        element: Box<Expr>,
    },
    /// `remove(array, index)`
    Remove {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    /// `put(dict, key, value)`
    Put {
        dict: Box<Expr>,
        key: Box<Expr>,
        value: Box<Expr>,
    },
    /// `dict_remove(dict, key)`
    DictRemove { dict: Box<Expr>, key: Box<Expr> },
}

impl Expr {
    pub fn number(value: f64, text: impl Into<Box<str>>) -> Expr {
        Expr::Literal(Literal::Number {
            value,
            text: text.into(),
        })
    }

    pub fn string(text: impl Into<Box<str>>) -> Expr {
        Expr::Literal(Literal::Str(text.into()))
    }

    pub fn bool(value: bool) -> Expr {
        Expr::Literal(Literal::Bool(value))
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Build the node for a built-in call. `args.len()` must equal
    /// `builtin.arity()`; returns `None` otherwise.
    pub fn builtin(builtin: Builtin, args: Vec<Expr>) -> Option<Expr> {
        if args.len() != builtin.arity() {
            return None;
        }
        let mut args = args.into_iter().map(Box::new);
        let mut next = || args.next();
        let expr = match builtin {
            Builtin::Input => Expr::Input { prompt: next()? },
            Builtin::Append => Expr::Append {
                array: next()?,
                element: next()?,
            },
            Builtin::Remove => Expr::Remove {
                array: next()?,
                index: next()?,
            },
            Builtin::Put => Expr::Put {
                dict: next()?,
                key: next()?,
                value: next()?,
            },
            Builtin::DictRemove => Expr::DictRemove {
                dict: next()?,
                key: next()?,
            },
        };
        Some(expr)
    }
}

/// A `fun name(params) { body }` declaration.
#[derive(Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
}

/// Statement nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Print(Expr),
    PrintUpper(Expr),
    /// `name = value`: assigns the nearest existing binding, or declares one
    /// in the current scope when none exists.
    Var { name: Name, value: Expr },
    Expression(Expr),
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Function(Rc<FunctionDecl>),
    Return(Option<Expr>),
}

impl Stmt {
    pub fn function(name: Name, params: Vec<Name>, body: Vec<Stmt>) -> Stmt {
        Stmt::Function(Rc::new(FunctionDecl { name, params, body }))
    }
}
