//! Tree-walking interpreter.
//!
//! `eval_expr` produces a value; `exec_stmt` runs a statement and reports
//! whether a `return` is unwinding through it. Both take the environment
//! explicitly. Errors propagate with `?` all the way to the top-level
//! statement being run, where the driver reports them and moves on.

mod builder;
mod builtins;
mod function_call;

use quill_ir::{Expr, Literal, SharedInterner, Stmt};
use quill_stack::ensure_sufficient_stack;

use crate::environment::Unbound;
use crate::errors::{type_mismatch, undefined_variable, EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::{Dictionary, Environment, InputHandler, SharedPrintHandler, Value};

pub use builder::InterpreterBuilder;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecOutcome {
    Normal,
    /// A `return` is unwinding toward the nearest call.
    Return(Value),
}

/// Interpreter state shared by every statement of a run.
pub struct Interpreter {
    interner: SharedInterner,
    print_handler: SharedPrintHandler,
    input_handler: InputHandler,
    globals: Environment,
}

impl Interpreter {
    /// An interpreter with a fresh interner, stdout output, and
    /// non-interactive input.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// The interner names must come from; lex source with it.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// The root environment top-level statements run in.
    pub fn globals(&self) -> &Environment {
        &self.globals
    }

    /// Drop every global binding.
    pub fn reset_globals(&mut self) {
        tracing::debug!("resetting global environment");
        self.globals = Environment::new();
    }

    /// Run one top-level statement in the global environment.
    ///
    /// A `return` outside any function just ends the statement.
    pub fn run_top_level(&mut self, stmt: &Stmt) -> Result<(), EvalError> {
        let globals = self.globals.clone();
        self.exec_stmt(stmt, &globals).map(|_| ())
    }

    /// Evaluate an expression.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                Literal::Number { value, text } => Value::number_literal(*value, text),
                Literal::Str(s) => Value::text(&**s),
                Literal::Bool(b) => Value::bool(*b),
            }),
            Expr::Variable(name) => env
                .get(*name)
                .ok_or_else(|| undefined_variable(self.interner.lookup(*name))),
            Expr::Binary { op, left, right } => {
                let left = self.eval_expr(left, env)?;
                let right = self.eval_expr(right, env)?;
                evaluate_binary(&left, &right, *op)
            }
            Expr::Unary { op, operand } => {
                let value = self.eval_expr(operand, env)?;
                evaluate_unary(value, *op)
            }
            Expr::Array(elements) => {
                let items = elements
                    .iter()
                    .map(|e| self.eval_expr(e, env))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::array(items))
            }
            Expr::Dict(entries) => {
                let mut dict = Dictionary::new();
                for (key, value) in entries {
                    let key = self.eval_expr(key, env)?;
                    let value = self.eval_expr(value, env)?;
                    dict.insert(key, value);
                }
                Ok(Value::dict(dict))
            }
            Expr::Index { receiver, index } => {
                let receiver = self.eval_expr(receiver, env)?;
                let index = self.eval_expr(index, env)?;
                builtins::index(&receiver, &index)
            }
            Expr::Call { callee, args } => self.eval_call(callee, args, env),
            Expr::Input { prompt } => {
                let prompt = self.eval_expr(prompt, env)?;
                let line = self
                    .input_handler
                    .read_line(&prompt.display_value(), &self.print_handler);
                Ok(Value::Text(line))
            }
            Expr::Append { array, element } => {
                let array = self.eval_expr(array, env)?;
                let element = self.eval_expr(element, env)?;
                builtins::append(array, element)
            }
            Expr::Remove { array, index } => {
                let array = self.eval_expr(array, env)?;
                let index = self.eval_expr(index, env)?;
                builtins::remove(&array, &index)
            }
            Expr::Put { dict, key, value } => {
                let dict = self.eval_expr(dict, env)?;
                let key = self.eval_expr(key, env)?;
                let value = self.eval_expr(value, env)?;
                builtins::put(dict, key, value)
            }
            Expr::DictRemove { dict, key } => {
                let dict = self.eval_expr(dict, env)?;
                let key = self.eval_expr(key, env)?;
                builtins::dict_remove(&dict, &key)
            }
        }
    }

    /// Execute a statement.
    pub fn exec_stmt(&mut self, stmt: &Stmt, env: &Environment) -> Result<ExecOutcome, EvalError> {
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt, env))
    }

    fn exec_stmt_inner(
        &mut self,
        stmt: &Stmt,
        env: &Environment,
    ) -> Result<ExecOutcome, EvalError> {
        match stmt {
            Stmt::Print(expr) => {
                let value = self.eval_expr(expr, env)?;
                self.print_handler.println(&value.display_value());
            }
            Stmt::PrintUpper(expr) => {
                let value = self.eval_expr(expr, env)?;
                self.print_handler
                    .println(&value.display_value().to_uppercase());
            }
            Stmt::Var { name, value } => {
                let value = self.eval_expr(value, env)?;
                if let Err(Unbound(value)) = env.assign(*name, value) {
                    env.define(*name, value);
                }
            }
            Stmt::Expression(expr) => {
                self.eval_expr(expr, env)?;
            }
            Stmt::Block(statements) => return self.exec_block(statements, &env.child()),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval_condition(condition, env, "if condition")? {
                    return self.exec_stmt(then_branch, env);
                }
                if let Some(else_branch) = else_branch {
                    return self.exec_stmt(else_branch, env);
                }
            }
            Stmt::While { condition, body } => {
                while self.eval_condition(condition, env, "while condition")? {
                    if let ExecOutcome::Return(value) = self.exec_stmt(body, env)? {
                        return Ok(ExecOutcome::Return(value));
                    }
                }
            }
            Stmt::Function(decl) => {
                let function = Value::function(decl.clone(), env.clone());
                env.define(decl.name, function);
            }
            Stmt::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::empty_text(),
                };
                return Ok(ExecOutcome::Return(value));
            }
        }
        Ok(ExecOutcome::Normal)
    }

    /// Run `statements` in `env` (no new scope), stopping at a `return`.
    pub fn exec_block(
        &mut self,
        statements: &[Stmt],
        env: &Environment,
    ) -> Result<ExecOutcome, EvalError> {
        for stmt in statements {
            if let ExecOutcome::Return(value) = self.exec_stmt(stmt, env)? {
                return Ok(ExecOutcome::Return(value));
            }
        }
        Ok(ExecOutcome::Normal)
    }

    fn eval_condition(
        &mut self,
        condition: &Expr,
        env: &Environment,
        context: &str,
    ) -> Result<bool, EvalError> {
        let value = self.eval_expr(condition, env)?;
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(context, "boolean", value.type_name()))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
