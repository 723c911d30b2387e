//! Calling closures.

use quill_ir::Expr;
use quill_stack::ensure_sufficient_stack;

use super::{ExecOutcome, Interpreter};
use crate::errors::{arity_mismatch, not_callable, EvalResult};
use crate::{Environment, FunctionValue, Value};

impl Interpreter {
    /// Evaluate `callee(args...)` for a non-built-in call.
    ///
    /// The callee is checked before arguments are evaluated; arguments are
    /// then evaluated left to right in the caller's environment.
    pub(super) fn eval_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        env: &Environment,
    ) -> EvalResult {
        let function = match self.eval_expr(callee, env)? {
            Value::Function(function) => function,
            other => return Err(not_callable(other.type_name())),
        };
        let args = args
            .iter()
            .map(|arg| self.eval_expr(arg, env))
            .collect::<Result<Vec<_>, _>>()?;
        self.call_function(&function, args)
    }

    /// Run a function body in a fresh scope whose parent is the closure.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(name = self.interner.lookup(function.name()))
    )]
    pub fn call_function(&mut self, function: &FunctionValue, args: Vec<Value>) -> EvalResult {
        if args.len() != function.params().len() {
            return Err(arity_mismatch(
                self.interner.lookup(function.name()),
                function.params().len(),
                args.len(),
            ));
        }

        let call_env = function.closure().child();
        for (param, arg) in function.params().iter().zip(args) {
            call_env.define(*param, arg);
        }

        let outcome = ensure_sufficient_stack(|| self.exec_block(function.body(), &call_env))?;
        Ok(match outcome {
            ExecOutcome::Return(value) => value,
            ExecOutcome::Normal => Value::empty_text(),
        })
    }
}
