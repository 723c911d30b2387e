//! Tree-walking evaluator for Quill.
//!
//! - [`Value`]: runtime values; arrays and dictionaries are shared handles
//! - [`Environment`]: parent-linked lexical scopes
//! - [`Interpreter`]: `eval_expr` / `exec_stmt` over the syntax tree
//! - [`EvalError`]: runtime errors, fatal to the current top-level statement
//! - print and input handlers: where `print` writes and `input` reads

mod environment;
pub mod errors;
mod input_handler;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{Environment, LocalScope, Scope, Unbound};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use input_handler::InputHandler;
pub use interpreter::{ExecOutcome, Interpreter, InterpreterBuilder};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{format_number, Dictionary, FunctionValue, Heap, Value, FUNCTION_TEXT};
