//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use quill_ir::{SharedInterner, StringInterner};

use super::Interpreter;
use crate::{stdout_handler, Environment, InputHandler, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// Defaults: a fresh interner, stdout output, and non-interactive input.
/// The global environment always starts empty.
#[derive(Default)]
pub struct InterpreterBuilder {
    interner: Option<SharedInterner>,
    print_handler: Option<SharedPrintHandler>,
    input_handler: InputHandler,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share an interner with the lexer that produced the program.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Set the print handler for `print` and `printupper`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set where `input` reads from.
    #[must_use]
    pub fn input_handler(mut self, handler: InputHandler) -> Self {
        self.input_handler = handler;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            interner: self.interner.unwrap_or_else(StringInterner::shared),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler,
            globals: Environment::new(),
        }
    }
}
