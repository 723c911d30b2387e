//! Driver configuration, built from command-line flags.

use quill_eval::{stdout_handler, InputHandler, SharedPrintHandler};

/// How a program is run.
#[derive(Clone)]
pub struct RunConfig {
    /// Print the token stream before running (`run --tokens`).
    pub dump_tokens: bool,
    /// `input` prompts and reads stdin instead of yielding empty text.
    pub interactive_input: bool,
    /// Destination of `print`, `printupper`, and token dumps.
    pub print: SharedPrintHandler,
}

impl RunConfig {
    pub fn new() -> Self {
        RunConfig {
            dump_tokens: false,
            interactive_input: false,
            print: stdout_handler(),
        }
    }

    #[must_use]
    pub fn with_dump_tokens(mut self, dump_tokens: bool) -> Self {
        self.dump_tokens = dump_tokens;
        self
    }

    #[must_use]
    pub fn with_interactive_input(mut self, interactive_input: bool) -> Self {
        self.interactive_input = interactive_input;
        self
    }

    #[must_use]
    pub fn with_print(mut self, print: SharedPrintHandler) -> Self {
        self.print = print;
        self
    }

    pub(crate) fn input_handler(&self) -> InputHandler {
        if self.interactive_input {
            InputHandler::Interactive
        } else {
            InputHandler::Empty
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}
