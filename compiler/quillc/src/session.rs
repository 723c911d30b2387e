//! Running source text against a persistent interpreter.

use quill_diagnostic::{Diagnostic, DiagnosticQueue};
use quill_eval::{Interpreter, InterpreterBuilder, PrintHandlerImpl};
use quill_ir::{Stmt, StringInterner, Token};
use quill_lexer::LexOutput;

use crate::RunConfig;

/// What happened during one call to [`Session::run`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub lex_errors: usize,
    /// Parsing failed, so nothing ran.
    pub parse_failed: bool,
    /// Top-level statements executed, failed ones included.
    pub statements: usize,
    /// Top-level statements abandoned with an execution error.
    pub failed: usize,
}

impl RunReport {
    /// No parse error and no execution error. Lexer errors alone don't count.
    pub fn is_success(&self) -> bool {
        !self.parse_failed && self.failed == 0
    }

    /// Process exit code for the command line.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }
}

/// One interpreter plus the configuration it was built from.
///
/// Globals survive across [`Session::run`] calls.
pub struct Session {
    config: RunConfig,
    interpreter: Interpreter,
}

impl Session {
    pub fn new(config: RunConfig) -> Self {
        let interpreter = build_interpreter(&config);
        Session {
            config,
            interpreter,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Forget every global binding.
    pub fn reset(&mut self) {
        self.interpreter.reset_globals();
    }

    /// Lex, parse, and execute `source`, reporting problems to `diagnostics`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run(&mut self, source: &str, diagnostics: &mut DiagnosticQueue) -> RunReport {
        let mut report = RunReport::default();
        let interner = self.interpreter.interner().clone();

        let lexed = lex_reporting(source, &interner, diagnostics);
        report.lex_errors = lexed.errors.len();

        if self.config.dump_tokens {
            dump_tokens(&lexed.tokens, &self.config.print);
        }

        let Some(program) = parse_reporting(&lexed.tokens, &interner, diagnostics) else {
            report.parse_failed = true;
            return report;
        };

        for stmt in &program {
            report.statements += 1;
            if let Err(err) = self.interpreter.run_top_level(stmt) {
                tracing::debug!(%err, "top-level statement failed");
                report.failed += 1;
                diagnostics.report(Diagnostic::execution(err.to_string()));
            }
        }

        report
    }
}

/// Run `source` once in a fresh session.
pub fn run_source(
    source: &str,
    config: &RunConfig,
    diagnostics: &mut DiagnosticQueue,
) -> RunReport {
    Session::new(config.clone()).run(source, diagnostics)
}

fn build_interpreter(config: &RunConfig) -> Interpreter {
    InterpreterBuilder::new()
        .print_handler(config.print.clone())
        .input_handler(config.input_handler())
        .build()
}

/// Lex, reporting every skipped piece of input.
pub(crate) fn lex_reporting(
    source: &str,
    interner: &StringInterner,
    diagnostics: &mut DiagnosticQueue,
) -> LexOutput {
    let lexed = quill_lexer::lex(source, interner);
    for err in &lexed.errors {
        diagnostics.report(Diagnostic::lexer(err.to_string(), err.span));
    }
    lexed
}

/// Parse, reporting the error if there is one.
pub(crate) fn parse_reporting(
    tokens: &[Token],
    interner: &StringInterner,
    diagnostics: &mut DiagnosticQueue,
) -> Option<Vec<Stmt>> {
    match quill_parse::parse(tokens, interner) {
        Ok(program) => Some(program),
        Err(err) => {
            diagnostics.report(Diagnostic::parse(err.message, err.span));
            None
        }
    }
}

/// One line per token: `KIND lexeme`, plus the value for numbers.
pub(crate) fn dump_tokens(tokens: &[Token], out: &PrintHandlerImpl) {
    for token in tokens {
        out.println(&token.to_string());
    }
}
