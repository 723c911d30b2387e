//! The `run` command: lex, parse, and execute a Quill source file.

use quill_diagnostic::{stderr_emitter, DiagnosticQueue};

use super::read_file;
use crate::{run_source, RunConfig};

/// Run a file and exit with status 1 if parsing or any statement failed.
///
/// Lexer errors are reported but do not change the exit status.
pub fn run_file(path: &str, config: &RunConfig) {
    let content = read_file(path);
    let mut diagnostics = DiagnosticQueue::new(stderr_emitter());

    let report = run_source(&content, config, &mut diagnostics);
    tracing::debug!(?report, path, "run finished");

    if !report.is_success() {
        std::process::exit(report.exit_code());
    }
}
