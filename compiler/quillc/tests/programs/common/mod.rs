//! Shared helpers for whole-program tests.

use quill_diagnostic::{buffer_emitter, DiagnosticKind, DiagnosticQueue};
use quill_eval::buffer_handler;
use quillc::{run_source, RunConfig, RunReport};

/// Everything observable from one run.
pub struct Run {
    pub output: String,
    pub diagnostics: String,
    pub report: RunReport,
    pub queue: DiagnosticQueue,
}

impl Run {
    /// Diagnostics as separate lines.
    pub fn diagnostic_lines(&self) -> Vec<&str> {
        self.diagnostics.lines().collect()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.queue.count(kind)
    }
}

/// Run `source` in a fresh session with non-interactive input.
pub fn run(source: &str) -> Run {
    let print = buffer_handler();
    let emitter = buffer_emitter();
    let config = RunConfig::new().with_print(print.clone());
    let mut queue = DiagnosticQueue::new(emitter.clone());

    let report = run_source(source, &config, &mut queue);

    Run {
        output: print.get_output(),
        diagnostics: emitter.output(),
        report,
        queue,
    }
}

/// Run `source` and return its output, asserting nothing was reported.
pub fn output_of(source: &str) -> String {
    let run = run(source);
    assert_eq!(run.diagnostics, "", "unexpected diagnostics for {source:?}");
    run.output
}
